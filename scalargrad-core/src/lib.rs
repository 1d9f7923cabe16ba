//! Scalar reverse-mode automatic differentiation.
//!
//! Expressions are built from [`Node`] leaves with the operators in [`ops`]
//! (or the `+ - * /` and unary `-` overloads, plus [`Node::tanh`]). Calling
//! [`Node::backward`] on the result accumulates `d(result)/d(node)` into the
//! gradient of every node it depends on.
//!
//! ```
//! use scalargrad_core::Node;
//!
//! let a = Node::labeled(2.0, "a");
//! let b = Node::labeled(3.0, "b");
//! let c = &a * &b + &a;
//! c.backward().unwrap();
//! assert_eq!(c.value(), 8.0);
//! assert_eq!(a.grad(), 4.0);
//! assert_eq!(b.grad(), 2.0);
//! ```
//!
//! On top of the engine sit a small neural network toolkit ([`nn`]), an SGD
//! optimizer ([`optim`]) and a full-batch training loop ([`train`]).

pub mod autograd;
pub mod error;
pub mod nn;
pub mod node;
pub mod ops;
pub mod optim;
pub mod train;
pub mod utils;

pub use error::ScalarGradError;
pub use node::{Node, NodeId};
