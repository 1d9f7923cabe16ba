use crate::error::ScalarGradError;
use crate::node::Node;
use std::fmt;
use std::str::FromStr;

/// Element-wise activation applied after a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    /// Passes the node through unchanged (no graph node is added).
    Identity,
}

impl Activation {
    pub fn apply(&self, node: &Node) -> Node {
        match self {
            Activation::Tanh => node.tanh(),
            Activation::Identity => node.clone(),
        }
    }
}

impl FromStr for Activation {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tanh" => Ok(Activation::Tanh),
            "identity" | "linear" | "none" => Ok(Activation::Identity),
            _ => Err(ScalarGradError::UnsupportedOperation(format!(
                "Unsupported activation: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::Tanh => write!(f, "tanh"),
            Activation::Identity => write!(f, "identity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_from_str() -> Result<(), ScalarGradError> {
        assert_eq!("tanh".parse::<Activation>()?, Activation::Tanh);
        assert_eq!("TANH".parse::<Activation>()?, Activation::Tanh);
        assert_eq!("linear".parse::<Activation>()?, Activation::Identity);
        assert_eq!("identity".parse::<Activation>()?, Activation::Identity);
        assert!(matches!(
            "relu".parse::<Activation>(),
            Err(ScalarGradError::UnsupportedOperation(_))
        ));
        Ok(())
    }

    #[test]
    fn test_activation_apply() {
        let x = Node::new(0.3);
        let t = Activation::Tanh.apply(&x);
        assert_eq!(t.value(), 0.3f64.tanh());
        assert_eq!(t.op_name(), "tanh");

        let id = Activation::Identity.apply(&x);
        assert!(id.ptr_eq(&x));
    }

    #[test]
    fn test_activation_display_round_trips() -> Result<(), ScalarGradError> {
        for act in [Activation::Tanh, Activation::Identity] {
            assert_eq!(act.to_string().parse::<Activation>()?, act);
        }
        Ok(())
    }
}
