use scalargrad_core::autograd::{check_grad, GradCheckError};
use scalargrad_core::ops::{add_op, div_op, mul_op, neg_op, sub_op, tanh_op};
use scalargrad_core::{Node, ScalarGradError};

const EPSILON: f64 = 1e-6;
const TOLERANCE: f64 = 1e-5;

fn inputs(values: &[f64]) -> Vec<Node> {
    values.iter().map(|&v| Node::new(v)).collect()
}

#[test]
fn test_every_operator_against_finite_differences() -> Result<(), GradCheckError> {
    let points = [[0.7, -1.3], [2.0, 3.0], [-0.4, 0.9]];
    for p in &points {
        check_grad(|x| Ok(add_op(&x[0], &x[1])), &inputs(p), EPSILON, TOLERANCE)?;
        check_grad(|x| Ok(sub_op(&x[0], &x[1])), &inputs(p), EPSILON, TOLERANCE)?;
        check_grad(|x| Ok(mul_op(&x[0], &x[1])), &inputs(p), EPSILON, TOLERANCE)?;
        check_grad(|x| Ok(div_op(&x[0], &x[1])), &inputs(p), EPSILON, TOLERANCE)?;
        check_grad(|x| Ok(neg_op(&x[0])), &inputs(&p[..1]), EPSILON, TOLERANCE)?;
        check_grad(|x| Ok(tanh_op(&x[0])), &inputs(&p[..1]), EPSILON, TOLERANCE)?;
    }
    Ok(())
}

#[test]
fn test_chain_rule_composition() -> Result<(), GradCheckError> {
    // f(g(x)) with g(x) = x * x - 1, f(u) = tanh(u) / (u + 3)
    let f_of_g = |x: &[Node]| -> Result<Node, ScalarGradError> {
        let u = &x[0] * &x[0] - 1.0;
        Ok(u.tanh() / (&u + 3.0))
    };
    for &x in &[-1.2, 0.0, 0.3, 1.7] {
        check_grad(f_of_g, &inputs(&[x]), EPSILON, TOLERANCE)?;
    }
    Ok(())
}

#[test]
fn test_shared_subexpression() -> Result<(), GradCheckError> {
    // The same intermediate feeds several consumers.
    let func = |x: &[Node]| -> Result<Node, ScalarGradError> {
        let s = &x[0] * &x[1];
        let t = s.tanh();
        Ok(&t * &s + &t / &x[1] - &s)
    };
    check_grad(func, &inputs(&[0.6, -1.1]), EPSILON, TOLERANCE)
}

#[test]
fn test_wrong_gradient_is_caught() {
    // Rebuilding with a constant that depends on the input value breaks the
    // analytical gradient: d/dx (x * c(x)) is not c(x).
    let func = |x: &[Node]| -> Result<Node, ScalarGradError> {
        let c = Node::new(x[0].value());
        Ok(&x[0] * &c)
    };
    let result = check_grad(func, &inputs(&[1.5]), EPSILON, TOLERANCE);
    assert!(matches!(result, Err(GradCheckError::GradientMismatch { input_index: 0, .. })));
}
