use crate::{
    ast::Node,
    error::EvaluationError,
    interpreter::{
        evaluator::core::{EvalResult, evaluate_node},
        token::BinaryOperator,
    },
};

/// Evaluates a binary node together with the chain of binary nodes down its
/// left side.
///
/// Long left-associative chains such as `1 + 1 + ... + 1` are walked in a
/// loop rather than recursively, so their length is not limited by the stack.
/// Operands are still evaluated in the same order as a recursive walk: left
/// to right, except for `/` and `%`, which evaluate and check their right
/// operand before anything below them. An error in the right operand of those
/// two is therefore reported before any error in the left.
///
/// # Errors
/// Propagates operand errors and the errors of [`eval_binary`].
pub fn eval_binary_chain(node: &Node) -> EvalResult<f64> {
    let mut pending = Vec::new();
    let mut current = node;

    while let Node::Binary { op, left, right } = current {
        let divisor = match op {
            BinaryOperator::Div | BinaryOperator::Mod => {
                let divisor = evaluate_node(right)?;
                check_divisor(*op, divisor)?;
                Some(divisor)
            },
            BinaryOperator::Add
            | BinaryOperator::Sub
            | BinaryOperator::Mul
            | BinaryOperator::Pow => None,
        };
        pending.push((*op, right.as_ref(), divisor));
        current = left.as_ref();
    }

    let mut value = evaluate_node(current)?;
    for (op, right, divisor) in pending.into_iter().rev() {
        let rhs = match divisor {
            Some(divisor) => divisor,
            None => evaluate_node(right)?,
        };
        value = eval_binary(op, value, rhs)?;
    }
    Ok(value)
}

/// Applies a binary operator to two evaluated operands.
///
/// `%` is the truncated remainder, so the result takes the sign of `lhs`.
/// Zero is compared numerically, so `-0.0` counts as zero. `^` is `NaN` for a
/// `NaN` exponent, and for an infinite exponent on a base of magnitude one.
///
/// # Errors
/// - [`EvaluationError::DivideByZero`] if `op` is `/` and `rhs` is zero.
/// - [`EvaluationError::ModuloByZero`] if `op` is `%` and `rhs` is zero.
/// - [`EvaluationError::ZeroToNegativePower`] if `op` is `^`, `lhs` is zero
///   and `rhs` is negative.
///
/// # Example
/// ```
/// use exprtree::{
///     error::EvaluationError,
///     interpreter::{evaluator::binary::eval_binary, token::BinaryOperator},
/// };
///
/// assert_eq!(eval_binary(BinaryOperator::Mod, -7.0, 3.0), Ok(-1.0));
/// assert_eq!(eval_binary(BinaryOperator::Pow, 0.0, -1.0),
///            Err(EvaluationError::ZeroToNegativePower));
/// ```
#[allow(clippy::float_cmp)]
pub fn eval_binary(op: BinaryOperator, lhs: f64, rhs: f64) -> EvalResult<f64> {
    match op {
        BinaryOperator::Add => Ok(lhs + rhs),
        BinaryOperator::Sub => Ok(lhs - rhs),
        BinaryOperator::Mul => Ok(lhs * rhs),
        BinaryOperator::Div => {
            check_divisor(op, rhs)?;
            Ok(lhs / rhs)
        },
        BinaryOperator::Mod => {
            check_divisor(op, rhs)?;
            Ok(lhs % rhs)
        },
        BinaryOperator::Pow => {
            if lhs == 0.0 && rhs < 0.0 {
                return Err(EvaluationError::ZeroToNegativePower);
            }
            if rhs.is_nan() || (rhs.is_infinite() && lhs.abs() == 1.0) {
                return Ok(f64::NAN);
            }
            Ok(lhs.powf(rhs))
        },
    }
}

#[allow(clippy::float_cmp)]
fn check_divisor(op: BinaryOperator, divisor: f64) -> EvalResult<()> {
    match op {
        BinaryOperator::Div if divisor == 0.0 => Err(EvaluationError::DivideByZero),
        BinaryOperator::Mod if divisor == 0.0 => Err(EvaluationError::ModuloByZero),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(eval_binary(BinaryOperator::Div, 1.0, -0.0), Err(EvaluationError::DivideByZero));
        assert_eq!(eval_binary(BinaryOperator::Mod, 1.0, -0.0), Err(EvaluationError::ModuloByZero));
        assert_eq!(eval_binary(BinaryOperator::Pow, -0.0, -2.0),
                   Err(EvaluationError::ZeroToNegativePower));
    }

    #[test]
    fn power_edge_cases() {
        assert_eq!(eval_binary(BinaryOperator::Pow, 0.0, 0.0), Ok(1.0));
        assert_eq!(eval_binary(BinaryOperator::Pow, 2.0, -1.0), Ok(0.5));
        assert!(eval_binary(BinaryOperator::Pow, -8.0, 1.0 / 3.0).unwrap().is_nan());
    }

    #[test]
    fn power_does_not_mask_nan() {
        assert!(eval_binary(BinaryOperator::Pow, 1.0, f64::NAN).unwrap().is_nan());
        assert!(eval_binary(BinaryOperator::Pow, -1.0, f64::INFINITY).unwrap().is_nan());
        assert!(eval_binary(BinaryOperator::Pow, 1.0, f64::NEG_INFINITY).unwrap().is_nan());
        assert_eq!(eval_binary(BinaryOperator::Pow, f64::NAN, 0.0), Ok(1.0));
        assert_eq!(eval_binary(BinaryOperator::Pow, 2.0, f64::INFINITY), Ok(f64::INFINITY));
    }

    #[test]
    fn nan_divisor_is_not_zero() {
        assert!(eval_binary(BinaryOperator::Div, 1.0, f64::NAN).unwrap().is_nan());
    }
}
