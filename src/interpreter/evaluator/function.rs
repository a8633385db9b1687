use crate::{
    error::EvaluationError,
    interpreter::{evaluator::core::EvalResult, token::Function},
};

/// Applies a built-in function to an evaluated argument.
///
/// Only `sqrt` and the logarithms check their domain. Every other function
/// follows IEEE-754, so for example `acos ( 2 )` is `NaN` rather than an
/// error.
///
/// # Errors
/// - [`EvaluationError::NegativeSquareRoot`] if `sqrt` gets a negative value.
/// - [`EvaluationError::NonPositiveLogarithm`] if `log`, `log2` or `log10`
///   gets zero or a negative value.
///
/// # Example
/// ```
/// use exprtree::interpreter::{evaluator::function::eval_function, token::Function};
///
/// assert_eq!(eval_function(Function::Log2, 8.0), Ok(3.0));
/// assert!(eval_function(Function::Acos, 2.0).unwrap().is_nan());
/// assert!(eval_function(Function::Sqrt, -1.0).is_err());
/// ```
pub fn eval_function(function: Function, x: f64) -> EvalResult<f64> {
    let value = match function {
        Function::Abs => x.abs(),
        Function::Acos => x.acos(),
        Function::Asin => x.asin(),
        Function::Atan => x.atan(),
        Function::Ceil => x.ceil(),
        Function::Cos => x.cos(),
        Function::Floor => x.floor(),
        Function::Log => logarithm(x, f64::ln)?,
        Function::Log2 => logarithm(x, f64::log2)?,
        Function::Log10 => logarithm(x, f64::log10)?,
        Function::Round => round_half_up(x),
        Function::Sin => x.sin(),
        Function::Sqrt => {
            if x < 0.0 {
                return Err(EvaluationError::NegativeSquareRoot);
            }
            x.sqrt()
        },
        Function::Tan => x.tan(),
    };
    Ok(value)
}

fn logarithm(x: f64, log: fn(f64) -> f64) -> EvalResult<f64> {
    if x <= 0.0 {
        return Err(EvaluationError::NonPositiveLogarithm);
    }
    Ok(log(x))
}

/// Rounds to the nearest integer, breaking ties toward positive infinity.
///
/// The result saturates at the bounds of `i64`, and `NaN` rounds to `0`.
///
/// # Example
/// ```
/// use exprtree::interpreter::evaluator::function::round_half_up;
///
/// assert_eq!(round_half_up(2.5), 3.0);
/// assert_eq!(round_half_up(-2.5), -2.0);
/// assert_eq!(round_half_up(-2.6), -3.0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::float_cmp)]
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    let rounded = if x - floor == 0.5 { floor + 1.0 } else { x.round() };
    rounded as i64 as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logarithm_domain() {
        for function in [Function::Log, Function::Log2, Function::Log10] {
            assert_eq!(eval_function(function, 0.0), Err(EvaluationError::NonPositiveLogarithm));
            assert_eq!(eval_function(function, -1.0), Err(EvaluationError::NonPositiveLogarithm));
            assert_eq!(eval_function(function, 1.0), Ok(0.0));
        }
    }

    #[test]
    fn sqrt_accepts_zero() {
        assert_eq!(eval_function(Function::Sqrt, 0.0), Ok(0.0));
        assert_eq!(eval_function(Function::Sqrt, -0.0), Ok(-0.0));
        assert_eq!(eval_function(Function::Sqrt, -0.1), Err(EvaluationError::NegativeSquareRoot));
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn round_saturates() {
        assert_eq!(round_half_up(f64::NAN), 0.0);
        assert_eq!(round_half_up(1e300), i64::MAX as f64);
        assert_eq!(round_half_up(-1e300), i64::MIN as f64);
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
    }
}
