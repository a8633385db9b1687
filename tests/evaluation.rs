use exprtree::{
    Calculation, calculate,
    error::{Error, EvaluationError},
    evaluate, parse,
};
use pretty_assertions::assert_eq;

fn eval(source: &str) -> Result<f64, EvaluationError> {
    let tree = parse(source).unwrap_or_else(|e| panic!("Expression {source:?} failed to parse: {e}"));
    evaluate(&tree)
}

fn assert_value(source: &str, expected: f64) {
    match eval(source) {
        Ok(value) => assert!((value - expected).abs() < 1e-9,
                             "Expression {source:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("Expression {source:?} failed to evaluate: {e}"),
    }
}

fn assert_error(source: &str, expected: EvaluationError) {
    assert_eq!(eval(source), Err(expected), "expression {source:?}");
}

#[test]
fn arithmetic_and_precedence() {
    assert_value("10", 10.0);
    assert_value("5 ^ 2", 25.0);
    assert_value("10 + 20 * 30", 610.0);
    assert_value("10 * ( 10 + 20 - 5.5 ) - 50", 195.0);
    assert_value("10 + 20 - 2 ^ 2 ^ 3", -226.0);
    assert_value("7 % 3", 1.0);
    assert_value("-7 % 3", -1.0);
}

#[test]
fn associativity() {
    assert_value("2 ^ 2 ^ 3", 256.0);
    assert_value("10 - 5 - 2", 3.0);
    assert_value("64 / 4 / 2", 8.0);
}

#[test]
fn functions_and_constants() {
    assert_value("10 + round ( 1.7 - 1 )", 11.0);
    assert_value("log ( e )", 0.999_999_695_226_903);
    assert_value("log10 ( 1000 )", 3.0);
    assert_value("log2 ( 1024 )", 10.0);
    assert_value("abs ( -PI )", 3.141_592);
    assert_value("floor ( -2.5 ) + ceil ( 2.1 )", 0.0);
    assert_value("sqrt ( 16 ) * cos ( 0 )", 4.0);
    assert_value("16 * atan ( 1 / 5 ) - 4 * atan ( 1 / 239 )", std::f64::consts::PI);
}

#[test]
fn long_expression() {
    assert_value("( 2 ^ ( 1 + 2 ) - ( 2 + 2 ) ^ ( 4 / 2 ) * abs ( -2 ) ) + 10 % 4 - sin ( PI / 2 ) * ( 4 / ( 1 + 1.5 ) )",
                 -23.6);
}

#[test]
fn round_breaks_ties_upward() {
    assert_value("round ( 2.5 )", 3.0);
    assert_value("round ( -2.5 )", -2.0);
    assert_value("round ( -2.51 )", -3.0);
}

#[test]
fn inverse_trigonometry_outside_domain_is_nan() {
    assert!(eval("acos ( 2 )").unwrap().is_nan());
    assert!(eval("asin ( -2 )").unwrap().is_nan());
}

#[test]
fn power_propagates_nan() {
    assert!(eval("1 ^ acos ( 2 )").unwrap().is_nan());
    assert!(eval("-1 ^ asin ( 2 )").unwrap().is_nan());
    assert_value("acos ( 2 ) ^ 0", 1.0);
}

#[test]
fn long_chains_evaluate() {
    assert_value(&vec!["1"; 5_000].join(" + "), 5_000.0);
    assert_value(&vec!["1"; 100_000].join(" + "), 100_000.0);
    assert_value(&vec!["1"; 1_100].join(" * "), 1.0);
    assert_value(&format!("10000 {}", " - 1".repeat(4_999)), 5_001.0);
    assert_value(&format!("1024 {}", " / 2".repeat(10)), 1.0);
}

#[test]
fn long_chains_keep_evaluation_order() {
    let chain = format!("sqrt ( -1 ) {} / 0", " * 1".repeat(3_000));
    assert_error(&chain, EvaluationError::DivideByZero);

    let chain = format!("sqrt ( -1 ) {} / 1", " * 1".repeat(3_000));
    assert_error(&chain, EvaluationError::NegativeSquareRoot);

    let chain = format!("sqrt ( -1 ) {} + 1 / 0", " + 1".repeat(3_000));
    assert_error(&chain, EvaluationError::NegativeSquareRoot);

    let chain = format!("log ( 0 ) {} % 0 + sqrt ( -1 )", " * 2".repeat(3_000));
    assert_error(&chain, EvaluationError::ModuloByZero);
}

#[test]
fn domain_errors() {
    assert_error("5 / 0", EvaluationError::DivideByZero);
    assert_error("10 + 20 % ( 30 - 30 )", EvaluationError::ModuloByZero);
    assert_error("4 * 0 ^ -1", EvaluationError::ZeroToNegativePower);
    assert_error("sqrt ( -5 )", EvaluationError::NegativeSquareRoot);
    assert_error("10.0 + 20 * log2 ( 30 - 40 )", EvaluationError::NonPositiveLogarithm);
    assert_error("log ( 0 )", EvaluationError::NonPositiveLogarithm);
    assert_error("log10 ( -PI )", EvaluationError::NonPositiveLogarithm);
}

#[test]
fn divisor_is_checked_before_dividend() {
    assert_error("sqrt ( -1 ) / 0", EvaluationError::DivideByZero);
    assert_error("log ( 0 ) % 0", EvaluationError::ModuloByZero);
    assert_error("sqrt ( -1 ) + 1 / 0", EvaluationError::NegativeSquareRoot);
    assert_error("sqrt ( -1 ) ^ log ( 0 )", EvaluationError::NegativeSquareRoot);
}

#[test]
fn error_messages() {
    assert_eq!(EvaluationError::DivideByZero.to_string(),
               "Evaluation error encountered in the mathematical expression: division by zero!");
    assert_eq!(EvaluationError::NonPositiveLogarithm.to_string(),
               "Evaluation error encountered in the mathematical expression: zero or negative value passed to logarithm!");
}

#[test]
fn calculation_report() {
    let calculation = calculate("5 ^ 2").unwrap();
    assert_eq!(calculation,
               Calculation { expression: "5.0 ^ 2.0".to_string(),
                             value:      25.0 });
    assert_eq!(calculation.to_string(), "Expression:  5.0 ^ 2.0\nResult:      25.0");

    let calculation = calculate("( 1 + 2 ) / 4").unwrap();
    assert_eq!(calculation.to_string(), "Expression:  ( 1.0 + 2.0 ) / 4.0\nResult:      0.75");
}

#[test]
fn calculation_errors_keep_their_kind() {
    assert_eq!(calculate("5 / 0"), Err(Error::Evaluation(EvaluationError::DivideByZero)));
    assert!(matches!(calculate("2 + sine ( PI )"), Err(Error::Syntax(_))));
    assert_eq!(calculate("10 + * 20").unwrap_err().to_string(),
               "Syntax error encountered in the mathematical expression!");
}
