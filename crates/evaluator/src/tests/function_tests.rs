// Function Sampling Tests

use crate::domain::{Domain, PointCount};
use crate::error::FunctionError;
use crate::eval::EvalOptions;
use crate::function::FunctionExpr;
use approx::assert_relative_eq;

fn domain(start: f64, end: f64, n: usize) -> Domain {
    Domain::linspace(start, end, PointCount::new(n).unwrap())
}

fn sample(text: &str, domain: &Domain) -> Result<Vec<f64>, FunctionError> {
    FunctionExpr::parse(text)?.sample(domain, &EvalOptions::default())
}

#[test]
fn test_one_value_per_point() {
    let d = domain(0.0, 2.0 * std::f64::consts::PI, 500);
    let ys = sample("sin(x)", &d).unwrap();
    assert_eq!(ys.len(), 500);
    assert_relative_eq!(ys[0], 0.0);
    assert_relative_eq!(ys[499], 0.0, epsilon = 1e-12);
}

#[test]
fn test_polynomial() {
    let d = domain(-1.0, 1.0, 5);
    let ys = sample("3*x**2 - 2*x + 1", &d).unwrap();
    assert_eq!(ys, vec![6.0, 2.75, 1.0, 0.75, 2.0]);
}

#[test]
fn test_numpy_style_expression() {
    let d = domain(0.0, 1.0, 3);
    let ys = sample("np.exp(-x) * np.cos(2*np.pi*x)", &d).unwrap();
    assert_relative_eq!(ys[0], 1.0);
    assert_relative_eq!(ys[1], -(-0.5f64).exp(), epsilon = 1e-12);
}

#[test]
fn test_constant_expression_is_rejected_with_hint() {
    let d = domain(0.0, 1.0, 3);
    let error = sample("5", &d).unwrap_err();
    assert_eq!(error, FunctionError::ScalarResult { value: 5.0 });
    assert!(error.to_string().contains("5 + 0*x"));
}

#[test]
fn test_constant_written_with_x() {
    let d = domain(0.0, 1.0, 3);
    assert_eq!(sample("5 + 0*x", &d).unwrap(), vec![5.0, 5.0, 5.0]);
}

#[test]
fn test_syntax_error() {
    assert!(matches!(
        FunctionExpr::parse("sin(x"),
        Err(FunctionError::Syntax { .. })
    ));
    assert!(matches!(
        FunctionExpr::parse(""),
        Err(FunctionError::Syntax { .. })
    ));
}

#[test]
fn test_unknown_name() {
    let error = FunctionExpr::parse("sin(y)").unwrap_err();
    assert!(matches!(error, FunctionError::Names { .. }));
    assert!(error.to_string().contains("'y'"));
}

#[test]
fn test_injection_attempts_are_rejected() {
    for text in ["__import__(os)", "os.system(1)", "open(x)", "x.real"] {
        assert!(FunctionExpr::parse(text).is_err(), "{} was accepted", text);
    }
}

#[test]
fn test_nan_samples_are_kept_by_default() {
    let d = domain(-1.0, 1.0, 3);
    let ys = sample("sqrt(x)", &d).unwrap();
    assert!(ys[0].is_nan());
    assert_eq!(ys[1], 0.0);
    assert_eq!(ys[2], 1.0);
}

#[test]
fn test_strict_domain_error_reports_x() {
    let d = domain(-1.0, 1.0, 3);
    let error = FunctionExpr::parse("log(x)")
        .unwrap()
        .sample(&d, &EvalOptions { strict: true })
        .unwrap_err();
    match error {
        FunctionError::Domain { operation, x, .. } => {
            assert_eq!(operation, "log");
            assert_eq!(x, Some(-1.0));
        }
        other => panic!("expected domain error, got {:?}", other),
    }
}

#[test]
fn test_source_is_kept() {
    let f = FunctionExpr::parse("x**2").unwrap();
    assert_eq!(f.source(), "x**2");
    assert_eq!(f.expr().to_string(), "(x ** 2)");
}

#[test]
fn test_strict_domain_error_without_x() {
    let d = domain(0.0, 1.0, 3);
    let error = FunctionExpr::parse("log(-1) + x")
        .unwrap()
        .sample(&d, &EvalOptions { strict: true })
        .unwrap_err();
    assert!(matches!(error, FunctionError::Domain { x: None, .. }));
    assert_eq!(error.to_string(), "f(x): 'log' is undefined");
}

#[test]
fn test_strict_ignores_discarded_where_branch() {
    let d = domain(-1.0, 1.0, 3);
    let strict = EvalOptions { strict: true };
    let ys = FunctionExpr::parse("where(x > 0, log(x), 0)")
        .unwrap()
        .sample(&d, &strict)
        .unwrap();
    assert_eq!(ys[0], 0.0);
    assert_eq!(ys[1], 0.0);
    assert_eq!(ys[2], 0.0);

    // the picked samples are still checked
    let error = FunctionExpr::parse("where(x >= 0, log(x), 0)")
        .unwrap()
        .sample(&d, &strict)
        .unwrap_err();
    assert!(matches!(error, FunctionError::Domain { x: Some(x), .. } if x == 0.0));
}
