// Bound Resolution Tests

use crate::bounds::resolve_bound;
use crate::error::{Field, InputError};
use approx::assert_relative_eq;
use std::f64::consts::PI;

#[test]
fn test_plain_numbers() {
    assert_eq!(resolve_bound(Field::Start, "0"), Ok(0.0));
    assert_eq!(resolve_bound(Field::Start, "-2.5"), Ok(-2.5));
    assert_eq!(resolve_bound(Field::End, "  1e3 "), Ok(1000.0));
}

#[test]
fn test_constant_expressions() {
    assert_relative_eq!(resolve_bound(Field::End, "2*pi").unwrap(), 2.0 * PI);
    assert_relative_eq!(resolve_bound(Field::End, "np.pi / 4").unwrap(), PI / 4.0);
    assert_relative_eq!(resolve_bound(Field::End, "sqrt(2)**2").unwrap(), 2.0, epsilon = 1e-12);
}

#[test]
fn test_variable_is_not_allowed() {
    let error = resolve_bound(Field::Start, "x + 1").unwrap_err();
    assert!(matches!(error, InputError::Names { field: Field::Start, .. }));
}

#[test]
fn test_syntax_error() {
    let error = resolve_bound(Field::End, "2 *").unwrap_err();
    assert!(matches!(error, InputError::Syntax { field: Field::End, .. }));
    assert!(error.to_string().starts_with("x end:"));
}

#[test]
fn test_non_finite_bounds() {
    let error = resolve_bound(Field::End, "1/0").unwrap_err();
    assert!(matches!(error, InputError::NonFinite { field: Field::End, .. }));

    let error = resolve_bound(Field::Start, "log(-1)").unwrap_err();
    assert!(matches!(error, InputError::NonFinite { .. }));

    assert!(resolve_bound(Field::Start, "inf").is_err());
}

#[test]
fn test_unknown_function() {
    let error = resolve_bound(Field::Start, "__import__(1)").unwrap_err();
    assert!(matches!(error, InputError::Names { .. }));
}

#[test]
fn test_empty_field() {
    assert!(matches!(
        resolve_bound(Field::Start, ""),
        Err(InputError::Syntax { .. })
    ));
}
