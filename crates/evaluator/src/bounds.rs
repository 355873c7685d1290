// Domain bound resolution
//
// Bounds are full expressions (`2*pi`, `np.pi/4`) evaluated with constants
// and functions but no variable.

use crate::builtins::MathNames;
use crate::error::{Field, InputError};
use crate::eval::{EvalOptions, Evaluator, Scope};
use crate::value::Value;
use log::debug;

/// Evaluate a bound field to a finite number.
pub fn resolve_bound(field: Field, text: &str) -> Result<f64, InputError> {
    let expr = parser::parse_expression(text)
        .map_err(|errors| InputError::Syntax { field, errors })?;

    parser::resolve(&expr, &MathNames::CONSTANTS_ONLY)
        .map_err(|errors| InputError::Names { field, errors })?;

    let scope = Scope::constants_only();
    let value = Evaluator::new(&scope, EvalOptions::default())
        .eval(&expr)
        .map_err(|source| InputError::Eval { field, source })?;

    match value {
        Value::Scalar(v) if v.is_finite() => {
            debug!("{} = {} resolved to {}", field, text.trim(), v);
            Ok(v)
        }
        Value::Scalar(v) => Err(InputError::NonFinite { field, value: v }),
        other => Err(InputError::NotScalar {
            field,
            shape: other.shape(),
        }),
    }
}
