// The user's function, parsed once and sampled over a domain.

use crate::builtins::MathNames;
use crate::domain::Domain;
use crate::error::{EvalError, FunctionError};
use crate::eval::{EvalOptions, Evaluator, Scope};
use crate::value::Value;
use crate::VARIABLE;
use log::{debug, warn};
use parser::ast::Expr;

#[derive(Debug, Clone)]
pub struct FunctionExpr {
    source: String,
    expr: Expr,
}

impl FunctionExpr {
    /// Parse and check names. Nothing is evaluated yet.
    pub fn parse(text: &str) -> Result<Self, FunctionError> {
        let expr = parser::parse_expression(text).map_err(|errors| FunctionError::Syntax { errors })?;

        parser::resolve(&expr, &MathNames::FUNCTION_OF_X)
            .map_err(|errors| FunctionError::Names { errors })?;

        debug!("parsed f(x) = {} ({} nodes)", expr, expr.size());
        Ok(FunctionExpr {
            source: text.to_string(),
            expr,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Evaluate with `x` bound to every domain point at once.
    ///
    /// The result has exactly one value per domain point.
    pub fn sample(&self, domain: &Domain, options: &EvalOptions) -> Result<Vec<f64>, FunctionError> {
        let scope = Scope::constants_only().with_variable(VARIABLE, Value::Vector(domain.points().to_vec()));

        let value = Evaluator::new(&scope, *options)
            .eval(&self.expr)
            .map_err(|error| match error {
                EvalError::Domain {
                    operation,
                    span,
                    index,
                } => FunctionError::Domain {
                    operation,
                    span,
                    x: index.map(|i| domain.points()[i]),
                },
                source => FunctionError::Eval { source },
            })?;

        let samples = match value {
            Value::Scalar(value) => return Err(FunctionError::ScalarResult { value }),
            Value::Vector(samples) => samples,
        };

        if samples.len() != domain.len() {
            return Err(FunctionError::LengthMismatch {
                expected: domain.len(),
                found: samples.len(),
            });
        }

        let non_finite = samples.iter().filter(|v| !v.is_finite()).count();
        if non_finite > 0 {
            warn!(
                "f(x) = {} is not finite at {} of {} points",
                self.source.trim(),
                non_finite,
                samples.len()
            );
        }
        Ok(samples)
    }
}
