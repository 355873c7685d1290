//! Domain & Expression Evaluator
//!
//! Turns the bound, point-count and function fields into a sample domain and
//! one function value per sample. Expressions are restricted to arithmetic,
//! the builtin allow-list and the single variable `x`.

pub mod bounds;
pub mod builtins;
pub mod domain;
pub mod error;
pub mod eval;
pub mod function;
pub mod value;

pub use bounds::resolve_bound;
pub use domain::{Domain, PointCount};
pub use error::{EvalError, Field, FunctionError, InputError};
pub use eval::{EvalOptions, Evaluator, Scope};
pub use function::FunctionExpr;
pub use value::{Shape, Value};

/// Name of the bound variable in function expressions.
pub const VARIABLE: &str = "x";

#[cfg(test)]
mod tests;
