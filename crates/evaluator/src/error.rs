// Error types for bounds, point count and function evaluation
//
// `InputError` covers the three domain fields, `FunctionError` the f(x)
// field. `EvalError` is what the tree walker itself can raise.

use crate::value::Shape;
use parser::ast::Span;
use parser::{ResolveError, SyntaxError};
use std::fmt;
use thiserror::Error;

/// The text field an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Function,
    Start,
    End,
    Points,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Function => "f(x)",
            Field::Start => "x start",
            Field::End => "x end",
            Field::Points => "points",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error(transparent)]
    Unresolved(#[from] ResolveError),

    #[error("operands have different lengths ({left} and {right})")]
    LengthMismatch { left: usize, right: usize, span: Span },

    #[error("'{operation}' is undefined for its input{}", at_sample(.index))]
    Domain {
        operation: String,
        span: Span,
        index: Option<usize>,
    },
}

fn at_sample(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at sample {}", i),
        None => String::new(),
    }
}

impl EvalError {
    pub fn span(&self) -> &Span {
        match self {
            EvalError::Unresolved(error) => error.span(),
            EvalError::LengthMismatch { span, .. } | EvalError::Domain { span, .. } => span,
        }
    }
}

fn at_x(x: &Option<f64>) -> String {
    match x {
        Some(x) => format!(" at x = {}", x),
        None => String::new(),
    }
}

/// Join several messages into one line.
pub(crate) fn summarize<E: ToString>(errors: &[E]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Malformed bound or point-count text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field}: {}", summarize(.errors))]
    Syntax {
        field: Field,
        errors: Vec<SyntaxError>,
    },

    #[error("{field}: {}", summarize(.errors))]
    Names {
        field: Field,
        errors: Vec<ResolveError>,
    },

    #[error("{field}: {source}")]
    Eval { field: Field, source: EvalError },

    #[error("{field}: expected a single number, got {shape}")]
    NotScalar { field: Field, shape: Shape },

    #[error("{field}: {value} is not a finite number")]
    NonFinite { field: Field, value: f64 },

    #[error("points: '{text}' is not a positive whole number")]
    PointCountSyntax { text: String },

    #[error("points: at least {min} points are needed, got {count}")]
    TooFewPoints { count: usize, min: usize },
}

impl InputError {
    pub fn field(&self) -> Field {
        match self {
            InputError::Syntax { field, .. }
            | InputError::Names { field, .. }
            | InputError::Eval { field, .. }
            | InputError::NotScalar { field, .. }
            | InputError::NonFinite { field, .. } => *field,
            InputError::PointCountSyntax { .. } | InputError::TooFewPoints { .. } => Field::Points,
        }
    }
}

/// The function expression could not be turned into one value per sample.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FunctionError {
    #[error("f(x): {}", summarize(.errors))]
    Syntax { errors: Vec<SyntaxError> },

    #[error("f(x): {}", summarize(.errors))]
    Names { errors: Vec<ResolveError> },

    #[error("f(x): {source}")]
    Eval { source: EvalError },

    #[error("f(x): '{operation}' is undefined{}", at_x(.x))]
    Domain {
        operation: String,
        span: Span,
        /// None when the failing operation does not depend on x.
        x: Option<f64>,
    },

    #[error(
        "f(x): the expression is the constant {value}, not a function of x; write it as e.g. `{value} + 0*x`"
    )]
    ScalarResult { value: f64 },

    #[error("f(x): produced {found} values for {expected} points")]
    LengthMismatch { expected: usize, found: usize },
}
