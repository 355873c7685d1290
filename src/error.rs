// Top-level error type
//
// Every failure of a plot request falls into one of three kinds, one per
// stage of the pipeline. Rendering and I/O failures are separate
// (`RenderError`) since they happen after a successful computation.

use calculus::ComputationError;
use evaluator::{Field, FunctionError, InputError};
use std::fmt;
use thiserror::Error;

/// The derived curve whose computation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    Derivative,
    Integral,
}

impl Curve {
    pub fn label(self) -> &'static str {
        match self {
            Curve::Derivative => "f'(x)",
            Curve::Integral => "∫f(x)dx",
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Function,
    Computation,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    #[error("input error: {0}")]
    Input(#[from] InputError),

    #[error("function error: {0}")]
    Function(#[from] FunctionError),

    #[error("computation error in {curve}: {source}")]
    Computation {
        curve: Curve,
        source: ComputationError,
    },
}

impl PlotError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlotError::Input(_) => ErrorKind::Input,
            PlotError::Function(_) => ErrorKind::Function,
            PlotError::Computation { .. } => ErrorKind::Computation,
        }
    }

    /// The text field to point at when reporting. Computation errors are
    /// reported against the function, since they come from its samples.
    pub fn field(&self) -> Field {
        match self {
            PlotError::Input(error) => error.field(),
            PlotError::Function(_) | PlotError::Computation { .. } => Field::Function,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Input => 2,
            ErrorKind::Function => 3,
            ErrorKind::Computation => 4,
        }
    }
}
