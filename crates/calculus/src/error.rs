// Error types for numerical differentiation and integration

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputationError {
    #[error("x has {x} samples but y has {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("at least {min} samples are needed, got {found}")]
    TooFewPoints { found: usize, min: usize },

    #[error("x[{index}] and x[{}] are both {at}; the derivative is undefined on a zero-length interval", .index + 1)]
    DegenerateInterval { index: usize, at: f64 },
}
