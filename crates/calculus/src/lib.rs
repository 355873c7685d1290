//! Derivative/Integral Engine
//!
//! Numerical derivative and running integral of sampled data. Both take the
//! sample points `x` and values `y` and return one value per sample.

mod derivative;
mod error;
mod integral;

pub use derivative::{derivative, derivative_with, EdgeOrder};
pub use error::ComputationError;
pub use integral::integral;

/// Both inputs have the same length, at least `min`.
fn check_lengths(x: &[f64], y: &[f64], min: usize) -> Result<(), ComputationError> {
    if x.len() != y.len() {
        return Err(ComputationError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    if x.len() < min {
        return Err(ComputationError::TooFewPoints {
            found: x.len(),
            min,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests;
