// Cumulative trapezoidal integral

use crate::ComputationError;
use log::debug;

/// Running integral of `y` over `x`, starting at 0 at the first sample.
///
/// Non-finite values in `y` carry into every later sample, including across
/// zero-length intervals (`0 * inf` is NaN).
pub fn integral(x: &[f64], y: &[f64]) -> Result<Vec<f64>, ComputationError> {
    crate::check_lengths(x, y, 2)?;

    let mut total = 0.0;
    let mut out = Vec::with_capacity(x.len());
    out.push(total);

    for i in 1..x.len() {
        total += (x[i] - x[i - 1]) * (y[i] + y[i - 1]) / 2.0;
        out.push(total);
    }

    debug!("integrated {} samples, total {}", x.len(), total);
    Ok(out)
}
