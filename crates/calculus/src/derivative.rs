// Finite-difference derivative
//
// Interior points use the three-point central difference for uneven
// spacing, which is exact for quadratics. The two boundary points use a
// one-sided difference of the chosen order.

use crate::ComputationError;
use log::debug;

/// Accuracy of the one-sided differences at the two boundary points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EdgeOrder {
    /// Two-point forward/backward difference.
    #[default]
    First,
    /// Three-point one-sided difference. Needs at least three samples.
    Second,
}

impl EdgeOrder {
    pub fn min_points(self) -> usize {
        match self {
            EdgeOrder::First => 2,
            EdgeOrder::Second => 3,
        }
    }
}

/// dy/dx at every sample, with first-order edges.
pub fn derivative(x: &[f64], y: &[f64]) -> Result<Vec<f64>, ComputationError> {
    derivative_with(x, y, EdgeOrder::First)
}

pub fn derivative_with(x: &[f64], y: &[f64], edge_order: EdgeOrder) -> Result<Vec<f64>, ComputationError> {
    crate::check_lengths(x, y, edge_order.min_points())?;

    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    if let Some(index) = h.iter().position(|&step| step == 0.0) {
        return Err(ComputationError::DegenerateInterval { index, at: x[index] });
    }

    let n = x.len();
    let mut d = vec![0.0; n];

    for i in 1..n - 1 {
        let hs = h[i - 1];
        let hd = h[i];
        d[i] = (hs * hs * y[i + 1] + (hd * hd - hs * hs) * y[i] - hd * hd * y[i - 1])
            / (hs * hd * (hs + hd));
    }

    match edge_order {
        EdgeOrder::First => {
            d[0] = (y[1] - y[0]) / h[0];
            d[n - 1] = (y[n - 1] - y[n - 2]) / h[n - 2];
        }
        EdgeOrder::Second => {
            let (h1, h2) = (h[0], h[1]);
            d[0] = -(2.0 * h1 + h2) / (h1 * (h1 + h2)) * y[0]
                + (h1 + h2) / (h1 * h2) * y[1]
                - h1 / (h2 * (h1 + h2)) * y[2];

            let (h1, h2) = (h[n - 3], h[n - 2]);
            d[n - 1] = h2 / (h1 * (h1 + h2)) * y[n - 3]
                - (h1 + h2) / (h1 * h2) * y[n - 2]
                + (2.0 * h2 + h1) / (h2 * (h1 + h2)) * y[n - 1];
        }
    }

    debug!("differentiated {} samples ({:?} edges)", n, edge_order);
    Ok(d)
}
