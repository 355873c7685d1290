// Sample domain construction

use crate::error::InputError;
use log::debug;

/// Number of samples in a domain; never less than two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PointCount(usize);

impl PointCount {
    pub const MIN: usize = 2;
    pub const DEFAULT: usize = 500;

    pub fn new(count: usize) -> Result<Self, InputError> {
        if count < Self::MIN {
            return Err(InputError::TooFewPoints {
                count,
                min: Self::MIN,
            });
        }
        Ok(PointCount(count))
    }

    /// Parse the point-count field. Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let trimmed = text.trim();
        let count = trimmed
            .parse::<usize>()
            .map_err(|_| InputError::PointCountSyntax {
                text: trimmed.to_string(),
            })?;
        Self::new(count)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PointCount {
    fn default() -> Self {
        PointCount(Self::DEFAULT)
    }
}

/// Evenly spaced sample points from `start` to `end`, both included.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    points: Vec<f64>,
}

impl Domain {
    pub fn linspace(start: f64, end: f64, count: PointCount) -> Self {
        let n = count.get();
        let intervals = (n - 1) as f64;
        let step = (end - start) / intervals;

        let mut points: Vec<f64> = if step.is_finite() {
            (0..n).map(|i| start + i as f64 * step).collect()
        } else {
            // end - start overflowed, so the bounds have opposite signs and
            // a weighted sum of them stays in range
            (0..n)
                .map(|i| {
                    let t = i as f64 / intervals;
                    start * (1.0 - t) + end * t
                })
                .collect()
        };
        // Pin both ends so they are exact despite rounding in the step
        points[0] = start;
        points[n - 1] = end;

        debug!("built domain of {} points over [{}, {}]", n, start, end);
        Domain { points }
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> f64 {
        self.points[0]
    }

    pub fn end(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    pub fn into_points(self) -> Vec<f64> {
        self.points
    }
}
