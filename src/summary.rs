// Text output for a computed plot: a short summary and the full table.

use crate::pipeline::Curves;
use std::fmt;
use std::io::{self, Write};

/// Smallest and largest finite value, if there is one.
pub(crate) fn finite_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub points: usize,
    pub x_range: (f64, f64),
    pub y_range: Option<(f64, f64)>,
    pub dydx_range: Option<(f64, f64)>,
    pub integral_range: Option<(f64, f64)>,
    /// Integral over the whole domain, i.e. its last sample.
    pub total: f64,
    /// Samples of f(x) that are NaN or infinite.
    pub non_finite: usize,
}

impl Summary {
    pub fn of(curves: &Curves) -> Self {
        let x = curves.x();
        Summary {
            points: curves.len(),
            x_range: (x[0], x[x.len() - 1]),
            y_range: finite_range(curves.y()),
            dydx_range: finite_range(curves.dydx()),
            integral_range: finite_range(curves.integral()),
            total: curves.integral()[curves.len() - 1],
            non_finite: curves.y().iter().filter(|v| !v.is_finite()).count(),
        }
    }
}

struct Range(Option<(f64, f64)>);

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some((lo, hi)) => write!(f, "[{:.6}, {:.6}]", lo, hi),
            None => write!(f, "no finite values"),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "points:   {}", self.points)?;
        writeln!(f, "x:        {}", Range(Some(self.x_range)))?;
        writeln!(f, "f(x):     {}", Range(self.y_range))?;
        writeln!(f, "f'(x):    {}", Range(self.dydx_range))?;
        writeln!(f, "∫f(x)dx:  {}", Range(self.integral_range))?;
        writeln!(f, "total:    {:.6}", self.total)?;
        if self.non_finite > 0 {
            writeln!(f, "warning:  f(x) is not finite at {} points", self.non_finite)?;
        }
        Ok(())
    }
}

/// Every sample as aligned columns.
pub fn write_table<W: Write>(curves: &Curves, out: &mut W) -> io::Result<()> {
    writeln!(out, "{:>16} {:>16} {:>16} {:>16}", "x", "f(x)", "f'(x)", "∫f(x)dx")?;
    for i in 0..curves.len() {
        let (x, y, d, s) = curves.row(i);
        writeln!(out, "{:>16.8e} {:>16.8e} {:>16.8e} {:>16.8e}", x, y, d, s)?;
    }
    Ok(())
}
