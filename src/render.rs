// PNG rendering with plotters
//
// Three stacked panels sharing the x range: f(x), f'(x) and the running
// integral. NaN and infinite samples break a curve into separate segments.

use crate::pipeline::Curves;
use crate::summary::finite_range;
use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            width: 600,
            height: 800,
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot draw '{}': {message}", .path.display())]
    Drawing { path: PathBuf, message: String },

    #[error("image size {width}x{height} is too small")]
    TooSmall { width: u32, height: u32 },
}

/// Output path with a `.png` extension, appending one if needed.
pub fn png_path(path: &Path) -> PathBuf {
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if is_png {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".png");
        PathBuf::from(name)
    }
}

/// Axis range covering the finite values, padded by 5%.
pub(crate) fn axis_range(values: &[f64]) -> Range<f64> {
    match finite_range(values) {
        None => -1.0..1.0,
        Some((lo, hi)) if lo == hi => lo - 1.0..hi + 1.0,
        Some((lo, hi)) => {
            let pad = (hi - lo) * 0.05;
            lo - pad..hi + pad
        }
    }
}

/// Runs of consecutive points where both coordinates are finite.
pub(crate) fn finite_segments(x: &[f64], y: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for (&px, &py) in x.iter().zip(y) {
        if px.is_finite() && py.is_finite() {
            current.push((px, py));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Draw all three curves into a PNG file at `path`.
pub fn render_png(curves: &Curves, path: &Path, settings: &RenderSettings) -> Result<(), RenderError> {
    if settings.width < 100 || settings.height < 150 {
        return Err(RenderError::TooSmall {
            width: settings.width,
            height: settings.height,
        });
    }

    let drawing_error = |e: &dyn std::fmt::Display| RenderError::Drawing {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let root = BitMapBackend::new(path, (settings.width, settings.height)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| drawing_error(&e))?;

    let x_range = axis_range(curves.x());
    let panels = root.split_evenly((3, 1));
    let series = [
        (curves.y(), "f(x)", BLUE),
        (curves.dydx(), "f'(x)", RED),
        (curves.integral(), "∫f(x)dx", GREEN),
    ];

    for (area, (values, label, color)) in panels.iter().zip(series) {
        draw_panel(area, curves.x(), values, label, color, x_range.clone())
            .map_err(|e| drawing_error(&e))?;
    }

    root.present().map_err(|e| drawing_error(&e))?;
    info!("saved plot to {}", path.display());
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    x: &[f64],
    y: &[f64],
    label: &str,
    color: RGBColor,
    x_range: Range<f64>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let mut chart = ChartBuilder::on(area)
        .caption(label, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, axis_range(y))?;

    chart.configure_mesh().x_desc("x").y_desc(label).draw()?;

    let style = color.stroke_width(2);
    for (i, segment) in finite_segments(x, y).into_iter().enumerate() {
        let drawn = chart.draw_series(LineSeries::new(segment, style))?;
        // one legend entry per curve
        if i == 0 {
            drawn
                .label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        }
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    Ok(())
}
