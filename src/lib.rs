//! calcplot
//!
//! Plots a function of `x` together with its numerical derivative and
//! running integral. The library holds everything except argument parsing
//! and logger setup, which live in the binary.

pub mod error;
pub mod error_report;
pub mod pipeline;
pub mod render;
pub mod session;
pub mod summary;

pub use error::{Curve, ErrorKind, PlotError};
pub use pipeline::{run, Curves, PlotOptions, PlotRequest};
pub use render::{render_png, RenderError, RenderSettings};
pub use session::Session;
pub use summary::Summary;

#[cfg(test)]
mod tests;
