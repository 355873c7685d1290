// Command-line arguments

use calcplot::{PlotOptions, PlotRequest, RenderSettings};
use calculus::EdgeOrder;
use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "calcplot",
    version,
    about = "Plot a function of x with its numerical derivative and integral"
)]
pub struct Cli {
    /// Function of x, e.g. "sin(x)", "np.exp(-x**2)", "where(x < 0, 0, x)"
    #[arg(short, long, default_value = "sin(x)", allow_hyphen_values = true)]
    pub function: String,

    /// Lower bound; may be an expression such as "-pi"
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub start: String,

    /// Upper bound
    #[arg(long, default_value = "2*pi", allow_hyphen_values = true)]
    pub end: String,

    /// Number of samples, at least 2
    #[arg(short = 'n', long, default_value = "500", allow_hyphen_values = true)]
    pub points: String,

    /// Output image; ".png" is appended when missing
    #[arg(short, long, default_value = "plot.png")]
    pub output: PathBuf,

    /// Compute and print the summary without drawing
    #[arg(long)]
    pub no_plot: bool,

    /// Print every sample as a table
    #[arg(long)]
    pub table: bool,

    #[arg(long, default_value_t = 600)]
    pub width: u32,

    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Accuracy of the derivative at the two end points
    #[arg(long, value_enum, default_value_t = EdgeOrderArg::First)]
    pub edge_order: EdgeOrderArg,

    /// Fail when f(x) is undefined at some sample instead of plotting NaN
    #[arg(long)]
    pub strict: bool,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Read commands from stdin, see "help" inside the session
    #[arg(short, long)]
    pub interactive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EdgeOrderArg {
    #[value(name = "1")]
    First,
    #[value(name = "2")]
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    pub fn request(&self) -> PlotRequest {
        PlotRequest::new(&self.function, &self.start, &self.end, &self.points)
    }

    pub fn options(&self) -> PlotOptions {
        PlotOptions {
            edge_order: match self.edge_order {
                EdgeOrderArg::First => EdgeOrder::First,
                EdgeOrderArg::Second => EdgeOrder::Second,
            },
            strict: self.strict,
        }
    }

    pub fn settings(&self) -> RenderSettings {
        RenderSettings {
            width: self.width,
            height: self.height,
        }
    }
}
