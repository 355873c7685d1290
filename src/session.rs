// Interactive session
//
// One owned struct holds the four fields, the options and the last good
// result. Commands are read one per line. A failed plot reports its error
// and leaves the previous result alone.

use crate::error_report::write_error;
use crate::pipeline::{run, Curves, PlotOptions, PlotRequest};
use crate::render::{png_path, render_png, RenderSettings};
use crate::summary::Summary;
use evaluator::Field;
use log::{debug, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const HELP: &str = "\
commands:
  f = <expr>        set the function of x, e.g. f = sin(x) * exp(-x)
  start = <expr>    set the lower bound, e.g. start = -pi
  end = <expr>      set the upper bound
  points = <n>      set the number of samples (at least 2)
  plot              compute and, if an output is set, draw the plot
  show              print the current fields and last result
  save <path>       draw the last result to a .png file
  help              print this message
  quit              leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(Field, String),
    Plot,
    Show,
    Save(PathBuf),
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines and `#` comments give `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let assignment = line
            .split_once('=')
            .filter(|(key, _)| !key.trim().contains(char::is_whitespace));
        if let Some((key, value)) = assignment {
            let field = match key.trim() {
                "f" | "f(x)" | "function" => Field::Function,
                "start" => Field::Start,
                "end" => Field::End,
                "points" | "n" => Field::Points,
                other => return Err(format!("unknown field '{}'", other)),
            };
            return Ok(Some(Command::Set(field, value.trim().to_string())));
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match (word, rest) {
            ("plot", "") => Command::Plot,
            ("show", "") => Command::Show,
            ("help", "") => Command::Help,
            ("quit" | "exit", "") => Command::Quit,
            ("save", "") => return Err("save needs a file name".to_string()),
            ("save", path) => Command::Save(PathBuf::from(path)),
            _ => return Err(format!("unknown command '{}', try 'help'", line)),
        };
        Ok(Some(command))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

pub struct Session {
    request: PlotRequest,
    options: PlotOptions,
    settings: RenderSettings,
    /// Where `plot` draws; `None` computes without drawing.
    output: Option<PathBuf>,
    last: Option<Curves>,
}

impl Session {
    pub fn new(
        request: PlotRequest,
        options: PlotOptions,
        settings: RenderSettings,
        output: Option<PathBuf>,
    ) -> Self {
        Session {
            request,
            options,
            settings,
            output: output.map(|path| png_path(&path)),
            last: None,
        }
    }

    pub fn request(&self) -> &PlotRequest {
        &self.request
    }

    /// The last successful result, if any.
    pub fn last(&self) -> Option<&Curves> {
        self.last.as_ref()
    }

    pub fn execute<W: Write, E: Write>(
        &mut self,
        command: Command,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<Outcome> {
        match command {
            Command::Set(field, text) => {
                debug!("{} = {}", field, text);
                match field {
                    Field::Function => self.request.function = text,
                    Field::Start => self.request.start = text,
                    Field::End => self.request.end = text,
                    Field::Points => self.request.points = text,
                }
            }

            Command::Plot => self.plot(out, err)?,

            Command::Show => {
                writeln!(out, "f(x)    = {}", self.request.function)?;
                writeln!(out, "x start = {}", self.request.start)?;
                writeln!(out, "x end   = {}", self.request.end)?;
                writeln!(out, "points  = {}", self.request.points)?;
                match &self.last {
                    Some(curves) => write!(out, "{}", Summary::of(curves))?,
                    None => writeln!(out, "nothing plotted yet")?,
                }
            }

            Command::Save(path) => match &self.last {
                Some(curves) => {
                    let path = png_path(&path);
                    match render_png(curves, &path, &self.settings) {
                        Ok(()) => writeln!(out, "saved {}", path.display())?,
                        Err(error) => writeln!(err, "error: {}", error)?,
                    }
                }
                None => writeln!(err, "error: nothing to save, run 'plot' first")?,
            },

            Command::Help => writeln!(out, "{}", HELP)?,

            Command::Quit => return Ok(Outcome::Quit),
        }
        Ok(Outcome::Continue)
    }

    fn plot<W: Write, E: Write>(&mut self, out: &mut W, err: &mut E) -> io::Result<()> {
        let curves = match run(&self.request, &self.options) {
            Ok(curves) => curves,
            Err(error) => {
                warn!("plot failed: {}", error);
                return write_error(&self.request, &error, err);
            }
        };

        write!(out, "{}", Summary::of(&curves))?;
        if let Some(path) = &self.output {
            match render_png(&curves, path, &self.settings) {
                Ok(()) => writeln!(out, "saved {}", path.display())?,
                Err(error) => writeln!(err, "error: {}", error)?,
            }
        }
        self.last = Some(curves);
        Ok(())
    }

    /// Read commands until `quit` or end of input.
    pub fn run_lines<R: BufRead, W: Write, E: Write>(
        &mut self,
        input: R,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                Ok(None) => {}
                Ok(Some(command)) => {
                    if self.execute(command, out, err)? == Outcome::Quit {
                        break;
                    }
                }
                Err(message) => writeln!(err, "error: {}", message)?,
            }
            out.flush()?;
        }
        Ok(())
    }
}
