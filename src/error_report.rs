// Error reporting with Ariadne
//
// Each error is rendered against the text of the field it came from, using
// the field label ("f(x)", "x start", ...) as the source name.

use crate::error::PlotError;
use crate::pipeline::PlotRequest;
use ariadne::{Color, Label, Report, ReportBuilder, ReportKind, Source};
use calculus::ComputationError;
use evaluator::{EvalError, FunctionError, InputError};
use parser::ast::Span;
use parser::error::char_span;
use parser::{syntax_report, ResolveError};
use std::io::{self, Write};

type FieldReport<'a> = Report<'a, (&'a str, Span)>;

/// Print the reports for `error` to stderr.
pub fn report_error(request: &PlotRequest, error: &PlotError) -> io::Result<()> {
    write_error(request, error, &mut io::stderr())
}

pub fn write_error<W: Write>(request: &PlotRequest, error: &PlotError, out: &mut W) -> io::Result<()> {
    let field = error.field();
    let id = field.label();
    let source = request.field(field);

    // Nothing to underline
    if source.trim().is_empty() {
        return writeln!(out, "error: {} is empty ({})", id, error);
    }

    for report in build_reports(id, source, error) {
        report.write((id, Source::from(source)), &mut *out)?;
    }
    Ok(())
}

/// One report per underlying problem; syntax and name errors may yield
/// several.
pub fn build_reports<'a>(id: &'a str, source: &str, error: &PlotError) -> Vec<FieldReport<'a>> {
    let whole = 0..source.len();

    match error {
        PlotError::Input(error) => match error {
            InputError::Syntax { errors, .. } => {
                errors.iter().map(|e| syntax_report(id, source, e)).collect()
            }
            InputError::Names { errors, .. } => names_reports(id, source, "E101", errors),
            InputError::Eval { source: e, .. } => vec![eval_report(id, source, "E102", e)],
            InputError::NotScalar { shape, .. } => vec![
                labelled(id, source, "E103", "Bound is not a single number", whole, format!("this is {}", shape))
                    .with_help("Bounds are evaluated without x")
                    .finish(),
            ],
            InputError::NonFinite { value, .. } => vec![
                labelled(id, source, "E104", "Bound is not finite", whole, format!("this evaluates to {}", value))
                    .finish(),
            ],
            InputError::PointCountSyntax { .. } => vec![
                labelled(id, source, "E105", "Invalid point count", whole, "expected a whole number")
                    .with_help("Use an integer such as 500")
                    .finish(),
            ],
            InputError::TooFewPoints { count, min } => vec![
                labelled(id, source, "E106", "Too few points", whole, format!("{} point(s) requested", count))
                    .with_help(format!("At least {} points are needed", min))
                    .finish(),
            ],
        },

        PlotError::Function(error) => match error {
            FunctionError::Syntax { errors } => {
                errors.iter().map(|e| syntax_report(id, source, e)).collect()
            }
            FunctionError::Names { errors } => names_reports(id, source, "E201", errors),
            FunctionError::Eval { source: e } => vec![eval_report(id, source, "E202", e)],
            FunctionError::Domain { operation, span, x } => vec![
                labelled(
                    id,
                    source,
                    "E203",
                    match x {
                        Some(x) => format!("'{}' is undefined at x = {}", operation, x),
                        None => format!("'{}' is undefined", operation),
                    },
                    span.clone(),
                    "evaluated here",
                )
                .with_help("Narrow the domain, or plot without --strict to keep NaN samples")
                .finish(),
            ],
            FunctionError::ScalarResult { value } => vec![
                labelled(id, source, "E204", "Expression does not depend on x", whole, format!("always {}", value))
                    .with_help(format!("Write it as `{} + 0*x` to plot a constant", value))
                    .finish(),
            ],
            FunctionError::LengthMismatch { expected, found } => vec![
                labelled(
                    id,
                    source,
                    "E205",
                    "Wrong number of samples",
                    whole,
                    format!("produced {} values for {} points", found, expected),
                )
                .finish(),
            ],
        },

        PlotError::Computation { curve, source: e } => {
            let code = match e {
                ComputationError::LengthMismatch { .. } => "E301",
                ComputationError::TooFewPoints { .. } => "E302",
                ComputationError::DegenerateInterval { .. } => "E303",
            };
            let report = labelled(id, source, code, format!("Cannot compute {}", curve), whole, e.to_string());
            let report = match e {
                ComputationError::DegenerateInterval { .. } => {
                    report.with_help("Choose different start and end values")
                }
                _ => report,
            };
            vec![report.finish()]
        }
    }
}

fn labelled<'a>(
    id: &'a str,
    source: &str,
    code: &str,
    message: impl ToString,
    span: Span,
    label: impl ToString,
) -> ReportBuilder<'a, (&'a str, Span)> {
    let span = char_span(source, &span);
    Report::build(ReportKind::Error, id, span.start)
        .with_code(code)
        .with_message(message)
        .with_label(
            Label::new((id, span))
                .with_message(label)
                .with_color(Color::Red),
        )
}

fn names_reports<'a>(id: &'a str, source: &str, code: &str, errors: &[ResolveError]) -> Vec<FieldReport<'a>> {
    errors
        .iter()
        .map(|error| {
            let report = labelled(id, source, code, "Name error", error.span().clone(), error);
            match error {
                ResolveError::UndefinedName { .. } | ResolveError::UnknownFunction { .. } => report
                    .with_help("Only x, the math constants and the builtin functions are available")
                    .finish(),
                ResolveError::UnknownNamespace { .. } => report
                    .with_help("Qualify names with np, numpy or math, or leave them bare")
                    .finish(),
                _ => report.finish(),
            }
        })
        .collect()
}

fn eval_report<'a>(id: &'a str, source: &str, code: &str, error: &EvalError) -> FieldReport<'a> {
    labelled(id, source, code, "Evaluation failed", error.span().clone(), error).finish()
}
