// Error reporting with Ariadne
//
// Lexical and grammatical errors are normalized into `SyntaxError` so callers
// never handle chumsky or logos types directly.

use crate::ast::Span;
use ariadne::{Color, Label, Report, ReportKind};
use chumsky::error::{Simple, SimpleReason};
use lexer::token::Token;
use lexer::LexError;
use thiserror::Error;

/// Type alias for Chumsky parser errors
pub type ParseError = Simple<Token>;

/// A syntax error located in the source text.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub span: Span,
    pub message: String,
    /// Human-readable descriptions of what would have been accepted, sorted.
    pub expected: Vec<String>,
}

impl From<LexError> for SyntaxError {
    fn from(error: LexError) -> Self {
        SyntaxError {
            message: error.to_string(),
            span: error.span,
            expected: Vec::new(),
        }
    }
}

impl From<ParseError> for SyntaxError {
    fn from(error: ParseError) -> Self {
        let message = match error.reason() {
            SimpleReason::Custom(msg) => msg.clone(),
            SimpleReason::Unclosed { delimiter, .. } => {
                format!("unclosed delimiter {}", delimiter.describe())
            }
            SimpleReason::Unexpected => match error.found() {
                Some(token) => format!("unexpected {}", token.describe()),
                None => "unexpected end of input".to_string(),
            },
        };

        let mut expected: Vec<String> = error.expected().map(format_expected).collect();
        expected.sort();
        expected.dedup();

        SyntaxError {
            span: error.span(),
            message,
            expected,
        }
    }
}

/// Format expected token for human-readable output
fn format_expected(token: &Option<Token>) -> String {
    match token {
        Some(Token::Identifier(_)) => "identifier".to_string(),
        Some(Token::Number(_)) => "number".to_string(),
        Some(t) => t.describe(),
        None => "end of input".to_string(),
    }
}

/// Clamp a span to the source so it covers at least one character.
///
/// End-of-input errors point one past the end; they are moved onto the last
/// character.
pub fn clamp(span: &Span, len: usize) -> Span {
    let start = span.start.min(len);
    let end = span.end.min(len).max(start);
    match (start == end, len) {
        (false, _) | (true, 0) => start..end,
        (true, _) if start == len => len - 1..len,
        (true, _) => start..start + 1,
    }
}

/// Convert a byte span from the lexer into the character span Ariadne
/// expects, clamped to the source.
pub fn char_span(source: &str, span: &Span) -> Span {
    let to_char = |byte: usize| source.char_indices().take_while(|&(i, _)| i < byte).count();
    clamp(&(to_char(span.start)..to_char(span.end)), source.chars().count())
}

/// Build the Ariadne report for one syntax error.
pub fn syntax_report<'a>(
    filename: &'a str,
    source: &str,
    error: &SyntaxError,
) -> Report<'a, (&'a str, Span)> {
    let span = char_span(source, &error.span);

    let report = Report::build(ReportKind::Error, filename, span.start)
        .with_code("E001")
        .with_message("Syntax error")
        .with_label(
            Label::new((filename, span))
                .with_message(&error.message)
                .with_color(Color::Red),
        );

    // Limit to 5 expected tokens to avoid overwhelming output
    let report = if !error.expected.is_empty() {
        let shown: Vec<&str> = error.expected.iter().take(5).map(String::as_str).collect();
        if error.expected.len() > 5 {
            report.with_help(format!("Expected one of: {}, ...", shown.join(", ")))
        } else {
            report.with_help(format!("Expected: {}", shown.join(", ")))
        }
    } else {
        report
    };

    report.finish()
}
