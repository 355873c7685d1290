// Error Report Tests

use crate::error::PlotError;
use crate::error_report::{build_reports, write_error};
use crate::pipeline::{run, PlotOptions, PlotRequest};

fn failing(function: &str, start: &str, end: &str, points: &str) -> (PlotRequest, PlotError) {
    let request = PlotRequest::new(function, start, end, points);
    let error = run(&request, &PlotOptions::default()).unwrap_err();
    (request, error)
}

fn rendered(request: &PlotRequest, error: &PlotError) -> String {
    let mut out = Vec::new();
    write_error(request, error, &mut out).unwrap();
    String::from_utf8_lossy(&out).into_owned()
}

#[test]
fn test_syntax_error_in_function() {
    let (request, error) = failing("sin(x", "0", "1", "10");
    let text = rendered(&request, &error);
    assert!(text.contains("E001"));
    assert!(text.contains("f(x)"));
}

#[test]
fn test_unknown_name_in_function() {
    let (request, error) = failing("sin(y) + z", "0", "1", "10");
    let reports = build_reports("f(x)", &request.function, &error);
    assert_eq!(reports.len(), 2);

    let text = rendered(&request, &error);
    assert!(text.contains("E201"));
    assert!(text.contains("undefined name 'y'"));
}

#[test]
fn test_bound_report_uses_field_label() {
    let (request, error) = failing("x", "0", "q", "10");
    let text = rendered(&request, &error);
    assert!(text.contains("E101"));
    assert!(text.contains("x end"));
}

#[test]
fn test_point_count_report() {
    let (request, error) = failing("x", "0", "1", "1");
    let text = rendered(&request, &error);
    assert!(text.contains("E106"));
    assert!(text.contains("Too few points"));
}

#[test]
fn test_scalar_result_report_has_hint() {
    let (request, error) = failing("3", "0", "1", "10");
    let text = rendered(&request, &error);
    assert!(text.contains("E204"));
    assert!(text.contains("3 + 0*x"));
}

#[test]
fn test_computation_report() {
    let (request, error) = failing("x", "2", "2", "10");
    let text = rendered(&request, &error);
    assert!(text.contains("E303"));
}

#[test]
fn test_empty_field_does_not_panic() {
    let (request, error) = failing("", "0", "1", "10");
    assert!(!rendered(&request, &error).is_empty());

    let (request, error) = failing("x", "", "1", "10");
    assert!(!rendered(&request, &error).is_empty());
}

/// Drop ANSI color sequences so the plain text can be searched.
fn plain(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[test]
fn test_non_ascii_input_keeps_every_snippet() {
    let (request, error) = failing("x+ééééé", "0", "1", "10");
    let reports = build_reports("f(x)", &request.function, &error);
    assert!(!reports.is_empty());

    // every report shows the source line it points into
    let text = plain(&rendered(&request, &error));
    assert_eq!(text.matches("[E001]").count(), reports.len());
    assert_eq!(text.matches("x+ééééé").count(), reports.len());
}

#[test]
fn test_non_ascii_label_starts_at_character_column() {
    let (request, error) = failing("2π*x", "0", "1", "10");
    let text = plain(&rendered(&request, &error));
    // ariadne reports line:column, counted in characters
    assert!(text.contains("f(x):1:2"), "{}", text);
}
