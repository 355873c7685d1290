// Number Literal Tests
//
// Integer, decimal and scientific notation. Numbers are kept as text;
// conversion to f64 happens in the parser.

use crate::token::Token;
use logos::Logos;

// Helper function to tokenize and assert single token
fn assert_single_token(input: &str, expected: Token) {
    let mut lexer = Token::lexer(input);
    let token = lexer.next();
    assert_eq!(
        token,
        Some(Ok(expected)),
        "Failed to match token for input: {}",
        input
    );
    assert_eq!(lexer.next(), None, "Expected single token, found more");
}

fn num(text: &str) -> Token {
    Token::Number(text.to_string())
}

// ==================== INTEGER TESTS ====================

#[test]
fn test_int_zero() {
    assert_single_token("0", num("0"));
}

#[test]
fn test_int_positive() {
    assert_single_token("500", num("500"));
}

#[test]
fn test_int_leading_zeros_kept_as_text() {
    assert_single_token("007", num("007"));
}

// ==================== DECIMAL TESTS ====================

#[test]
fn test_decimal_simple() {
    assert_single_token("3.14", num("3.14"));
}

#[test]
fn test_decimal_long_fraction() {
    assert_single_token("6.283185307", num("6.283185307"));
}

#[test]
fn test_decimal_without_integer_part() {
    assert_single_token(".5", num(".5"));
}

#[test]
fn test_decimal_without_fraction_part() {
    assert_single_token("5.", num("5."));
}

// ==================== SCIENTIFIC NOTATION ====================

#[test]
fn test_exponent_lowercase() {
    assert_single_token("1e3", num("1e3"));
}

#[test]
fn test_exponent_uppercase_with_sign() {
    assert_single_token("2.5E+4", num("2.5E+4"));
    assert_single_token("1e-3", num("1e-3"));
}

#[test]
fn test_exponent_on_leading_dot() {
    assert_single_token(".5e2", num(".5e2"));
}

#[test]
fn test_every_number_parses_as_f64() {
    for text in ["0", "500", "3.14", ".5", "5.", "1e3", "2.5E+4", "1e-3", ".5e2"] {
        let mut lexer = Token::lexer(text);
        match lexer.next() {
            Some(Ok(Token::Number(s))) => assert!(s.parse::<f64>().is_ok(), "{} not an f64", s),
            other => panic!("Expected number for {}, got {:?}", text, other),
        }
    }
}

// ==================== SIGNS ARE OPERATORS ====================

#[test]
fn test_negative_number_is_minus_then_number() {
    let tokens: Vec<_> = Token::lexer("-2").collect();
    assert_eq!(tokens, vec![Ok(Token::Minus), Ok(num("2"))]);
}
