// Operator Precedence Tests
//
// The fully parenthesized Display form makes the grouping visible.

use crate::parser::parse_expression;

fn grouped(input: &str) -> String {
    parse_expression(input)
        .unwrap_or_else(|e| panic!("Failed to parse '{}': {:?}", input, e))
        .to_string()
}

// ==================== ARITHMETIC PRECEDENCE ====================

#[test]
fn test_mul_over_add() {
    assert_eq!(grouped("1 + 2 * 3"), "(1 + (2 * 3))");
}

#[test]
fn test_div_over_sub() {
    assert_eq!(grouped("10 - 4 / 2"), "(10 - (4 / 2))");
}

#[test]
fn test_mod_over_add() {
    assert_eq!(grouped("x % 2 + 1"), "((x % 2) + 1)");
}

#[test]
fn test_pow_over_mul() {
    assert_eq!(grouped("2 * x ** 2"), "(2 * (x ** 2))");
}

#[test]
fn test_parens_override_precedence() {
    assert_eq!(grouped("(1 + 2) * 3"), "((1 + 2) * 3)");
}

// ==================== ASSOCIATIVITY ====================

#[test]
fn test_sub_is_left_associative() {
    assert_eq!(grouped("1 - 2 - 3"), "((1 - 2) - 3)");
}

#[test]
fn test_div_is_left_associative() {
    assert_eq!(grouped("8 / 4 / 2"), "((8 / 4) / 2)");
}

#[test]
fn test_pow_is_right_associative() {
    assert_eq!(grouped("2 ** 3 ** 2"), "(2 ** (3 ** 2))");
}

#[test]
fn test_caret_matches_double_star() {
    assert_eq!(grouped("2 ^ 3 ^ 2"), grouped("2 ** 3 ** 2"));
}

// ==================== UNARY ====================

#[test]
fn test_negation_binds_looser_than_pow() {
    assert_eq!(grouped("-x ** 2"), "(-(x ** 2))");
}

#[test]
fn test_signed_exponent() {
    assert_eq!(grouped("2 ** -1"), "(2 ** (-1))");
}

#[test]
fn test_negation_binds_tighter_than_mul() {
    assert_eq!(grouped("-2 * x"), "((-2) * x)");
}

#[test]
fn test_repeated_negation() {
    assert_eq!(grouped("--x"), "(-(-x))");
}

#[test]
fn test_unary_plus() {
    assert_eq!(grouped("+x"), "(+x)");
}

#[test]
fn test_subtraction_of_negative() {
    assert_eq!(grouped("1 - -x"), "(1 - (-x))");
}

// ==================== COMPARISON ====================

#[test]
fn test_comparison_is_loosest() {
    assert_eq!(grouped("x * 2 < 3 + 1"), "((x * 2) < (3 + 1))");
}

#[test]
fn test_two_char_comparisons() {
    assert_eq!(grouped("x <= 1"), "(x <= 1)");
    assert_eq!(grouped("x >= 1"), "(x >= 1)");
    assert_eq!(grouped("x == 1"), "(x == 1)");
    assert_eq!(grouped("x != 1"), "(x != 1)");
}

// ==================== CALLS ====================

#[test]
fn test_call_binds_tightest() {
    assert_eq!(grouped("np.sin(x) ** 2"), "(np.sin(x) ** 2)");
}

#[test]
fn test_call_arguments_are_full_expressions() {
    assert_eq!(grouped("where(x < 0, -x, x)"), "where((x < 0), (-x), x)");
}
