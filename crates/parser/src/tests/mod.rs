// Test module for parser
//
// Unit tests for AST construction, precedence, syntax errors and name
// resolution.

mod precedence_tests;
