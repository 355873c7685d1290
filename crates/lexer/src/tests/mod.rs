// Test module for lexer
//
// Unit tests for the expression tokenizer, organized by category.

mod number_tests;
