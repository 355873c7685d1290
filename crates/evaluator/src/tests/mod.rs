// Test module for evaluator
//
// Unit tests for values, builtins, domain construction, bound resolution and
// vectorized function sampling.

mod bound_tests;
mod function_tests;
