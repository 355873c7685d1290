// Test module for calculus
//
// Unit tests for the finite-difference derivative and the cumulative
// trapezoidal integral.

mod integral_tests;
