// Test module for calcplot
//
// Unit tests for the pipeline, error reports, text output, render helpers
// and the interactive session.

mod report_tests;
