//! Unit tests for the activity log context.

mod recorder_tests;
