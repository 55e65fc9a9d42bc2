//! Unit tests for the recurrence context.

mod cadence_tests;
mod fixtures;
mod regenerator_tests;
