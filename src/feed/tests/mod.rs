//! Unit tests for the change feed and refresh bridge.

mod bridge_tests;
