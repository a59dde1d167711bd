//! Integration tests for MovieFlix
//!
//! Tests are organized by component:
//! - catalog_test: catalog file loading and normalization
//! - engine_test: recommendation ranking and error handling
//! - ui_test: card rendering contract, theme, and navigation
//! - cli_test: CLI argument parsing and exit codes
//! - e2e_test: end-to-end flow (Browse -> Detail -> rendered buffer)

// Note: Each test file is a separate integration test crate
// Tests are run individually by cargo, not via mod.rs
