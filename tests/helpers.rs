//! Test helpers for projection integration tests.
//!
//! This module provides the shared model fixtures used across the
//! integration test files.

#[path = "helpers/test_models.rs"]
pub mod test_models;
