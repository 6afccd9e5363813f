//! Test Module
//!
//! ## Test Categories
//! - `vibe_tests`: keyword matching, fallback, tag cap, confidence
//! - `analyzer_tests`: input validation, batching and reports
//! - `config_tests`: environment overrides

mod analyzer_tests;
