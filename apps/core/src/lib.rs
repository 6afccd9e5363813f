//! Vibe Core
//!
//! Rule-based personality classifier for dating-profile text, with the
//! validation, configuration and reporting layers around it.

pub mod config;
pub mod error;
pub mod models;
pub mod vibe;

pub use config::{AnalyzerConfig, ClassifierConfig};
pub use error::AppError;
pub use models::ProfileText;
pub use vibe::{classify, ProfileAnalyzer, VibeClassifier, VibeReport, VibeResult};

#[cfg(test)]
mod tests;
