//! Profile Analyzer - entry point for profile enrichment.
//!
//! Validates caller text, runs the vibe classifier and stamps the result
//! with timing metadata. The classifier never fails; the only error here is
//! input that exceeds the configured length limit.

use chrono::Utc;
use std::time::Instant;
use tracing::{debug, warn};

use super::classifier::VibeClassifier;
use super::result::VibeReport;
use crate::config::AnalyzerConfig;
use crate::error::AppError;
use crate::models::ProfileText;

/// Validates and classifies profile text
#[derive(Debug, Clone)]
pub struct ProfileAnalyzer {
    classifier: VibeClassifier,
    max_input_chars: usize,
}

impl Default for ProfileAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl ProfileAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            classifier: VibeClassifier::with_config(config.classifier),
            max_input_chars: config.max_input_chars,
        }
    }

    /// Analyze one profile text
    pub fn analyze(&self, input: &ProfileText) -> Result<VibeReport, AppError> {
        if let Err(errors) = input.check(self.max_input_chars) {
            warn!(
                chars = input.char_count(),
                limit = self.max_input_chars,
                "Rejected profile text over length limit"
            );
            return Err(errors.into());
        }

        let start = Instant::now();
        let (result, trace) = self.classifier.classify_detailed(&input.text);

        let report = VibeReport {
            result,
            trace,
            processing_time_ms: start.elapsed().as_millis() as u64,
            timestamp: Utc::now(),
        };

        debug!(
            vibe = %report.result.vibe,
            tags = report.result.tags.len(),
            confidence = report.result.confidence,
            matches = report.trace.match_count,
            "Profile text classified"
        );

        Ok(report)
    }

    /// Analyze a raw string
    pub fn analyze_text(&self, text: &str) -> Result<VibeReport, AppError> {
        self.analyze(&ProfileText::new(text))
    }

    /// Analyze several texts independently; one bad item does not affect the rest
    pub fn analyze_batch(&self, texts: &[String]) -> Vec<Result<VibeReport, AppError>> {
        texts.iter().map(|t| self.analyze_text(t)).collect()
    }
}
