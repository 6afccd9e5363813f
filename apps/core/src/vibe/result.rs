//! Vibe Result - Output structures for vibe classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured personality signal extracted from free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VibeResult {
    /// One vibe, or two joined with " & "
    pub vibe: String,
    /// Up to `max_tags` distinct tags, in discovery order
    pub tags: Vec<String>,
    /// Confidence score (0.5 - 0.95 with default settings)
    pub confidence: f32,
    /// Human-readable sentence embedding the vibe and tags
    pub summary: String,
}

impl VibeResult {
    /// Build the summary sentence for a primary vibe and its tags
    pub fn summary_for(primary_vibe: &str, tags: &[String]) -> String {
        format!(
            "Speech analysis suggests a {} personality who values {}.",
            primary_vibe.to_lowercase(),
            tags.join(", ")
        )
    }

    /// The primary vibe (text before " & ")
    pub fn primary_vibe(&self) -> &str {
        self.vibe.split(" & ").next().unwrap_or(&self.vibe)
    }

    /// The secondary vibe, if two were detected
    pub fn secondary_vibe(&self) -> Option<&str> {
        self.vibe.split_once(" & ").map(|(_, second)| second)
    }
}

/// What fired during one classification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationTrace {
    /// Trigger of every (token, entry) match, in scan order
    pub matched_triggers: Vec<String>,
    /// Number of (token, entry) matches
    pub match_count: usize,
    /// Number of whitespace-separated tokens scanned
    pub token_count: usize,
    /// Whether the zero-match defaults were applied
    pub used_fallback: bool,
}

/// Complete analyzer output for one profile text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VibeReport {
    /// Classification result
    pub result: VibeResult,

    /// Match details
    pub trace: ClassificationTrace,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Timestamp of analysis
    pub timestamp: DateTime<Utc>,
}

impl VibeReport {
    /// One-line description for logging
    pub fn summary_line(&self) -> String {
        format!(
            "Vibe: {} ({:.0}%), Tags: [{}], Matches: {}{}",
            self.result.vibe,
            self.result.confidence * 100.0,
            self.result.tags.join(", "),
            self.trace.match_count,
            if self.trace.used_fallback { " (fallback)" } else { "" }
        )
    }
}
