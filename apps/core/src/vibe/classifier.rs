//! Rule-based vibe classification.
//!
//! Lowercases the text, splits it on whitespace and checks every token
//! against every keyword entry by substring containment. Matches feed two
//! insertion-ordered sets (tags and vibes) and a match counter that drives
//! the confidence score. No model, no I/O, never fails.

use std::sync::LazyLock;

use super::keywords::{matching_entries, KeywordEntry, KEYWORD_TABLE};
use super::ordered_set::OrderedSet;
use super::result::{ClassificationTrace, VibeResult};
use crate::config::ClassifierConfig;

/// Default classifier, shared read-only by every caller
static DEFAULT_CLASSIFIER: LazyLock<VibeClassifier> = LazyLock::new(VibeClassifier::new);

/// Classify `text` with the default keyword table and settings
pub fn classify(text: &str) -> VibeResult {
    DEFAULT_CLASSIFIER.classify(text)
}

/// Keyword-table classifier
#[derive(Debug, Clone)]
pub struct VibeClassifier {
    config: ClassifierConfig,
    table: &'static [KeywordEntry],
}

impl Default for VibeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl VibeClassifier {
    /// Create a classifier with the built-in table and default settings
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default())
    }

    /// Create a classifier with custom settings
    pub fn with_config(config: ClassifierConfig) -> Self {
        Self {
            config,
            table: KEYWORD_TABLE,
        }
    }

    /// Swap the keyword table (entries are scanned in slice order)
    pub fn with_table(mut self, table: &'static [KeywordEntry]) -> Self {
        self.table = table;
        self
    }

    /// Classify free text
    pub fn classify(&self, text: &str) -> VibeResult {
        self.classify_detailed(text).0
    }

    /// Classify free text and report which triggers fired
    pub fn classify_detailed(&self, text: &str) -> (VibeResult, ClassificationTrace) {
        let lowered = text.to_lowercase();

        let mut tags = OrderedSet::new();
        let mut vibes = OrderedSet::new();
        let mut trace = ClassificationTrace::default();

        for token in lowered.split_whitespace() {
            trace.token_count += 1;
            for entry in matching_entries(self.table, token) {
                tags.insert(entry.tag);
                vibes.insert(entry.vibe);
                trace.match_count += 1;
                trace.matched_triggers.push(entry.trigger.to_string());
            }
        }

        if trace.match_count == 0 {
            tags.clear();
            vibes.clear();
            tags.insert(&self.config.fallback_tag);
            vibes.insert(&self.config.fallback_vibe);
            trace.used_fallback = true;
        }

        let tags = tags.first_n(self.config.max_tags);
        let primary = vibes.get(0).unwrap_or(self.config.neutral_vibe.as_str());
        let vibe = match vibes.get(1) {
            Some(secondary) => format!("{} & {}", primary, secondary),
            None => primary.to_string(),
        };

        let result = VibeResult {
            summary: VibeResult::summary_for(primary, &tags),
            confidence: self.confidence_for(trace.match_count),
            vibe,
            tags,
        };

        (result, trace)
    }

    /// Confidence for a match count: base + count * step, clamped
    pub fn confidence_for(&self, match_count: usize) -> f32 {
        let raw = self.config.base_confidence + match_count as f32 * self.config.confidence_step;
        raw.min(self.config.max_confidence)
    }
}
