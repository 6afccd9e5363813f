//! # Vibe Module
//!
//! Rule-based personality analysis of free text (bios, intros, voice
//! transcripts). Fast, deterministic, no model required.
//!
//! ## Components
//! - `keywords`: trigger → (tag, vibe) table
//! - `ordered_set`: insertion-ordered set backing detected tags and vibes
//! - `classifier`: keyword scan and scoring
//! - `result`: output data structures
//! - `analyzer`: input validation and reporting around the classifier

pub mod analyzer;
pub mod classifier;
pub mod keywords;
pub mod ordered_set;
pub mod result;

pub use analyzer::ProfileAnalyzer;
pub use classifier::{classify, VibeClassifier};
pub use keywords::{KeywordEntry, KEYWORD_TABLE};
pub use ordered_set::OrderedSet;
pub use result::{ClassificationTrace, VibeReport, VibeResult};
