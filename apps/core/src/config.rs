//! Classifier and analyzer configuration.
//!
//! Defaults reproduce the reference classifier exactly. Every value can be
//! overridden from the environment (a `.env` file is loaded by the binary).

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use validator::{Validate, ValidationError};

use crate::error::AppError;

pub const DEFAULT_MAX_TAGS: usize = 4;
pub const DEFAULT_BASE_CONFIDENCE: f32 = 0.5;
pub const DEFAULT_CONFIDENCE_STEP: f32 = 0.1;
pub const DEFAULT_MAX_CONFIDENCE: f32 = 0.95;
pub const DEFAULT_FALLBACK_TAG: &str = "Open-minded";
pub const DEFAULT_FALLBACK_VIBE: &str = "Mysterious";
pub const DEFAULT_NEUTRAL_VIBE: &str = "Friendly";
pub const DEFAULT_MAX_INPUT_CHARS: usize = 5000;

/// Tunables for the vibe classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_confidence_bounds"))]
pub struct ClassifierConfig {
    /// Maximum number of tags kept in a result.
    #[validate(range(min = 1, max = 16))]
    pub max_tags: usize,
    /// Confidence reported for zero matches.
    #[validate(range(min = 0.0, max = 1.0))]
    pub base_confidence: f32,
    /// Confidence added per keyword match.
    #[validate(range(min = 0.0, max = 1.0))]
    pub confidence_step: f32,
    /// Upper clamp for confidence.
    #[validate(range(min = 0.0, max = 1.0))]
    pub max_confidence: f32,
    /// Tag used when nothing matched.
    #[validate(length(min = 1))]
    pub fallback_tag: String,
    /// Vibe used when nothing matched.
    #[validate(length(min = 1))]
    pub fallback_vibe: String,
    /// Vibe used when the vibe set is somehow empty.
    #[validate(length(min = 1))]
    pub neutral_vibe: String,
}

fn validate_confidence_bounds(config: &ClassifierConfig) -> Result<(), ValidationError> {
    // Range checks compare, and every comparison with NaN is false
    let finite = config.base_confidence.is_finite()
        && config.confidence_step.is_finite()
        && config.max_confidence.is_finite();
    if !finite {
        let mut err = ValidationError::new("confidence_not_finite");
        err.message = Some("confidence settings must be finite numbers".into());
        return Err(err);
    }
    if config.max_confidence < config.base_confidence {
        let mut err = ValidationError::new("confidence_bounds");
        err.message = Some("max_confidence must be >= base_confidence".into());
        return Err(err);
    }
    Ok(())
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            max_tags: DEFAULT_MAX_TAGS,
            base_confidence: DEFAULT_BASE_CONFIDENCE,
            confidence_step: DEFAULT_CONFIDENCE_STEP,
            max_confidence: DEFAULT_MAX_CONFIDENCE,
            fallback_tag: DEFAULT_FALLBACK_TAG.to_string(),
            fallback_vibe: DEFAULT_FALLBACK_VIBE.to_string(),
            neutral_vibe: DEFAULT_NEUTRAL_VIBE.to_string(),
        }
    }
}

impl ClassifierConfig {
    /// Build from `VIBE_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let config = Self {
            max_tags: env_or("VIBE_MAX_TAGS", defaults.max_tags)?,
            base_confidence: env_or("VIBE_BASE_CONFIDENCE", defaults.base_confidence)?,
            confidence_step: env_or("VIBE_CONFIDENCE_STEP", defaults.confidence_step)?,
            max_confidence: env_or("VIBE_MAX_CONFIDENCE", defaults.max_confidence)?,
            fallback_tag: env_or("VIBE_FALLBACK_TAG", defaults.fallback_tag)?,
            fallback_vibe: env_or("VIBE_FALLBACK_VIBE", defaults.fallback_vibe)?,
            neutral_vibe: defaults.neutral_vibe,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Settings for the profile analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AnalyzerConfig {
    #[validate(nested)]
    pub classifier: ClassifierConfig,
    /// Longest accepted profile text, in characters.
    #[validate(range(min = 1))]
    pub max_input_chars: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }
}

impl AnalyzerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let config = Self {
            classifier: ClassifierConfig::from_env()?,
            max_input_chars: env_or("VIBE_MAX_INPUT_CHARS", DEFAULT_MAX_INPUT_CHARS)?,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Read and parse `key`, or return `default` when it is unset.
fn env_or<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{}={:?}: {}", key, raw, e))),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(AppError::Config(format!("{}: {}", key, e))),
    }
}
