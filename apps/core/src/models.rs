use serde::{Deserialize, Serialize};
use validator::{ValidationError, ValidationErrors};

/// Free text submitted for profile enrichment (bio, intro, voice transcript).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileText {
    /// The raw text. Not trimmed or normalized; empty text is valid.
    pub text: String,
}

impl ProfileText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Number of characters (not bytes) in the text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Validate against a character limit.
    ///
    /// The limit is counted in characters so multi-byte input is not
    /// penalized against ASCII input.
    pub fn validate_length(&self, max_chars: usize) -> Result<(), ValidationError> {
        let count = self.char_count();
        if count > max_chars {
            let mut err = ValidationError::new("length");
            err.message = Some(format!("text has {} characters, limit is {}", count, max_chars).into());
            err.add_param("max".into(), &max_chars);
            err.add_param("actual".into(), &count);
            return Err(err);
        }
        Ok(())
    }

    /// Validate against `max_chars`, collecting errors under the `text` field.
    pub fn check(&self, max_chars: usize) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(e) = self.validate_length(max_chars) {
            errors.add("text", e);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
