//! Keyword table for the vibe classifier.
//!
//! Each entry maps a lowercase trigger to a personality tag and a vibe.
//! A token fires an entry when it *contains* the trigger anywhere, so
//! "traveling" fires "travel" and "outfit" fires "fit".
//!
//! Entry order matters: it decides which tags survive the tag cap and
//! which vibes become primary/secondary when a single token fires
//! several entries.

use serde::Serialize;

/// A single trigger → (tag, vibe) mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeywordEntry {
    /// Lowercase substring that fires this entry
    pub trigger: &'static str,
    /// Personality tag emitted on match
    pub tag: &'static str,
    /// Vibe label emitted on match
    pub vibe: &'static str,
}

const fn entry(trigger: &'static str, tag: &'static str, vibe: &'static str) -> KeywordEntry {
    KeywordEntry { trigger, tag, vibe }
}

/// Default keyword table, in definition order
pub const KEYWORD_TABLE: &[KeywordEntry] = &[
    // Adventure / outdoors
    entry("travel", "Adventurous", "Energetic"),
    entry("hike", "Outdoorsy", "Adventurous"),
    entry("adventure", "Adventurous", "Energetic"),
    entry("beach", "Laid-back", "Chill"),
    // Fitness
    entry("gym", "Fitness Enthusiast", "Active"),
    entry("fit", "Health-Conscious", "Active"),
    entry("yoga", "Mindful", "Calm"),
    entry("meditat", "Mindful", "Calm"),
    // Tech / intellect
    entry("code", "Tech-Savvy", "Intellectual"),
    entry("tech", "Tech-Savvy", "Intellectual"),
    entry("book", "Bookworm", "Thoughtful"),
    entry("science", "Curious", "Intellectual"),
    // Creative
    entry("music", "Music Lover", "Creative"),
    entry("paint", "Artistic", "Creative"),
    entry("movie", "Film Buff", "Chill"),
    // Food
    entry("cook", "Foodie", "Warm"),
    entry("food", "Foodie", "Warm"),
    // Relationships
    entry("family", "Family-Oriented", "Caring"),
    entry("kids", "Family-Oriented", "Caring"),
    entry("dog", "Animal Lover", "Caring"),
    entry("pet", "Animal Lover", "Caring"),
    // Work
    entry("career", "Ambitious", "Driven"),
    entry("startup", "Entrepreneurial", "Driven"),
    entry("business", "Entrepreneurial", "Driven"),
    // Social
    entry("party", "Social Butterfly", "Outgoing"),
    entry("friends", "Loyal Friend", "Outgoing"),
    entry("laugh", "Funny", "Playful"),
    entry("game", "Gamer", "Playful"),
];

/// Returns the keyword entries a single lowercase token fires, in table order
pub fn matching_entries<'a>(
    table: &'a [KeywordEntry],
    token: &'a str,
) -> impl Iterator<Item = &'a KeywordEntry> + 'a {
    table.iter().filter(move |e| token.contains(e.trigger))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_triggers_are_lowercase_and_unique() {
        let mut seen = HashSet::new();
        for e in KEYWORD_TABLE {
            assert_eq!(e.trigger, e.trigger.to_lowercase(), "trigger '{}'", e.trigger);
            assert!(!e.trigger.is_empty());
            assert!(seen.insert(e.trigger), "duplicate trigger '{}'", e.trigger);
        }
    }

    #[test]
    fn test_common_filler_words_fire_nothing() {
        for word in ["i", "love", "to", "and", "my", "enthusiast", "the", "a"] {
            assert_eq!(
                matching_entries(KEYWORD_TABLE, word).count(),
                0,
                "filler word '{}' should not match",
                word
            );
        }
    }

    #[test]
    fn test_substring_matching() {
        let hits: Vec<&str> = matching_entries(KEYWORD_TABLE, "traveling")
            .map(|e| e.trigger)
            .collect();
        assert_eq!(hits, vec!["travel"]);

        // One token can fire several entries, in table order
        let hits: Vec<&str> = matching_entries(KEYWORD_TABLE, "fittech")
            .map(|e| e.trigger)
            .collect();
        assert_eq!(hits, vec!["fit", "tech"]);
    }
}
