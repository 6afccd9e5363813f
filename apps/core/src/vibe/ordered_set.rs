//! Insertion-ordered string set.
//!
//! Duplicates are rejected and iteration follows first-insertion order.

use std::collections::HashSet;

/// Set of strings that remembers the order values were first inserted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedSet {
    items: Vec<String>,
    index: HashSet<String>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. Returns `false` if it was already present.
    pub fn insert(&mut self, value: &str) -> bool {
        if self.index.contains(value) {
            return false;
        }
        self.index.insert(value.to_string());
        self.items.push(value.to_string());
        true
    }

    /// Drop every value, keeping allocations
    pub fn clear(&mut self) {
        self.items.clear();
        self.index.clear();
    }

    /// Value at `position` in insertion order
    pub fn get(&self, position: usize) -> Option<&str> {
        self.items.get(position).map(String::as_str)
    }

    /// The first `n` values in insertion order
    pub fn first_n(&self, n: usize) -> Vec<String> {
        self.items.iter().take(n).cloned().collect()
    }
}
