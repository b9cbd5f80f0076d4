//! Word-frequency maps.

use crate::core::error::{MergeError, MergeResult};
use crate::core::types::json_kind;
use indexmap::IndexMap;
use serde::Serialize;

/// Ordered mapping from word to count.
///
/// Counts are `i128` so that sums of any realistic number of `i64`/`u64`
/// inputs are exact, whatever order they are added in.
///
/// Equality compares counts per word and ignores order; use
/// [`FrequencyMap::words`] or [`FrequencyMap::iter`] to check ordering.
/// Serializes as a JSON object in current order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyMap {
    counts: IndexMap<String, i128>,
}

impl FrequencyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of word → integer count.
    ///
    /// `index` identifies the input in error messages.
    pub fn from_json(index: usize, json: &serde_json::Value) -> MergeResult<Self> {
        let obj = json.as_object().ok_or_else(|| MergeError::NotAMap {
            index,
            found: json_kind(json).to_string(),
        })?;

        let mut map = Self::new();
        for (word, count) in obj {
            let count = count
                .as_i64()
                .map(i128::from)
                .or_else(|| count.as_u64().map(i128::from))
                .ok_or_else(|| MergeError::NonNumericCount {
                    index,
                    word: word.clone(),
                    found: json_kind(count).to_string(),
                })?;
            map.add(word, count);
        }
        Ok(map)
    }

    /// Add `count` to `word`, starting from zero if absent.
    pub fn add(&mut self, word: &str, count: i128) {
        match self.counts.get_mut(word) {
            Some(total) => *total += count,
            None => {
                self.counts.insert(word.to_string(), count);
            }
        }
    }

    /// Add every count of `other` into this map.
    pub fn update(&mut self, other: &FrequencyMap) {
        for (word, count) in other.iter() {
            self.add(word, count);
        }
    }

    /// Entries ordered by count, highest first. Ties keep insertion order.
    pub fn most_common(&self) -> Vec<(&str, i128)> {
        let mut entries: Vec<(&str, i128)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// Reorder in place by count, highest first. Ties keep insertion order.
    pub fn sort_by_frequency(&mut self) {
        self.counts.sort_by(|_, a, _, b| b.cmp(a));
    }

    /// Count for `word`, if present.
    pub fn get(&self, word: &str) -> Option<i128> {
        self.counts.get(word).copied()
    }

    /// Iterate over `(word, count)` in current order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i128)> {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// Words in current order.
    pub fn words(&self) -> Vec<&str> {
        self.counts.keys().map(String::as_str).collect()
    }

    /// Sum of all counts.
    pub fn total(&self) -> i128 {
        self.counts.values().sum()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if there are no words.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, i128)> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = (S, i128)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (word, count) in iter {
            let word: String = word.into();
            map.add(&word, count);
        }
        map
    }
}

impl<const N: usize> From<[(&str, i128); N]> for FrequencyMap {
    fn from(entries: [(&str, i128); N]) -> Self {
        entries.into_iter().collect()
    }
}
