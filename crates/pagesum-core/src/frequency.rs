//! Word frequency analysis.
//!
//! Builds a frequency table over the whole document once per call and
//! exposes the most frequent informative words as the keyword signal for
//! sentence scoring.

use std::collections::{HashMap, HashSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// Words of this many characters or fewer never count as informative.
pub const MIN_INFORMATIVE_LEN: usize = 3;

/// A word and its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordCount {
    /// Normalized (lowercased) word.
    pub word: String,
    /// Occurrences in the document.
    pub count: usize,
}

/// Occurrence counts for informative words, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencyTable {
    entries: Vec<WordCount>,
    positions: HashMap<String, usize>,
}

impl WordFrequencyTable {
    /// Count informative words in `text`, skipping short words and stopwords.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn build(text: &str, stopwords: &HashSet<String>) -> Self {
        let mut table = Self::default();
        for word in text::words(text) {
            if word.chars().count() <= MIN_INFORMATIVE_LEN || stopwords.contains(&word) {
                continue;
            }
            table.record(word);
        }
        tracing::debug!(unique = table.len(), "frequency table built");
        table
    }

    fn record(&mut self, word: String) {
        if let Some(&pos) = self.positions.get(&word) {
            self.entries[pos].count += 1;
        } else {
            self.positions.insert(word.clone(), self.entries.len());
            self.entries.push(WordCount { word, count: 1 });
        }
    }

    /// Occurrences of `word` (already normalized), or zero.
    pub fn count(&self, word: &str) -> usize {
        self.positions
            .get(word)
            .map_or(0, |&pos| self.entries[pos].count)
    }

    /// Number of distinct informative words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no informative words were found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `k` most frequent words, highest count first.
    ///
    /// Ties keep first-seen order, so the result is deterministic.
    pub fn top(&self, k: usize) -> Vec<WordCount> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(k);
        ranked
    }
}

/// The `k` most frequent informative words in `text`.
///
/// Convenience wrapper over [`WordFrequencyTable::build`] and
/// [`WordFrequencyTable::top`].
pub fn top_words(text: &str, k: usize, stopwords: &HashSet<String>) -> Vec<WordCount> {
    WordFrequencyTable::build(text, stopwords).top(k)
}
