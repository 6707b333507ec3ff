//! Tuning parameters for the summarization pipeline.

use std::collections::HashSet;

use crate::error::{SummarizeError, SummarizeResult};
use crate::word_lists::DEFAULT_STOPWORDS;

/// Default cap on candidate sentences passed to the scorer.
pub const DEFAULT_MAX_CANDIDATES: usize = 50;
/// Default exclusive lower bound on sentence length (characters).
pub const DEFAULT_MIN_SENTENCE_LENGTH: usize = 20;
/// Default exclusive upper bound on sentence length (characters).
pub const DEFAULT_MAX_SENTENCE_LENGTH: usize = 200;
/// Default size of the top-word table.
pub const DEFAULT_TOP_WORD_COUNT: usize = 20;
/// Default number of sentences in a summary.
pub const DEFAULT_TARGET_LENGTH: usize = 10;
/// Upper bound on summary sentences, whatever the target.
pub const MAX_SUMMARY_LENGTH: usize = 10;

/// Options controlling candidate extraction, frequency analysis and selection.
///
/// All fields are plain parameters; nothing here performs I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Maximum number of candidate sentences kept after length filtering.
    pub max_candidate_sentences: usize,
    /// Sentences must be longer than this many characters.
    pub min_sentence_length: usize,
    /// Sentences must be shorter than this many characters.
    pub max_sentence_length: usize,
    /// Number of informative words used as the keyword signal.
    pub top_word_count: usize,
    /// Requested number of sentences in the final summary. Capped at
    /// [`MAX_SUMMARY_LENGTH`]; see [`SummaryOptions::effective_target`].
    pub target_summary_length: usize,
    /// Lowercase words excluded from frequency analysis.
    pub stopwords: HashSet<String>,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            max_candidate_sentences: DEFAULT_MAX_CANDIDATES,
            min_sentence_length: DEFAULT_MIN_SENTENCE_LENGTH,
            max_sentence_length: DEFAULT_MAX_SENTENCE_LENGTH,
            top_word_count: DEFAULT_TOP_WORD_COUNT,
            target_summary_length: DEFAULT_TARGET_LENGTH,
            stopwords: DEFAULT_STOPWORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}

impl SummaryOptions {
    /// Set the summary length.
    #[must_use]
    pub const fn with_target(mut self, target: usize) -> Self {
        self.target_summary_length = target;
        self
    }

    /// Set the size of the top-word table.
    #[must_use]
    pub const fn with_top_words(mut self, count: usize) -> Self {
        self.top_word_count = count;
        self
    }

    /// Set the candidate cap.
    #[must_use]
    pub const fn with_max_candidates(mut self, max: usize) -> Self {
        self.max_candidate_sentences = max;
        self
    }

    /// Set the exclusive sentence length bounds.
    #[must_use]
    pub const fn with_sentence_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_sentence_length = min;
        self.max_sentence_length = max;
        self
    }

    /// Replace the stopword set. Words are lowercased.
    #[must_use]
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords = words.into_iter().map(|w| w.as_ref().to_lowercase()).collect();
        self
    }

    /// Add words to the stopword set. Words are lowercased.
    pub fn extend_stopwords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    /// Number of sentences a summary will actually hold.
    pub const fn effective_target(&self) -> usize {
        if self.target_summary_length < MAX_SUMMARY_LENGTH {
            self.target_summary_length
        } else {
            MAX_SUMMARY_LENGTH
        }
    }

    /// Check that the options describe a pipeline that can produce output.
    pub fn validate(&self) -> SummarizeResult<()> {
        if self.target_summary_length == 0 {
            return Err(SummarizeError::InvalidOptions(
                "target_summary_length must be at least 1".to_string(),
            ));
        }
        if self.max_candidate_sentences == 0 {
            return Err(SummarizeError::InvalidOptions(
                "max_candidate_sentences must be at least 1".to_string(),
            ));
        }
        // Exclusive bounds: there must be at least one admissible length.
        if self.min_sentence_length.saturating_add(1) >= self.max_sentence_length {
            return Err(SummarizeError::InvalidOptions(format!(
                "min_sentence_length ({}) leaves no room below max_sentence_length ({})",
                self.min_sentence_length, self.max_sentence_length
            )));
        }
        Ok(())
    }
}
