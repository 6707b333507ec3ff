//! Text processing utilities.
//!
//! Provides whitespace normalization, terminal-punctuation sentence
//! splitting, word tokenization, and candidate sentence extraction for the
//! summarization pipeline.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::options::SummaryOptions;

/// Cleaned text shorter than this (in characters) is not worth summarizing.
pub const MIN_TEXT_LENGTH: usize = 100;

/// Runs of whitespace.
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// A maximal run of non-terminal characters followed by terminal punctuation.
static SENTENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("valid regex"));

/// Runs of non-word characters (anything outside `[0-9A-Za-z_]`).
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_]+").expect("valid regex"));

/// A candidate sentence eligible for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Sentence {
    /// Trimmed sentence text.
    pub text: String,
    /// Position in the candidate sequence.
    pub index: usize,
    /// Length in characters.
    pub length: usize,
    /// Number of space-separated words.
    pub word_count: usize,
}

impl Sentence {
    /// Build a sentence from already-trimmed text at the given candidate position.
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        let text = text.into();
        let length = text.chars().count();
        let word_count = text.split(' ').count();
        Self {
            text,
            index,
            length,
            word_count,
        }
    }
}

/// Outcome of candidate extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidates {
    /// The cleaned text is below [`MIN_TEXT_LENGTH`].
    TooShort,
    /// No terminal punctuation was found.
    Unparseable,
    /// Sentences were found but none passed the length bounds.
    NoneSuitable,
    /// Candidate sentences in document order.
    Found(Vec<Sentence>),
}

/// Collapse all whitespace runs to a single space and trim the edges.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Split text into raw sentences using the terminal-punctuation rule.
///
/// Each match is a run of characters other than `.`, `!`, `?` followed by
/// one or more of them. Trailing text without terminal punctuation is
/// dropped. Returned slices are not trimmed.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Lowercase the text and split it into word tokens on non-word runs.
///
/// Empty tokens (from leading or trailing punctuation) are skipped.
pub fn words(text: &str) -> Vec<String> {
    NON_WORD
        .split(&text.to_lowercase())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Turn raw text into the bounded, ordered list of candidate sentences.
///
/// Whitespace is re-normalized even if the supplier already did so.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn extract_candidates(text: &str, options: &SummaryOptions) -> Candidates {
    let cleaned = normalize_whitespace(text);
    if cleaned.chars().count() < MIN_TEXT_LENGTH {
        tracing::debug!(len = cleaned.len(), "text below minimum length");
        return Candidates::TooShort;
    }

    let raw = split_sentences(&cleaned);
    if raw.is_empty() {
        tracing::debug!("no terminal punctuation found");
        return Candidates::Unparseable;
    }

    let sentences: Vec<Sentence> = raw
        .into_iter()
        .map(str::trim)
        .filter(|s| {
            let len = s.chars().count();
            len > options.min_sentence_length && len < options.max_sentence_length
        })
        .take(options.max_candidate_sentences)
        .enumerate()
        .map(|(index, s)| Sentence::new(s, index))
        .collect();

    if sentences.is_empty() {
        tracing::debug!("all sentences filtered by length bounds");
        return Candidates::NoneSuitable;
    }

    tracing::debug!(candidates = sentences.len(), "candidates extracted");
    Candidates::Found(sentences)
}
