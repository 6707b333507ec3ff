//! Heuristic sentence scoring.
//!
//! Each candidate gets an additive score from six independent signals:
//!
//! | Signal | Contribution |
//! |---|---|
//! | position | `max(0, 10 - index) * 0.1` |
//! | length in words | `+2` for 10..=25, else `+1` for 6..=35 |
//! | keyword overlap | `+0.5` per distinct top word (longer than 3 chars) |
//! | extremity | `-1` when shorter than 30 or longer than 150 chars |
//! | numeric content | `+0.5` when any digit appears |
//! | discourse marker | `+0.3` for because, therefore, however, ... |
//!
//! A score depends only on the sentence itself, its candidate index and the
//! document's top-word set.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::frequency::MIN_INFORMATIVE_LEN;
use crate::text::{self, Sentence};
use crate::word_lists::DISCOURSE_MARKERS;

const POSITION_WINDOW: usize = 10;
const POSITION_WEIGHT: f64 = 0.1;
const KEYWORD_WEIGHT: f64 = 0.5;
const NUMERIC_BONUS: f64 = 0.5;
const DISCOURSE_BONUS: f64 = 0.3;
const EXTREMITY_PENALTY: f64 = -1.0;
const SHORT_SENTENCE_CHARS: usize = 30;
const LONG_SENTENCE_CHARS: usize = 150;

static DISCOURSE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // ASCII word boundaries, matching the word tokenizer.
    Regex::new(&format!(
        r"(?i)(?-u:\b)(?:{})(?-u:\b)",
        DISCOURSE_MARKERS.join("|")
    ))
    .expect("valid regex")
});

/// Per-signal contributions to a sentence score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreBreakdown {
    /// Bonus for appearing early in the document.
    pub position: f64,
    /// Bonus for a moderate word count.
    pub length: f64,
    /// Bonus for containing the document's frequent words.
    pub keywords: f64,
    /// Penalty for very short or very long sentences (zero or negative).
    pub extremity: f64,
    /// Bonus for containing digits.
    pub numeric: f64,
    /// Bonus for containing a discourse marker.
    pub discourse: f64,
}

impl ScoreBreakdown {
    /// Sum of all signals.
    pub fn total(&self) -> f64 {
        self.position + self.length + self.keywords + self.extremity + self.numeric + self.discourse
    }
}

/// A candidate sentence with its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScoredSentence {
    /// The candidate.
    pub sentence: Sentence,
    /// Total score; may be negative.
    pub score: f64,
    /// How the score was reached.
    pub breakdown: ScoreBreakdown,
}

/// Score a single candidate against the document's top words.
pub fn score_sentence(sentence: &Sentence, top_words: &HashSet<String>) -> ScoredSentence {
    let breakdown = ScoreBreakdown {
        position: position_bonus(sentence.index),
        length: length_bonus(sentence.word_count),
        keywords: keyword_bonus(&sentence.text, top_words),
        extremity: extremity_penalty(sentence.length),
        numeric: numeric_bonus(&sentence.text),
        discourse: discourse_bonus(&sentence.text),
    };
    ScoredSentence {
        sentence: sentence.clone(),
        score: breakdown.total(),
        breakdown,
    }
}

/// Score every candidate, preserving candidate order.
#[tracing::instrument(skip_all, fields(candidates = sentences.len(), top_words = top_words.len()))]
pub fn score_sentences(sentences: &[Sentence], top_words: &HashSet<String>) -> Vec<ScoredSentence> {
    sentences
        .iter()
        .map(|s| score_sentence(s, top_words))
        .collect()
}

fn position_bonus(index: usize) -> f64 {
    POSITION_WINDOW.saturating_sub(index) as f64 * POSITION_WEIGHT
}

/// The 10..=25 range takes precedence over the wider 6..=35 range.
const fn length_bonus(word_count: usize) -> f64 {
    match word_count {
        10..=25 => 2.0,
        6..=35 => 1.0,
        _ => 0.0,
    }
}

fn keyword_bonus(text: &str, top_words: &HashSet<String>) -> f64 {
    let hits: HashSet<String> = text::words(text)
        .into_iter()
        .filter(|w| w.chars().count() > MIN_INFORMATIVE_LEN && top_words.contains(w))
        .collect();
    hits.len() as f64 * KEYWORD_WEIGHT
}

const fn extremity_penalty(length: usize) -> f64 {
    if length < SHORT_SENTENCE_CHARS || length > LONG_SENTENCE_CHARS {
        EXTREMITY_PENALTY
    } else {
        0.0
    }
}

fn numeric_bonus(text: &str) -> f64 {
    if text.chars().any(|c| c.is_ascii_digit()) {
        NUMERIC_BONUS
    } else {
        0.0
    }
}

fn discourse_bonus(text: &str) -> f64 {
    if DISCOURSE_PATTERN.is_match(text) {
        DISCOURSE_BONUS
    } else {
        0.0
    }
}
