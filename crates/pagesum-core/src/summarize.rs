//! The extractive summarization pipeline.
//!
//! `raw text → candidates → top words → scores → selection → assembly`.
//!
//! Every call is a pure function of its input and options. Degenerate input
//! never produces an error: it short-circuits into a one-line sentinel
//! summary whose [`SummaryStatus`] tells callers what happened.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SummarizeResult;
use crate::frequency::{WordCount, WordFrequencyTable};
use crate::options::SummaryOptions;
use crate::scoring::{self, ScoredSentence};
use crate::selection;
use crate::text::{self, Candidates};

/// Sentinel line for text below the minimum length.
pub const TOO_SHORT_MESSAGE: &str = "Page content is too short to generate a meaningful summary.";
/// Sentinel line for text without terminal punctuation.
pub const UNPARSEABLE_MESSAGE: &str = "Unable to parse page content into sentences.";
/// Sentinel line when every sentence fails the length bounds.
pub const NO_SUITABLE_MESSAGE: &str = "No suitable sentences found for summarization.";

/// How a summary was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStatus {
    /// Sentences were scored and selected.
    Summarized,
    /// The text was too short to summarize.
    TooShort,
    /// The text had no terminal punctuation.
    Unparseable,
    /// No sentence survived length filtering.
    NoSuitableSentences,
}

impl SummaryStatus {
    /// Whether this status is a sentinel rather than a real summary.
    pub const fn is_sentinel(self) -> bool {
        !matches!(self, Self::Summarized)
    }

    /// The explanatory line for sentinel statuses.
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Summarized => None,
            Self::TooShort => Some(TOO_SHORT_MESSAGE),
            Self::Unparseable => Some(UNPARSEABLE_MESSAGE),
            Self::NoSuitableSentences => Some(NO_SUITABLE_MESSAGE),
        }
    }

    /// Returns the status as a snake_case string slice.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summarized => "summarized",
            Self::TooShort => "too_short",
            Self::Unparseable => "unparseable",
            Self::NoSuitableSentences => "no_suitable_sentences",
        }
    }
}

impl std::fmt::Display for SummaryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of summarizing one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SummaryReport {
    /// How the summary was produced.
    pub status: SummaryStatus,
    /// Summary lines in document order (one sentinel line for degenerate input).
    pub sentences: Vec<String>,
    /// Number of candidate sentences that were scored.
    pub candidate_count: usize,
    /// The document's top words, most frequent first.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub top_words: Vec<WordCount>,
    /// Score details for the sentences chosen by score, in document order.
    ///
    /// Padding sentences appended during assembly have no entry here.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub scored: Vec<ScoredSentence>,
}

impl SummaryReport {
    fn sentinel(status: SummaryStatus) -> Self {
        Self {
            status,
            sentences: status.message().map(str::to_string).into_iter().collect(),
            candidate_count: 0,
            top_words: Vec::new(),
            scored: Vec::new(),
        }
    }

    /// The summary lines.
    pub fn lines(&self) -> &[String] {
        &self.sentences
    }

    /// Consume the report, keeping only the summary lines.
    pub fn into_lines(self) -> Vec<String> {
        self.sentences
    }
}

/// Summarize `text` with the given options.
///
/// # Errors
///
/// Returns [`SummarizeError::InvalidOptions`](crate::error::SummarizeError::InvalidOptions)
/// when the options cannot produce a summary. Content problems are reported
/// through [`SummaryStatus`], never as errors.
#[tracing::instrument(skip_all, fields(text_len = text.len(), target = options.target_summary_length))]
pub fn summarize(text: &str, options: &SummaryOptions) -> SummarizeResult<SummaryReport> {
    options.validate()?;

    let candidates = match text::extract_candidates(text, options) {
        Candidates::Found(found) => found,
        Candidates::TooShort => return Ok(SummaryReport::sentinel(SummaryStatus::TooShort)),
        Candidates::Unparseable => return Ok(SummaryReport::sentinel(SummaryStatus::Unparseable)),
        Candidates::NoneSuitable => {
            return Ok(SummaryReport::sentinel(SummaryStatus::NoSuitableSentences));
        }
    };

    let cleaned = text::normalize_whitespace(text);
    let top_words = WordFrequencyTable::build(&cleaned, &options.stopwords)
        .top(options.top_word_count);
    let top_set: HashSet<String> = top_words.iter().map(|w| w.word.clone()).collect();

    let scored = scoring::score_sentences(&candidates, &top_set);
    let target = options.effective_target();
    let selected = selection::select(&scored, target);
    let sentences = selection::assemble(&selected, &candidates, target);

    tracing::debug!(
        candidates = candidates.len(),
        selected = selected.len(),
        lines = sentences.len(),
        "summary assembled"
    );

    Ok(SummaryReport {
        status: SummaryStatus::Summarized,
        sentences,
        candidate_count: candidates.len(),
        top_words,
        scored: selected,
    })
}

/// Summarize `text` with default options, returning only the lines.
pub fn summarize_default(text: &str) -> Vec<String> {
    summarize(text, &SummaryOptions::default())
        .map(SummaryReport::into_lines)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Thirty sentences of 40-180 chars; five carry numerals or discourse markers.
    ///
    /// Filler sentences use only words of three letters or fewer, so they
    /// never contribute to the top-word table.
    fn article() -> String {
        const CRITTERS: [&str; 30] = [
            "ant", "bee", "cat", "dog", "eel", "fox", "gnu", "hen", "yak", "owl", "pig", "ram",
            "emu", "cod", "elk", "koi", "asp", "bat", "cow", "doe", "ewe", "hog", "jay", "kid",
            "ape", "boa", "cub", "gar", "roe", "auk",
        ];
        let mut sentences = Vec::new();
        for (i, critter) in CRITTERS.iter().enumerate() {
            let s = match i {
                4 => "The committee approved 14 new stations along the northern rail corridor this spring.".to_string(),
                9 => "However, planners warned that rail ridership forecasts remain uncertain for the region.".to_string(),
                15 => "Ticket revenue rose 8 percent because commuters returned to the rail network in force.".to_string(),
                21 => "Moreover, the 3 station upgrades include level boarding and covered bicycle parking.".to_string(),
                27 => "Construction crews will therefore finish the 2026 phase ahead of the original plan.".to_string(),
                _ => format!("We sat by the bay and ate a red fig on the day the {critter} got wet."),
            };
            sentences.push(s);
        }
        sentences.join(" ")
    }

    fn is_in_source_order(text: &str, lines: &[String]) -> bool {
        let positions: Vec<usize> = lines
            .iter()
            .map(|l| text.find(l.as_str()).expect("line comes from the text"))
            .collect();
        positions.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn short_input_is_sentinel() {
        let report = summarize(&"z".repeat(99), &SummaryOptions::default()).unwrap();
        assert_eq!(report.status, SummaryStatus::TooShort);
        assert_eq!(report.sentences, vec![TOO_SHORT_MESSAGE]);
    }

    #[test]
    fn unpunctuated_input_is_sentinel() {
        let text = vec!["lorem"; 150].join(" ");
        let report = summarize(&text, &SummaryOptions::default()).unwrap();
        assert_eq!(report.status, SummaryStatus::Unparseable);
        assert_eq!(report.sentences, vec![UNPARSEABLE_MESSAGE]);
    }

    #[test]
    fn uniformly_short_sentences_are_sentinel() {
        let text = vec!["Short one."; 60].join(" ");
        let report = summarize(&text, &SummaryOptions::default()).unwrap();
        assert_eq!(report.status, SummaryStatus::NoSuitableSentences);
        assert_eq!(report.sentences, vec![NO_SUITABLE_MESSAGE]);
        assert!(report.status.is_sentinel());
    }

    #[test]
    fn article_yields_ten_lines_in_source_order() {
        let text = article();
        let report = summarize(&text, &SummaryOptions::default()).unwrap();
        assert_eq!(report.status, SummaryStatus::Summarized);
        assert_eq!(report.sentences.len(), 10);
        assert!(is_in_source_order(&text, &report.sentences));
    }

    #[test]
    fn article_favors_numeral_and_marker_sentences() {
        let report = summarize(&article(), &SummaryOptions::default()).unwrap();
        for needle in ["14 new stations", "However, planners", "rose 8 percent", "Moreover,", "2026 phase"] {
            assert!(
                report.sentences.iter().any(|s| s.contains(needle)),
                "expected a sentence containing {needle:?}"
            );
        }
    }

    #[test]
    fn summary_has_no_duplicates() {
        let text = article();
        let report = summarize(&text, &SummaryOptions::default()).unwrap();
        let unique: HashSet<&String> = report.sentences.iter().collect();
        assert_eq!(unique.len(), report.sentences.len());
    }

    #[test]
    fn repeated_sentences_pad_without_duplicates() {
        let text = vec!["This sentence repeats itself over and over again."; 20].join(" ");
        let report = summarize(&text, &SummaryOptions::default()).unwrap();
        assert_eq!(
            report.sentences,
            vec!["This sentence repeats itself over and over again."]
        );
    }

    #[test]
    fn fewer_candidates_than_target() {
        let text = "The first real sentence is right here for you. \
                    The second real sentence follows it closely now. \
                    The third real sentence ends this small document.";
        let report = summarize(text, &SummaryOptions::default()).unwrap();
        assert_eq!(report.sentences.len(), 3);
        assert_eq!(report.candidate_count, 3);
        assert!(is_in_source_order(text, &report.sentences));
    }

    #[test]
    fn target_bounds_summary_size() {
        let opts = SummaryOptions::default().with_target(3);
        let report = summarize(&article(), &opts).unwrap();
        assert_eq!(report.sentences.len(), 3);
        assert_eq!(report.scored.len(), 3);
    }

    #[test]
    fn target_above_ten_is_capped() {
        let opts = SummaryOptions::default().with_target(15);
        let report = summarize(&article(), &opts).unwrap();
        assert_eq!(report.sentences.len(), 10);
        assert_eq!(report.scored.len(), 10);
        assert!(is_in_source_order(&article(), &report.sentences));
    }

    #[test]
    fn output_is_deterministic() {
        let text = article();
        let opts = SummaryOptions::default();
        assert_eq!(summarize(&text, &opts).unwrap(), summarize(&text, &opts).unwrap());
    }

    #[test]
    fn invalid_options_error() {
        let opts = SummaryOptions::default().with_target(0);
        assert!(summarize(&article(), &opts).is_err());
    }

    #[test]
    fn top_words_are_reported() {
        let report = summarize(&article(), &SummaryOptions::default()).unwrap();
        assert!(!report.top_words.is_empty());
        assert!(report.top_words.len() <= 20);
        assert_eq!(report.top_words[0].word, "rail");
        assert_eq!(report.top_words[0].count, 3);
    }

    #[test]
    fn sentinel_report_serializes_compactly() {
        let report = summarize("tiny", &SummaryOptions::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "too_short");
        assert_eq!(json["candidate_count"], 0);
        assert!(json.get("top_words").is_none());
        assert!(json.get("scored").is_none());
    }

    #[test]
    fn default_lines_helper() {
        assert_eq!(summarize_default("tiny"), vec![TOO_SHORT_MESSAGE]);
    }
}
