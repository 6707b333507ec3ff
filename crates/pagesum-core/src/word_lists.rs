//! Curated word lists for sentence scoring.
//!
//! Words of three characters or fewer never reach the stopword check, so the
//! short entries below are inert.

/// Default English stopwords excluded from word frequency analysis.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "this", "that", "with", "have", "will", "from", "they", "been", "said", "each", "which",
    "their", "time", "more", "very", "what", "know", "just", "first", "into", "over", "think",
    "also", "your", "work", "life", "only", "can", "still", "should", "after", "being", "now",
    "made", "before", "here", "through", "when", "where", "much", "some", "these", "many",
    "would", "there",
];

/// Discourse markers that signal reasoning or elaboration.
pub const DISCOURSE_MARKERS: &[&str] = &[
    "because",
    "therefore",
    "however",
    "moreover",
    "furthermore",
    "additionally",
];
