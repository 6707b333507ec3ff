//! Core library for pagesum.
//!
//! This crate turns the visible text of a document into a short extractive
//! summary: a handful of sentences lifted verbatim from the text, chosen by a
//! deterministic score and returned in the order they appear.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//! - [`extract`] - Text sources and page content
//! - [`text`] - Whitespace cleanup and candidate sentence extraction
//! - [`frequency`] - Word frequency table and top words
//! - [`scoring`] - Sentence scoring signals
//! - [`selection`] - Picking and assembling summary sentences
//! - [`summarize`] - The full pipeline
//!
//! # Quick Start
//!
//! ```
//! use pagesum_core::{SummaryOptions, summarize};
//!
//! let report = summarize("Too short.", &SummaryOptions::default()).unwrap();
//! assert!(report.status.is_sentinel());
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod extract;
pub mod frequency;
pub mod markdown;
pub mod options;
pub mod scoring;
pub mod selection;
pub mod summarize;
pub mod text;
pub mod word_lists;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel, SummaryConfig};
pub use error::{ConfigError, ConfigResult, SummarizeError, SummarizeResult};
pub use extract::{Markdown, PageContent, PlainText, TextSource, source_for_path};
pub use frequency::{WordCount, WordFrequencyTable, top_words};
pub use options::SummaryOptions;
pub use scoring::{ScoreBreakdown, ScoredSentence};
pub use summarize::{SummaryReport, SummaryStatus, summarize, summarize_default};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
