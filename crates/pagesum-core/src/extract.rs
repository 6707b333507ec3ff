//! Text sources: turning a raw document into summarizable page content.
//!
//! The summarizer only ever sees plain text. A [`TextSource`] is whatever
//! knows how to get visible prose out of a particular document format, plus
//! the page metadata that callers pass through untouched.

use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::markdown;
use crate::text::normalize_whitespace;

/// Title used when a document does not provide one.
pub const UNTITLED: &str = "Untitled Page";

/// Extracted text and metadata for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PageContent {
    /// Whitespace-normalized visible text.
    pub content: String,
    /// Document title.
    pub title: String,
    /// Number of whitespace-separated words in `content`.
    pub word_count: usize,
    /// Number of characters in `content`.
    pub character_count: usize,
}

impl PageContent {
    /// Build page content from extracted text and an optional title.
    pub fn new(content: &str, title: Option<String>) -> Self {
        let content = normalize_whitespace(content);
        let word_count = content.split_whitespace().count();
        let character_count = content.chars().count();
        Self {
            content,
            title: title.unwrap_or_else(|| UNTITLED.to_string()),
            word_count,
            character_count,
        }
    }

    /// Whether there is enough text to be worth summarizing
    /// (more than 100 words and 500 characters).
    pub const fn has_substantial_content(&self) -> bool {
        self.word_count > 100 && self.character_count > 500
    }
}

/// Extracts visible text from a raw document.
pub trait TextSource {
    /// Extract the visible prose and metadata from `raw`.
    fn extract(&self, raw: &str) -> PageContent;

    /// Short name for logs and reports.
    fn name(&self) -> &'static str;
}

/// Plain text: the input already is the visible text.
#[derive(Debug, Clone, Default)]
pub struct PlainText {
    title: Option<String>,
}

impl PlainText {
    /// Create a plain text source that reports the given title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}

impl TextSource for PlainText {
    fn extract(&self, raw: &str) -> PageContent {
        PageContent::new(raw, self.title.clone())
    }

    fn name(&self) -> &'static str {
        "text"
    }
}

/// Markdown: prose is stripped of markup; the title comes from frontmatter
/// or headings unless overridden.
#[derive(Debug, Clone, Default)]
pub struct Markdown {
    title: Option<String>,
}

impl Markdown {
    /// Create a markdown source that reports the given title instead of
    /// looking for one in the document.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}

impl TextSource for Markdown {
    fn extract(&self, raw: &str) -> PageContent {
        let title = self.title.clone().or_else(|| markdown::find_title(raw));
        PageContent::new(&markdown::strip_to_prose(raw), title)
    }

    fn name(&self) -> &'static str {
        "markdown"
    }
}

/// Pick a text source by file extension (`md`/`markdown` are markdown).
///
/// `title` overrides any title the source would discover; when it is `None`
/// plain text falls back to the file stem.
pub fn source_for_path(path: &Utf8Path, title: Option<String>) -> Box<dyn TextSource> {
    match path.extension() {
        Some("md" | "markdown") => Box::new(Markdown { title }),
        _ => Box::new(PlainText {
            title: title.or_else(|| path.file_stem().map(str::to_string)),
        }),
    }
}
