//! Markdown processing utilities.
//!
//! Uses pulldown-cmark for proper CommonMark parsing rather than regex-based
//! stripping, so code blocks, tables and reference links never leak into the
//! text that gets split into sentences.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown formatting, returning plain prose text.
///
/// Removes code blocks, inline code, HTML, YAML frontmatter, headings and
/// image alt text. Keeps link text, blockquotes, list items and emphasized
/// text without markers. Block boundaries become single spaces.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let (_, body) = split_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(body, options);

    let mut result = String::with_capacity(body.len() / 2);
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Image { .. }) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Image) => {
                skip_depth = skip_depth.saturating_sub(1);
            }
            Event::Text(t) if skip_depth == 0 => {
                result.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => {
                result.push(' ');
            }
            Event::End(TagEnd::Paragraph | TagEnd::Item | TagEnd::TableCell)
                if skip_depth == 0 =>
            {
                result.push(' ');
            }
            _ => {}
        }
    }

    result
}

/// Find a document title.
///
/// Prefers a `title:` key in YAML frontmatter, then the first level-1
/// heading, then the first heading of any level.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn find_title(text: &str) -> Option<String> {
    let (frontmatter, body) = split_frontmatter(text);
    if let Some(title) = frontmatter.and_then(frontmatter_title) {
        return Some(title);
    }

    let headings = extract_headings(body);
    headings
        .iter()
        .find(|(level, _)| *level == 1)
        .or_else(|| headings.first())
        .map(|(_, text)| text.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Extract headings as `(level, text)` pairs where level is 1-6.
fn extract_headings(body: &str) -> Vec<(u8, String)> {
    let parser = Parser::new_ext(body, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);

    let mut headings = Vec::new();
    let mut in_heading: Option<u8> = None;
    let mut heading_text = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                in_heading = Some(level as u8);
                heading_text.clear();
            }
            Event::Text(t) | Event::Code(t) if in_heading.is_some() => {
                heading_text.push_str(&t);
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(level) = in_heading.take() {
                    headings.push((level, heading_text.clone()));
                }
            }
            _ => {}
        }
    }

    headings
}

/// Split off YAML frontmatter delimited by `---` lines.
///
/// Returns the frontmatter body (without delimiters) if present, and the
/// remaining document.
fn split_frontmatter(text: &str) -> (Option<&str>, &str) {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return (None, text);
    };
    let Some(close_pos) = after_opening.find("\n---") else {
        return (None, text);
    };

    let frontmatter = &after_opening[..close_pos];
    let remainder = &after_opening[close_pos + 4..];
    (
        Some(frontmatter),
        remainder.strip_prefix('\n').unwrap_or(remainder),
    )
}

fn frontmatter_title(frontmatter: &str) -> Option<String> {
    frontmatter.lines().find_map(|line| {
        let value = line.strip_prefix("title:")?.trim();
        let value = value.trim_matches(|c| c == '"' || c == '\'').trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}
