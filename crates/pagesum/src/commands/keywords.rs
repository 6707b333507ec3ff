//! Keywords command: the top-word table that drives keyword scoring.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use pagesum_core::config::{Config, ConfigSources};
use pagesum_core::{WordCount, source_for_path, top_words};

use super::read_input_file;

/// Arguments for the `keywords` subcommand.
#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Number of words to show (defaults to the configured top-word count).
    #[arg(long, short = 'n')]
    pub count: Option<usize>,
}

#[derive(Serialize)]
struct KeywordsReport {
    file: Utf8PathBuf,
    title: String,
    words: Vec<WordCount>,
}

/// Print the most frequent informative words of a file.
#[instrument(name = "cmd_keywords", skip_all, fields(file = %args.file))]
pub fn cmd_keywords(
    args: KeywordsArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
    cwd: &Utf8Path,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let options = config
        .summary
        .resolve(sources.primary_dir().unwrap_or(cwd))
        .context("failed to resolve summary settings")?;
    let count = args.count.unwrap_or(options.top_word_count);
    debug!(count, "executing keywords command");

    let raw = read_input_file(&args.file, max_input_bytes)?;
    let page = source_for_path(&args.file, None).extract(&raw);
    let words = top_words(&page.content, count, &options.stopwords);

    if global_json {
        let report = KeywordsReport {
            file: args.file,
            title: page.title,
            words,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if words.is_empty() {
        println!("{}", "No informative words found.".yellow());
    } else {
        let width = words.iter().map(|w| w.word.len()).max().unwrap_or(0);
        for entry in &words {
            println!("{:<width$}  {}", entry.word, entry.count.to_string().cyan());
        }
    }

    Ok(())
}
