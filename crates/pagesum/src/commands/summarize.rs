//! Summarize command: extractive summaries of text and markdown files.

use std::collections::HashMap;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use pagesum_core::config::{Config, ConfigSources};
use pagesum_core::scoring::ScoredSentence;
use pagesum_core::{SummaryOptions, SummaryReport, source_for_path, summarize};

use super::read_input_file;

/// Arguments for the `summarize` subcommand.
#[derive(Args, Debug, Default)]
pub struct SummarizeArgs {
    /// Files to summarize (`.md`/`.markdown` are stripped of markup).
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Number of sentences in each summary (at most 10).
    #[arg(long, short = 'n')]
    pub target: Option<usize>,

    /// Size of the top-word table used for keyword scoring.
    #[arg(long)]
    pub top_words: Option<usize>,

    /// Maximum number of candidate sentences to score.
    #[arg(long)]
    pub max_candidates: Option<usize>,

    /// Sentences must be longer than this many characters.
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Sentences must be shorter than this many characters.
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Title to report instead of the one found in the document.
    #[arg(long)]
    pub title: Option<String>,

    /// Show the score breakdown of each selected sentence.
    #[arg(long)]
    pub explain: bool,
}

impl SummarizeArgs {
    fn apply(&self, mut options: SummaryOptions) -> SummaryOptions {
        if let Some(target) = self.target {
            options.target_summary_length = target;
        }
        if let Some(count) = self.top_words {
            options.top_word_count = count;
        }
        if let Some(max) = self.max_candidates {
            options.max_candidate_sentences = max;
        }
        if let Some(min) = self.min_length {
            options.min_sentence_length = min;
        }
        if let Some(max) = self.max_length {
            options.max_sentence_length = max;
        }
        options
    }
}

#[derive(Debug, Serialize)]
struct FileSummary {
    file: Utf8PathBuf,
    source: &'static str,
    title: String,
    word_count: usize,
    character_count: usize,
    substantial: bool,
    #[serde(flatten)]
    report: SummaryReport,
}

/// Summarize each file and print the results.
#[instrument(name = "cmd_summarize", skip_all, fields(files = args.files.len()))]
pub fn cmd_summarize(
    args: SummarizeArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
    cwd: &Utf8Path,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let base_dir = sources.primary_dir().unwrap_or(cwd);
    let options = config
        .summary
        .resolve(base_dir)
        .context("failed to resolve summary settings")?;
    let options = args.apply(options);
    options.validate()?;
    debug!(
        target_length = options.target_summary_length,
        top_words = options.top_word_count,
        "executing summarize command"
    );

    let progress = progress_bar(args.files.len(), global_json)?;
    let mut results = Vec::with_capacity(args.files.len());
    for file in &args.files {
        if let Some(ref bar) = progress {
            bar.set_message(file.to_string());
        }
        results.push(summarize_file(file, args.title.clone(), &options, max_input_bytes)?);
        if let Some(ref bar) = progress {
            bar.inc(1);
        }
    }
    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    if global_json {
        if let [single] = results.as_slice() {
            println!("{}", serde_json::to_string_pretty(single)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        return Ok(());
    }

    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_summary(result, args.explain);
    }
    Ok(())
}

fn summarize_file(
    file: &Utf8Path,
    title: Option<String>,
    options: &SummaryOptions,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<FileSummary> {
    let raw = read_input_file(file, max_input_bytes)?;
    let source = source_for_path(file, title);
    let page = source.extract(&raw);
    let report =
        summarize(&page.content, options).with_context(|| format!("failed to summarize {file}"))?;
    debug!(
        %file,
        source = source.name(),
        words = page.word_count,
        status = %report.status,
        "file summarized"
    );

    Ok(FileSummary {
        file: file.to_path_buf(),
        source: source.name(),
        substantial: page.has_substantial_content(),
        title: page.title,
        word_count: page.word_count,
        character_count: page.character_count,
        report,
    })
}

/// A bar for multi-file runs in text mode; `None` otherwise.
fn progress_bar(files: usize, global_json: bool) -> anyhow::Result<Option<ProgressBar>> {
    if files < 2 || global_json {
        return Ok(None);
    }
    let bar = ProgressBar::new(files as u64);
    bar.set_style(ProgressStyle::with_template(
        "{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}",
    )?);
    Ok(Some(bar))
}

fn print_summary(result: &FileSummary, explain: bool) {
    println!("{} {}", result.title.bold(), format!("({})", result.file).dimmed());

    if result.report.status.is_sentinel() {
        for line in result.report.lines() {
            println!("  {}", line.yellow());
        }
        return;
    }

    let breakdowns: HashMap<&str, &ScoredSentence> = result
        .report
        .scored
        .iter()
        .map(|s| (s.sentence.text.as_str(), s))
        .collect();

    for (i, line) in result.report.lines().iter().enumerate() {
        println!("  {:>2}. {line}", i + 1);
        if explain && let Some(scored) = breakdowns.get(line.as_str()) {
            let b = &scored.breakdown;
            println!(
                "      {} {:.2} = position {:.1} + length {:.1} + keywords {:.1} + extremity {:.1} + numeric {:.1} + discourse {:.1}",
                "score".dimmed(),
                scored.score,
                b.position,
                b.length,
                b.keywords,
                b.extremity,
                b.numeric,
                b.discourse,
            );
        }
    }
}
