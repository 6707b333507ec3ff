//! Info command implementation

use anyhow::Context;
use camino::Utf8Path;
use clap::Args;
use owo_colors::OwoColorize;
use pagesum_core::config::{Config, ConfigSources};
use pagesum_core::options::SummaryOptions;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    summary: SummaryInfo,
}

/// Effective summary settings after config overrides.
#[derive(Serialize)]
struct SummaryInfo {
    target_length: usize,
    top_words: usize,
    max_candidates: usize,
    min_sentence_length: usize,
    max_sentence_length: usize,
    stopword_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    stopwords_file: Option<String>,
}

impl SummaryInfo {
    fn new(options: &SummaryOptions, stopwords_file: Option<String>) -> Self {
        Self {
            target_length: options.target_summary_length,
            top_words: options.top_word_count,
            max_candidates: options.max_candidate_sentences,
            min_sentence_length: options.min_sentence_length,
            max_sentence_length: options.max_sentence_length,
            stopword_count: options.stopwords.len(),
            stopwords_file,
        }
    }
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources, cwd: &Utf8Path) -> anyhow::Result<Self> {
        let options = config
            .summary
            .resolve(sources.primary_dir().unwrap_or(cwd))
            .context("failed to resolve summary settings")?;
        Ok(Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            max_input_bytes: config.input_limit(),
            summary: SummaryInfo::new(
                &options,
                config.summary.stopwords_file.as_ref().map(|p| p.to_string()),
            ),
        })
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
/// * `cwd` - Directory relative stopword files resolve against without a config file
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
    cwd: &Utf8Path,
) -> anyhow::Result<()> {
    let info = PackageInfo::new();

    debug!(json_output = global_json, "executing info command");

    let config_info = ConfigInfo::from_config(config, sources, cwd)?;
    let full_info = FullInfo {
        package: info,
        config: config_info,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
    } else {
        println!(
            "{} {}",
            full_info.package.name.bold(),
            full_info.package.version.green()
        );
        if !full_info.package.description.is_empty() {
            println!("{}", full_info.package.description);
        }
        if !full_info.package.license.is_empty() {
            println!("{}: {}", "License".dimmed(), full_info.package.license);
        }
        if !full_info.package.repository.is_empty() {
            println!(
                "{}: {}",
                "Repository".dimmed(),
                full_info.package.repository.cyan()
            );
        }
        if !full_info.package.homepage.is_empty() {
            println!(
                "{}: {}",
                "Homepage".dimmed(),
                full_info.package.homepage.cyan()
            );
        }

        // Configuration section
        println!();
        println!("{}", "Configuration".bold().underline());
        if let Some(ref path) = full_info.config.config_file {
            println!("{}: {}", "Config file".dimmed(), path.cyan());
        } else {
            println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
        }
        println!("{}: {}", "Log level".dimmed(), full_info.config.log_level);
        if let Some(ref dir) = full_info.config.log_dir {
            println!("{}: {}", "Log directory".dimmed(), dir);
        }

        match full_info.config.max_input_bytes {
            Some(max) => println!("{}: {} bytes", "Input limit".dimmed(), max),
            None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
        }

        let summary = &full_info.config.summary;
        println!();
        println!("{}", "Summary".bold().underline());
        print_setting("Target length", summary.target_length);
        print_setting("Top words", summary.top_words);
        print_setting("Max candidates", summary.max_candidates);
        println!(
            "{}: {} < chars < {}",
            "Sentence bounds".dimmed(),
            summary.min_sentence_length,
            summary.max_sentence_length
        );
        print_setting("Stopwords", summary.stopword_count);
        if let Some(ref file) = summary.stopwords_file {
            println!("{}: {}", "Stopword file".dimmed(), file.cyan());
        }
    }

    Ok(())
}

fn print_setting<T: std::fmt::Display>(label: &str, value: T) {
    println!("{}: {}", label.dimmed(), value);
}
