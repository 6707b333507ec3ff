//! Error types for pagesum-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// A stopword list file referenced from config could not be read.
    #[error("failed to read stopword file {path}: {source}")]
    StopwordFile {
        /// The resolved path that failed.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when building a summary.
///
/// Degenerate content (too short, unparseable, nothing usable) is not an
/// error; it comes back as a sentinel summary. These variants cover options
/// that make the pipeline meaningless.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SummarizeError {
    /// The summary options contradict each other.
    #[error("invalid summary options: {0}")]
    InvalidOptions(String),
}

/// Result type alias using [`SummarizeError`].
pub type SummarizeResult<T> = Result<T, SummarizeError>;
