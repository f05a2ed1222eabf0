//! Error types for the podcast page generator.
//!
//! Library code returns [`PodcastError`]; the binary wraps it in `anyhow`.

use std::path::PathBuf;

/// A data row broke one of the per-record rules.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("item {label:?} from row {row} is not defined and it must be")]
    MissingRequired { label: &'static str, row: usize },

    #[error("duplicated program with number {programa} at row {row} (first seen at row {first_row})")]
    DuplicateProgram {
        programa: String,
        row: usize,
        first_row: usize,
    },
}

/// Top-level error type; every variant aborts the whole run.
#[derive(Debug, thiserror::Error)]
pub enum PodcastError {
    /// Header row does not cover every canonical column.
    #[error("header missing items: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("audio file does not exist for program {programa}: {url}")]
    AudioUnavailable { programa: String, url: String },

    #[error("not a valid input file: {}", .0.display())]
    InvalidInput(PathBuf),

    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PodcastError>;

impl PodcastError {
    /// Wrap a `std::io::Error` with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
