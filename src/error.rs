//! Error type shared by the library modules.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, extracting or post-processing tables.
///
/// Per-row shape problems are not errors: they are reported as
/// [`RowMismatch`](crate::table::RowMismatch) diagnostics and the row is
/// skipped.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("invalid tag name {0:?}")]
    InvalidTag(String),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("column {column:?} row {row}: cannot read {value:?} as {kind}")]
    Coerce {
        column: String,
        row: usize,
        value: String,
        kind: String,
    },

    #[error("unknown column kind {0:?}")]
    UnknownKind(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
