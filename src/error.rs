//! Error types for roomjoin operations.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Error type covering every failure mode of the load, combine, export pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// Input path missing or unreadable, or output path unwritable.
    #[error("cannot access {path}: {source}")]
    FileAccess {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file is not valid JSON or not an array of the expected shape.
    #[error("malformed input in {path}: {source}")]
    MalformedInput {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Requested output format is not one of the supported set.
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias using the crate Error type.
pub type Result<T> = std::result::Result<T, Error>;
