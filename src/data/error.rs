use std::path::PathBuf;

use thiserror::Error;

/// Why a catalogue file could not be turned into a [`BookTable`].
///
/// [`BookTable`]: super::model::BookTable
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("expected a top-level array of book records")]
    NotAnArray,
    #[error("record {row} is not an object")]
    NotAnObject { row: usize },
    #[error("record {row}: {reason}")]
    InvalidRecord { row: usize, reason: String },
    #[error("file contains no book records")]
    Empty,
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}
