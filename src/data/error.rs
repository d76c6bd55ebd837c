use std::io;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Load-time errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong while building a [`Catalog`](super::Catalog).
///
/// Lookup misses are not errors; they are `None` from `Catalog::lookup`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A malformed line. `line` is 1-based.
    #[error("line {line}: {reason}")]
    Format { line: u64, reason: FormatReason },
}

impl CatalogError {
    /// The offending line for format errors.
    pub fn line(&self) -> Option<u64> {
        match self {
            CatalogError::Format { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Why a line was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatReason {
    #[error("expected at least 3 fields (name, mass, distance), found {found}")]
    MissingFields { found: usize },

    #[error("{field} '{value}' is not a number")]
    NotANumber { field: &'static str, value: String },

    #[error("invalid text: {0}")]
    Encoding(String),
}
