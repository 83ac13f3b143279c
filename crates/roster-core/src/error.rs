//! Error types for the conversion pipeline.

use std::fmt;
use std::path::PathBuf;

use roster_ingest::IngestError;
use thiserror::Error;

/// Coarse failure class, for callers that map errors to responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The file extension selects no adapter.
    UnsupportedFormat,
    /// The content could not be loaded.
    ParseFailure,
    /// A file could not be found, read, or written.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UnsupportedFormat => "unsupported format",
            Self::ParseFailure => "parse failure",
            Self::Io => "i/o failure",
        })
    }
}

/// Errors that abort a conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("failed to serialize accepted records: {0}")]
    ArtifactSerialize(#[source] serde_json::Error),

    #[error("failed to write artifact {path}: {source}")]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Ingest(e) if e.is_unsupported_format() => ErrorKind::UnsupportedFormat,
            Self::Ingest(e) if e.is_io() => ErrorKind::Io,
            Self::Ingest(_) => ErrorKind::ParseFailure,
            Self::ArtifactSerialize(_) | Self::ArtifactWrite { .. } => ErrorKind::Io,
        }
    }
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors loading a vocabulary override file.
#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read vocabulary file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid vocabulary file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
