use std::path::PathBuf;

use loanbias_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("header mismatch: expected [{expected}], found [{found}]")]
    HeaderMismatch { expected: String, found: String },

    #[error("line {line}: {source}")]
    Record {
        line: u64,
        #[source]
        source: ModelError,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The record-level model error, if this failure came from a row.
    pub fn model_error(&self) -> Option<&ModelError> {
        match self {
            Self::Record { source, .. } | Self::Model(source) => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
