use std::path::Path;

use thiserror::Error;

/// Errors raised while loading or applying model artifacts.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read artifact {path}: {source}")]
    ArtifactIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse artifact {path}: {source}")]
    ArtifactParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid artifact {path}: {reason}")]
    ArtifactInvalid { path: String, reason: String },

    #[error("unknown model choice: {0:?}")]
    UnknownModel(String),

    #[error("classifier {path} expects {expected} features but the vectorizer produces {found}")]
    DimensionMismatch {
        path: String,
        expected: usize,
        found: usize,
    },

    #[error("classifier {path} predicted sentiment code {code}, which maps to no label")]
    UnmappedLabel { path: String, code: i8 },
}

impl ModelError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ModelError::ArtifactIo {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn parse(path: &Path, source: serde_json::Error) -> Self {
        ModelError::ArtifactParse {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn invalid(path: &Path, reason: impl Into<String>) -> Self {
        ModelError::ArtifactInvalid {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }
}
