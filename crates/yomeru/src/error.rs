//! The error type of yomeru.

use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A curriculum or text file could not be read.
    #[error("Failed to read '{}'", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The learner's known kanji could not be retrieved.
    #[error("Failed to load known kanji: {message}")]
    CollaboratorFailure {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
    #[error("Invalid levels '{0}', expected e.g. '1,2,5-7'")]
    InvalidLevels(String),
    #[error("Failed to serialize report")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub fn input_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::InputUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn collaborator_from<E>(message: impl ToString, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::CollaboratorFailure {
            message: message.to_string(),
            source: Some(Box::new(source)),
        }
    }
}
