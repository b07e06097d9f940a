// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CostarError {
    #[error("I/O error: {source} (path: {})", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("self-loop rejected: actor {actor} cannot co-star with itself")]
    SelfLoop { actor: String },

    #[error("actor {id} not found in the dataset")]
    ActorNotFound { id: String },

    #[error("Generic error: {0}")]
    Other(String),
}

impl CostarError {
    /// True for the invariant-violation kind the builder skips per
    /// occurrence instead of aborting the batch.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        matches!(self, CostarError::SelfLoop { .. })
    }
}

pub type Result<T> = std::result::Result<T, CostarError>;

// Allow `?` on std::io::Error by converting to CostarError::Io with unknown path.
impl From<std::io::Error> for CostarError {
    fn from(source: std::io::Error) -> Self {
        CostarError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
