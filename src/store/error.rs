//! Storage errors.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while reading or writing a [`PreferenceStore`](super::PreferenceStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("Failed to access preference store at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The stored entries could not be encoded.
    #[error("Failed to encode preference store: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
