//! Error types shared by the scanner, the deleters and the CLI.
//!
//! Every variant is fatal: the binary logs it and exits with status 1.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PruneError>;

#[derive(Debug, Error)]
pub enum PruneError {
    #[error("could not resolve input path {path:?}: {source}")]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("given input path {path:?} is required to point to a directory")]
    NotADirectory { path: PathBuf },

    #[error("reading dir {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("stating file {path:?}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("deleting file {path:?}: {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serializing summary: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PruneError {
    /// True for argument errors raised before any directory was scanned.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::InvalidPath { .. } | Self::NotADirectory { .. })
    }
}
