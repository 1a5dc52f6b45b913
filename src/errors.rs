// src/errors.rs

//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("embedded resource not found: {name}")]
    ResourceNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("could not write payload to {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not start '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed waiting for '{program}': {source}")]
    WaitFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    /// Everything except a missing resource happens after the temp file may
    /// exist, so it is reported with the runtime hint and followed by cleanup.
    pub fn is_execution_failure(&self) -> bool {
        !matches!(self, LaunchError::ResourceNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;
