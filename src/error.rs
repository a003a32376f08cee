//! Error types for launch-at-login.
//!
//! Resolution failures are returned synchronously from the constructor.
//! Backend failures only ever come back from the awaited operations.

use crate::platform::Os;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Failed to read options from {path:?}")]
    ReadOptions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Failure reported by a [`LaunchBackend`](crate::backend::LaunchBackend).
#[derive(Debug, Error)]
pub enum BackendError {
    /// The selected variant targets a different OS than this build.
    #[error("{0} login entries cannot be managed from this build")]
    Unavailable(Os),

    #[error("Auto-launch error: {0}")]
    AutoLaunch(#[from] auto_launch::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Backend task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Free-form failure for backends supplied by the host application.
    #[error("{0}")]
    Other(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
