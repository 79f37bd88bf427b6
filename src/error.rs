//! Error types for directory listing and rendering

use std::io;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while listing or rendering a subtree
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("path not found: {path}")]
    PathNotFound { path: String },

    #[error("permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("not a directory: {path}")]
    NotADirectory { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl TreeError {
    /// Map an OS error from a listing call onto the crate taxonomy,
    /// keeping the offending path for the message.
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        let path = path.display().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => TreeError::PathNotFound { path },
            io::ErrorKind::PermissionDenied => TreeError::PermissionDenied { path },
            io::ErrorKind::NotADirectory => TreeError::NotADirectory { path },
            _ => TreeError::Io(err),
        }
    }
}

/// Result type alias for listing and rendering operations
pub type Result<T> = std::result::Result<T, TreeError>;
