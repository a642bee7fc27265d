//! Error type for the artifact and configuration paths.
//!
//! Contract violations (non-positive shape extents, mismatched layer sizes,
//! the raw weight loader) panic instead; only resource failures end up here.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PerceptronError {
    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),

    /// File or directory could not be created, opened or written.
    #[error("could not access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PNG encoding failed.
    #[error("could not encode image {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PerceptronError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PerceptronError>;
