//! Error types for bizcard.
//!
//! This module defines the error types returned at the edges of the crate:
//! loading configuration and profile data, rendering the card view and
//! writing exported artifacts. Share and clipboard failures never surface
//! here; the share coordinator recovers from them locally.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for bizcard operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Profile Errors ===
    /// Failed to read the profile data file.
    #[error("failed to read profile at {path}: {source}")]
    ProfileRead {
        /// Path to the profile file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The profile data file is not valid JSON.
    #[error("failed to parse profile at {path}: {source}")]
    ProfileParse {
        /// Path to the profile file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    // === Rendering Errors ===
    /// A view template failed to render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// The page address could not be encoded as a QR code.
    #[error("failed to encode QR code: {0}")]
    QrEncode(String),

    // === I/O Errors ===
    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an exported artifact.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        /// Path of the artifact.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for bizcard operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Create a new QR encoding error.
    #[must_use]
    pub fn qr_encode(message: impl Into<String>) -> Self {
        Self::QrEncode(message.into())
    }
}
