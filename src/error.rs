//! # Error Types
//!
//! This module defines error types used throughout the sello library.

use thiserror::Error;

/// Main error type for sello operations
#[derive(Debug, Error)]
pub enum SelloError {
    /// Content cannot be encoded at any supported symbol version
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Unknown shape or level name, malformed color, degenerate geometry
    #[error("Invalid style: {0}")]
    InvalidStyle(String),

    /// Logo file missing, unreadable or not a decodable image
    #[error("Logo error: {0}")]
    LogoDecode(String),

    /// Image encoding or file format problem while saving
    #[error("Save error: {0}")]
    Save(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
