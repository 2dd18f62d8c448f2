// SPDX-License-Identifier: MPL-2.0

//! Error types for the settings tools
//!
//! Dialog and storage operations degrade to safe defaults instead of
//! failing; these errors only surface at the command line.

use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// Configuration errors
    Config(String),
    /// Storage/filesystem errors
    Storage(String),
    /// Resolution text that is not `WIDTHxHEIGHT` with non-zero sides
    InvalidResolution(String),
    /// Generic error with message
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::InvalidResolution(value) => {
                write!(f, "Invalid resolution: {} (expected WIDTHxHEIGHT)", value)
            }
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Other(msg.to_string())
    }
}

// Conversions for I/O errors
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<cosmic::iced::Error> for AppError {
    fn from(err: cosmic::iced::Error) -> Self {
        AppError::Other(err.to_string())
    }
}
