//! Global error handling for exporta
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;
use thiserror::Error;

use crate::git::GitError;

/// Global error type for exporta operations
#[derive(Error, Debug)]
pub enum ExportaError {
    /// Git-related errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Scanner errors
    #[error("Scanner error: {0}")]
    Scanner(String),

    /// Writer errors
    #[error("Writer error: {0}")]
    Writer(String),

    /// Path not found
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Unexpected error
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Specialized Result type for exporta operations
pub type Result<T> = std::result::Result<T, ExportaError>;

/// Creates an ExportaError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::ExportaError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

/// Extension trait for adding context to errors
pub trait ResultExt<T, E> {
    /// Add additional context to an error
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E: std::error::Error + 'static> ResultExt<T, E> for std::result::Result<T, E> {
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|e| {
            let context = f();
            ExportaError::Unexpected(format!("{}: {}", context, e))
        })
    }
}

// Allow converting ExportaError to io::Error so the binaries can stay io::Result
impl From<ExportaError> for io::Error {
    fn from(err: ExportaError) -> Self {
        io::Error::new(io::ErrorKind::Other, err.to_string())
    }
}
