//! Error types for level data loading.

use thiserror::Error;

/// Errors that can occur when loading level data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// Level files must be named `level_<n>.ron` with n >= 1.
    #[error("Level file '{0}' is not named level_<n>.ron")]
    InvalidLevelFileName(String),
}
