//! Error types for splitting operations.
//!
//! Only pre-flight problems are errors: a missing input, a bad split level, input that is not
//! UTF-8, or an output directory that cannot be reset. Failures while writing individual
//! sections or TOC lines are logged as warnings and counted in the report instead.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions raised before or while preparing a split.
#[derive(Error, Debug)]
pub enum Error {
    /// The input path does not exist.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The input path exists but is a directory or other non-file.
    #[error("'{}' is not a file", .0.display())]
    NotAFile(PathBuf),

    /// The split level lies outside `1..=6`.
    #[error("max_level must be between 1 and 6 (got {0})")]
    InvalidMaxLevel(u8),

    /// The input is not valid UTF-8.
    #[error("Unable to read file {}: {source}", .path.display())]
    Decode {
        /// File that failed to decode.
        path: PathBuf,
        /// Underlying decoding failure.
        source: std::string::FromUtf8Error,
    },

    /// The markdown grammar or heading query could not be loaded.
    #[error("Markdown parsing failed: {0}")]
    Parse(String),

    /// The output directory could not be removed or recreated.
    #[error("Unable to prepare output directory {}: {source}", .path.display())]
    OutputDir {
        /// Directory being reset.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Any other I/O failure on the input side.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
