//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the terminal
//! conditions of the collection stage alongside the usual I/O and
//! configuration failures, offering more context than generic I/O or
//! `anyhow` errors.

use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Application-specific errors used throughout `folder-index`.
///
/// The first three variants are the terminal conditions of the collector
/// itself: observing them ends the current run but is not fatal to the
/// host process. The remaining variants cover I/O, configuration, and
/// serialization failures in the surrounding stages.
#[derive(Error, Debug)]
pub enum Error {
    /// An observed file carries no content representation at all.
    #[error("File is null")]
    NullFile,

    /// An observed file's content is a live stream; incremental
    /// consumption is not supported, so its mere presence is terminal.
    #[error("No stream support")]
    UnsupportedStream,

    /// The input sequence ended with zero collected entries.
    #[error("No files found for folder index")]
    EmptyIndex,

    /// The collector was driven past an earlier terminal failure.
    ///
    /// Once `observe` has returned `NullFile` or `UnsupportedStream`, the
    /// collector refuses further items and refuses finalization.
    #[error("Collector already terminated by an earlier error")]
    Terminated,

    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String, // Use String to avoid lifetime issues if PathBuf is dropped
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Generic error related to invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Failure to serialize the collected index into the manifest body.
    #[error("Failed to serialize manifest: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error is one of the collector's terminal conditions,
    /// which the binary reports without a failing exit status.
    pub fn is_terminal_collection_error(&self) -> bool {
        matches!(
            self,
            Error::NullFile | Error::UnsupportedStream | Error::EmptyIndex
        )
    }
}

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
