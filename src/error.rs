//! Error types for INI loading and saving.
//!
//! The error surface is deliberately small. Only the byte source/sink can
//! fail: a file that cannot be read fails the load, a file that cannot be
//! written fails the save, and `save` without a backing path is refused.
//! Everything else recovers locally by design:
//!
//! - a malformed line is skipped and parsing continues;
//! - an absent key or section reads as `None`;
//! - a typed getter that cannot parse its value returns the caller's default.
//!
//! No operation panics or aborts the process; failures are reported as
//! [`Result`] values.

use thiserror::Error;

/// Represents the errors that can occur while loading or saving a document.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The byte source or sink could not be opened, read, or written.
    #[error("IO error: {0}")]
    Io(String),

    /// `save` was called on a document with no backing file path.
    #[error("document has no backing file path; use save_as")]
    NoPath,
}

impl Error {
    /// Creates an I/O error for file reading/writing failures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_edit::Error;
    ///
    /// let err = Error::io("permission denied");
    /// assert!(err.to_string().contains("permission denied"));
    /// ```
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
