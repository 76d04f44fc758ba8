//! Configuration options for INI parsing and serialization.
//!
//! This module provides [`IniOptions`], the per-document configuration for
//! the comment marker and the key/value delimiter. Both are plain strings so
//! multi-character markers (for example `//`) work; both must be non-empty.
//!
//! Configuration is always per-document. There is no process-wide state:
//! two documents with different markers can coexist freely.
//!
//! ## Examples
//!
//! ```rust
//! use ini_edit::{IniDocument, IniOptions};
//!
//! // Classic Windows-style INI: `;` comments, `=` delimiter.
//! let options = IniOptions::new().with_comment(";");
//! let mut doc = IniDocument::with_options(options);
//! doc.load_str("; generated file\nname = value\n");
//!
//! assert_eq!(doc.get("name", ""), Some("value"));
//! ```

/// The default comment marker, `#`.
pub const DEFAULT_COMMENT: &str = "#";

/// The default key/value delimiter, `=`.
pub const DEFAULT_DELIMITER: &str = "=";

/// Per-document comment marker and delimiter configuration.
///
/// Set the options before parsing; the same options drive serialization, so
/// a document always round-trips with the markers it was parsed with.
///
/// # Examples
///
/// ```rust
/// use ini_edit::IniOptions;
///
/// let options = IniOptions::new();
/// assert_eq!(options.comment, "#");
/// assert_eq!(options.delimiter, "=");
///
/// let options = IniOptions::new().with_comment(";").with_delimiter(":");
/// assert_eq!(options.comment, ";");
/// assert_eq!(options.delimiter, ":");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IniOptions {
    /// Marker introducing full-line and trailing comments. Must be non-empty.
    pub comment: String,
    /// Delimiter between key and value. Must be non-empty.
    pub delimiter: String,
}

impl Default for IniOptions {
    fn default() -> Self {
        IniOptions {
            comment: DEFAULT_COMMENT.to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl IniOptions {
    /// Creates the default options (`#` comments, `=` delimiter).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the comment marker.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        debug_assert!(!self.comment.is_empty(), "comment marker must be non-empty");
        self
    }

    /// Sets the key/value delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        debug_assert!(!self.delimiter.is_empty(), "delimiter must be non-empty");
        self
    }
}
