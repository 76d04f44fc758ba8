//! The INI document and its editing API.
//!
//! This module provides [`IniDocument`], the owning root of the node tree
//! plus everything needed to load, query, edit, and save it. The document is
//! format-preserving: comments, blank lines, and ordering survive a
//! load→edit→save cycle untouched, and an unedited document dumps back to
//! its original text.
//!
//! ## Quick start
//!
//! ```rust
//! use ini_edit::IniDocument;
//!
//! let text = "# app config\nname = demo\n\n[server]\nhost = localhost # local only\n";
//! let mut doc: IniDocument = text.parse().unwrap();
//!
//! // Reads resolve section first, then the first matching key.
//! assert_eq!(doc.get("name", ""), Some("demo"));
//! assert_eq!(doc.get("host", "server"), Some("localhost"));
//!
//! // Unedited documents round-trip byte for byte.
//! assert_eq!(doc.to_string(), text);
//!
//! // Edits preserve surrounding layout and trailing comments.
//! doc.set("host", "0.0.0.0", "server");
//! assert!(doc.to_string().contains("host = 0.0.0.0 # local only\n"));
//! ```

use std::convert::Infallible;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::de::Parser;
use crate::error::{Error, Result};
use crate::node::{Body, Entry, Node, Section};
use crate::options::IniOptions;
use crate::ser::Serializer;
use crate::value;

/// A parsed INI document: the root of the node tree, the per-document
/// options, and the optional backing file path.
///
/// The root body holds everything that appears before the first section
/// header; sections follow in textual order. Content after a section header
/// always belongs to that section, so this split loses no ordering.
///
/// A document is single-threaded by design: share it across threads only
/// with external synchronization.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IniDocument {
    options: IniOptions,
    root: Body,
    sections: Vec<Section>,
    path: Option<PathBuf>,
}

impl IniDocument {
    /// Creates an empty document with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document with the given options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_edit::{IniDocument, IniOptions};
    ///
    /// let options = IniOptions::new().with_comment(";");
    /// let mut doc = IniDocument::with_options(options);
    /// doc.load_str("; note\nkey = value\n");
    /// assert_eq!(doc.get("key", ""), Some("value"));
    /// ```
    #[must_use]
    pub fn with_options(options: IniOptions) -> Self {
        IniDocument {
            options,
            ..Self::default()
        }
    }

    /// Returns the document's options.
    #[must_use]
    pub fn options(&self) -> &IniOptions {
        &self.options
    }

    /// Sets the comment marker. Takes effect on the next parse and on
    /// serialization; set it before loading.
    pub fn set_comment_marker(&mut self, marker: impl Into<String>) {
        self.options.comment = marker.into();
    }

    /// Sets the key/value delimiter. Takes effect on the next parse and on
    /// serialization; set it before loading.
    pub fn set_delimiter(&mut self, delimiter: impl Into<String>) {
        self.options.delimiter = delimiter.into();
    }

    /// Loads the document from a file, replacing any current content.
    ///
    /// The path is remembered for [`save`](IniDocument::save). If the file
    /// cannot be read the document is left empty and an error is returned.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use ini_edit::IniDocument;
    ///
    /// let mut doc = IniDocument::new();
    /// doc.load_file("app.ini")?;
    /// # Ok::<(), ini_edit::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened or read.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.unload();
        self.path = Some(path.to_path_buf());
        let text = fs::read_to_string(path).map_err(|e| Error::io(&e.to_string()))?;
        self.load_str(&text);
        Ok(())
    }

    /// Loads the document from in-memory text, replacing any current
    /// content. Never fails: malformed lines are skipped.
    pub fn load_str(&mut self, text: &str) {
        let (root, sections) = Parser::new(&self.options).parse(text);
        self.root = root;
        self.sections = sections;
    }

    /// Discards the current tree, resetting to an empty root.
    ///
    /// The remembered file path, if any, is kept.
    pub fn unload(&mut self) {
        self.root.clear();
        self.sections.clear();
    }

    /// Returns `true` if the document holds no nodes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty() && self.sections.is_empty()
    }

    /// Returns the path the document was loaded from, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Writes the document back to the path it was loaded from.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPath`] if the document has no backing file, or
    /// [`Error::Io`] if the file cannot be written. The in-memory document
    /// is unaffected either way.
    pub fn save(&self) -> Result<()> {
        let path = self.path.as_deref().ok_or(Error::NoPath)?;
        self.write_to(path)
    }

    /// Writes the document to the given path.
    ///
    /// The remembered load path is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        self.write_to(path.as_ref())
    }

    fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_string()).map_err(|e| Error::io(&e.to_string()))
    }

    /// Returns the root body: everything before the first section header.
    #[must_use]
    pub fn root(&self) -> &Body {
        &self.root
    }

    /// Returns the root body, mutably.
    pub fn root_mut(&mut self) -> &mut Body {
        &mut self.root
    }

    /// Returns the sections in textual order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the section list, mutably, for direct tree edits.
    pub fn sections_mut(&mut self) -> &mut Vec<Section> {
        &mut self.sections
    }

    /// Returns the first section with the given name, if any.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name() == name)
    }

    /// Returns the first section with the given name, mutably.
    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name() == name)
    }

    /// Returns the value of the first entry matching `key`.
    ///
    /// An empty `section` reads the root body (keys before any section
    /// header). Absence of the section or the key is not an error; both
    /// read as `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_edit::IniDocument;
    ///
    /// let doc: IniDocument = "top = 1\n[sec]\nkey = value\n".parse().unwrap();
    /// assert_eq!(doc.get("top", ""), Some("1"));
    /// assert_eq!(doc.get("key", "sec"), Some("value"));
    /// assert_eq!(doc.get("key", "missing"), None);
    /// assert_eq!(doc.get("missing", "sec").unwrap_or_default(), "");
    /// ```
    #[must_use]
    pub fn get(&self, key: &str, section: &str) -> Option<&str> {
        let body = if section.is_empty() {
            &self.root
        } else {
            self.section(section)?.body()
        };
        body.entry(key).map(Entry::value)
    }

    /// Sets the value of the first entry matching `key`, creating the
    /// section and the entry as needed.
    ///
    /// A named section that does not exist yet is appended at the end of the
    /// document. An existing entry is mutated in place, keeping its trailing
    /// comment; a missing entry is appended to the section body (or, for an
    /// empty `section`, to the root body, which serializes before the first
    /// section header).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_edit::IniDocument;
    ///
    /// let mut doc = IniDocument::new();
    /// doc.set("k", "v", "newsec");
    /// assert_eq!(doc.get("k", "newsec"), Some("v"));
    /// assert_eq!(doc.to_string(), "[newsec]\nk = v\n");
    /// ```
    pub fn set(&mut self, key: &str, value: &str, section: &str) {
        let body = self.body_mut_for(section);
        match body.entry_mut(key) {
            Some(entry) => entry.set_value(value),
            None => body.push(Node::Entry(Entry::new(key, value))),
        }
    }

    /// Reads a boolean, falling back to `default` when the key is absent or
    /// its value does not parse.
    ///
    /// Accepts `true`/`false`, `yes`/`no`, `on`/`off`, and `1`/`0`,
    /// case-insensitively.
    #[must_use]
    pub fn get_bool(&self, key: &str, section: &str, default: bool) -> bool {
        self.get(key, section)
            .and_then(value::parse_bool)
            .unwrap_or(default)
    }

    /// Writes a boolean as its canonical text, `true` or `false`.
    pub fn set_bool(&mut self, key: &str, value: bool, section: &str) {
        self.set(key, value::format_bool(value), section);
    }

    /// Reads an integer, falling back to `default` when the key is absent or
    /// its value does not parse.
    #[must_use]
    pub fn get_int(&self, key: &str, section: &str, default: i64) -> i64 {
        self.get(key, section)
            .and_then(value::parse_int)
            .unwrap_or(default)
    }

    /// Writes an integer as canonical decimal text.
    pub fn set_int(&mut self, key: &str, value: i64, section: &str) {
        self.set(key, &value::format_int(value), section);
    }

    /// Reads a float, falling back to `default` when the key is absent or
    /// its value does not parse.
    #[must_use]
    pub fn get_float(&self, key: &str, section: &str, default: f64) -> f64 {
        self.get(key, section)
            .and_then(value::parse_float)
            .unwrap_or(default)
    }

    /// Writes a float as the shortest text that parses back to the same
    /// value.
    pub fn set_float(&mut self, key: &str, value: f64, section: &str) {
        self.set(key, &value::format_float(value), section);
    }

    /// Resolves the body for a section name, creating the section if needed.
    fn body_mut_for(&mut self, section: &str) -> &mut Body {
        if section.is_empty() {
            return &mut self.root;
        }
        let index = match self.sections.iter().position(|s| s.name() == section) {
            Some(index) => index,
            None => {
                self.sections.push(Section::new(section));
                self.sections.len() - 1
            }
        };
        self.sections[index].body_mut()
    }
}

impl fmt::Display for IniDocument {
    /// Serializes the whole tree in stored order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ser = Serializer::new(&self.options);
        ser.write_body(&self.root);
        for section in &self.sections {
            ser.write_section(section);
        }
        f.write_str(&ser.into_inner())
    }
}

impl FromStr for IniDocument {
    type Err = Infallible;

    /// Parses a document with default options. Total by construction:
    /// malformed lines are skipped, so this never fails.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for IniDocument {
    fn from(text: &str) -> Self {
        let mut doc = IniDocument::new();
        doc.load_str(text);
        doc
    }
}

impl serde::Serialize for IniDocument {
    /// Serializes as the document's textual form, so a document can be
    /// embedded in larger serde-managed configuration.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for IniDocument {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(IniDocument::from(text.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "# div\n\n[sec]\n\nkey = value # trailing\n\n# div\n";

    #[test]
    fn test_round_trip_identity() {
        let doc = IniDocument::from(FIXTURE);
        assert_eq!(doc.to_string(), FIXTURE);
        assert_eq!(doc.get("key", "sec"), Some("value"));
    }

    #[test]
    fn test_set_preserves_span() {
        let mut doc = IniDocument::from("key = value # trailing\n");
        doc.set("key", "other", "");
        assert_eq!(doc.to_string(), "key = other # trailing\n");
    }

    #[test]
    fn test_set_creates_section_at_end() {
        let mut doc = IniDocument::from("[first]\na = 1\n");
        doc.set("k", "v", "newsec");
        assert_eq!(doc.to_string(), "[first]\na = 1\n[newsec]\nk = v\n");
    }

    #[test]
    fn test_root_level_set_precedes_sections() {
        let mut doc = IniDocument::from("[sec]\na = 1\n");
        doc.set("top", "yes", "");
        assert_eq!(doc.to_string(), "top = yes\n[sec]\na = 1\n");
        assert_eq!(doc.get("top", ""), Some("yes"));
    }

    #[test]
    fn test_duplicate_key_first_wins() {
        let mut doc = IniDocument::from("[sec]\ndup = one\ndup = two\n");
        assert_eq!(doc.get("dup", "sec"), Some("one"));

        doc.set("dup", "patched", "sec");
        assert_eq!(doc.to_string(), "[sec]\ndup = patched\ndup = two\n");
    }

    #[test]
    fn test_unload_resets_to_empty_root() {
        let mut doc = IniDocument::from(FIXTURE);
        assert!(!doc.is_empty());
        doc.unload();
        assert!(doc.is_empty());
        assert_eq!(doc.to_string(), "");
    }

    #[test]
    fn test_save_without_path_is_refused() {
        let doc = IniDocument::from("a = 1\n");
        assert!(matches!(doc.save(), Err(Error::NoPath)));
    }

    #[test]
    fn test_typed_accessors_fall_back_to_default() {
        let doc = IniDocument::from("n = not-a-number\n");
        assert_eq!(doc.get_int("n", "", 7), 7);
        assert_eq!(doc.get_int("missing", "", -1), -1);
        assert!(doc.get_bool("missing", "sec", true));
        assert_eq!(doc.get_float("n", "", 0.5), 0.5);
    }

    #[test]
    fn test_typed_round_trip() {
        let mut doc = IniDocument::new();
        doc.set_bool("flag", true, "types");
        doc.set_int("count", -42, "types");
        doc.set_float("ratio", 0.125, "types");

        assert!(doc.get_bool("flag", "types", false));
        assert_eq!(doc.get_int("count", "types", 0), -42);
        assert_eq!(doc.get_float("ratio", "types", 0.0), 0.125);
        assert_eq!(doc.get("flag", "types"), Some("true"));
    }

    #[test]
    fn test_section_accessors() {
        let mut doc = IniDocument::from("[a]\nk = 1\n[b]\n");
        assert_eq!(doc.sections().len(), 2);
        assert!(doc.section("a").is_some());
        assert!(doc.section("c").is_none());

        doc.section_mut("b").unwrap().set_name("renamed");
        assert!(doc.to_string().ends_with("[renamed]\n"));
    }
}
