//! # ini_edit
//!
//! A format-preserving document model, parser, and serializer for the INI
//! configuration format.
//!
//! ## Why another INI library?
//!
//! Most INI parsers read a file into a map and throw away everything else:
//! comments, blank lines, and the order entries appear in. That is fine for
//! reading, but the moment you write the file back you have destroyed the
//! layout its human maintainers care about.
//!
//! `ini_edit` keeps a lossless node tree instead. Comment blocks, trailing
//! same-line comments, blank separators, and ordering all survive a
//! load→edit→save cycle, and a document you never edit dumps back to its
//! original text byte for byte. You can think of this crate as
//! [`toml_edit`](https://crates.io/crates/toml_edit), but for INI files.
//!
//! ## Key Features
//!
//! - **Byte-for-byte round-trips**: parse then dump reproduces canonical
//!   input exactly, edits or no edits elsewhere in the file
//! - **Comment-aware edits**: changing a value keeps its trailing comment;
//!   comment blocks around entries stay where they were
//! - **Typed access**: boolean, integer, and float getters/setters with
//!   canonical, locale-independent formatting
//! - **Forgiving by design**: malformed lines are skipped, absent keys read
//!   as defaults; only file I/O can actually fail
//! - **Configurable dialect**: per-document comment marker and delimiter
//!   (default `#` and `=`)
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ini_edit = "0.1"
//! ```
//!
//! ### Parse, read, round-trip
//!
//! ```rust
//! use ini_edit::IniDocument;
//!
//! let text = "# database\n\n[db]\nhost = localhost # dev box\nport = 5432\n";
//! let doc: IniDocument = text.parse().unwrap();
//!
//! assert_eq!(doc.get("host", "db"), Some("localhost"));
//! assert_eq!(doc.get_int("port", "db", 0), 5432);
//!
//! // Nothing was edited, so the dump is identical to the input.
//! assert_eq!(doc.to_string(), text);
//! ```
//!
//! ### Edit without disturbing the layout
//!
//! ```rust
//! use ini_edit::IniDocument;
//!
//! let mut doc: IniDocument = "[db]\nhost = localhost # dev box\n".parse().unwrap();
//!
//! doc.set("host", "db.internal", "db");
//! doc.set_int("port", 5432, "db");
//!
//! assert_eq!(
//!     doc.to_string(),
//!     "[db]\nhost = db.internal # dev box\nport = 5432\n"
//! );
//! ```
//!
//! ### Work with files
//!
//! ```no_run
//! use ini_edit::IniDocument;
//!
//! let mut doc = IniDocument::new();
//! doc.load_file("app.ini")?;
//! doc.set_bool("verbose", true, "logging");
//! doc.save()?;
//! # Ok::<(), ini_edit::Error>(())
//! ```
//!
//! ### Walk the tree directly
//!
//! For edits the document API does not cover, the node tree is public:
//!
//! ```rust
//! use ini_edit::{Div, Entry, IniDocument};
//!
//! let mut doc: IniDocument = "[sec]\nkey = 1\n".parse().unwrap();
//!
//! let body = doc.section_mut("sec").unwrap().body_mut();
//! body.push(Div::comment("added programmatically"));
//! body.push(Entry::new("extra", "2"));
//!
//! assert_eq!(
//!     doc.to_string(),
//!     "[sec]\nkey = 1\n# added programmatically\nextra = 2\n"
//! );
//! ```
//!
//! ## Error Model
//!
//! Only the byte source/sink can fail. Malformed lines are skipped during
//! parsing, reads of absent keys return `None` (or the caller's default for
//! typed getters), and typed parse failures fall back to the default. See
//! [`Error`] for the two real failure cases.
//!
//! ## Format
//!
//! See the [`spec`] module for the grammar, the canonical layout, and the
//! documented limitations (no quoting, no line continuation).

mod de;
pub mod document;
pub mod error;
pub mod node;
pub mod options;
mod ser;
pub mod spec;
pub mod value;

pub use document::IniDocument;
pub use error::{Error, Result};
pub use node::{Body, Div, Entry, Node, Section};
pub use options::{IniOptions, DEFAULT_COMMENT, DEFAULT_DELIMITER};
