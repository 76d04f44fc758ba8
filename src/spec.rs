//! INI Format Notes
//!
//! This module documents the INI dialect as implemented by this library.
//!
//! # Overview
//!
//! The format is line-oriented. Every physical line is one of five terms,
//! tried in this order after trimming surrounding whitespace:
//!
//! | Term | Form | Example |
//! |------|------|---------|
//! | Blank | empty after trimming | |
//! | Comment | starts with the marker | `# build settings` |
//! | Section header | `[` ... `]` | `[server]` |
//! | Key-value | contains the delimiter | `host = localhost # note` |
//! | Malformed | anything else | `stray text` (skipped) |
//!
//! The comment marker defaults to `#` and the delimiter to `=`; both are
//! configurable per document and may be multi-character strings.
//!
//! # Structure
//!
//! Sections are introduced by a header line and never nest: a header always
//! starts a new top-level section, and every following line until the next
//! header belongs to it. Lines before the first header belong to the
//! document root.
//!
//! Duplicate keys and duplicate section names are legal. Lookup resolves to
//! the first occurrence; later occurrences are inert until addressed by
//! position through the node tree.
//!
//! # Key-value lines
//!
//! The line is split at the *first* occurrence of the delimiter; the key is
//! the trimmed text before it. The remainder is scanned for the first
//! occurrence of the comment marker not preceded by a backslash:
//!
//! - if found, the trimmed text before it is the value and the trimmed text
//!   after it is a trailing comment attached to the entry;
//! - otherwise the whole trimmed remainder is the value.
//!
//! ```text
//! timeout = 30 # seconds      value "30", trailing comment "seconds"
//! path = a\#b                 value "a\#b", no trailing comment
//! expr = x=y                  value "x=y" (first delimiter wins)
//! ```
//!
//! # Canonical layout
//!
//! The serializer emits one canonical spacing and `\n`-terminates every
//! line:
//!
//! ```text
//! # comment text
//! [section]
//! key = value # trailing comment
//! ```
//!
//! Input already in canonical layout (and ending with a newline)
//! round-trips byte for byte. Input with non-canonical spacing — `key=value`,
//! a comment with no space after the marker — parses to the same tree and is
//! normalized to canonical layout on the first dump.
//!
//! # Limitations
//!
//! There is no line continuation and no quoting. A value containing an
//! unescaped comment marker is read as ending at that marker, with the rest
//! becoming a trailing comment; prefix the marker with a backslash to keep
//! it in the value (the backslash is preserved verbatim). A key cannot
//! contain the delimiter.
