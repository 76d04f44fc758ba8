//! INI parsing.
//!
//! This module provides the line-oriented [`Parser`] that turns raw text
//! into the document node tree.
//!
//! ## Overview
//!
//! The parser is a single-pass state machine over physical lines with one
//! piece of state: the current section (initially the document root). Each
//! line is classified, in priority order, as blank, full-line comment,
//! section header, or key-value pair. A section header appends a new
//! top-level section and makes it current; every other recognized line is
//! appended to the current section's body.
//!
//! Lines that match no rule are malformed; they are skipped and parsing
//! continues, so parsing from memory never fails. Loading only fails when
//! the byte source itself cannot be read.

use crate::node::{Body, Div, Entry, Node, Section};
use crate::options::IniOptions;

/// The INI parser.
///
/// Borrows the document's options so the configured comment marker and
/// delimiter drive line classification. Created per parse; parsing is total
/// over its input.
pub(crate) struct Parser<'a> {
    comment: &'a str,
    delim: &'a str,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(options: &'a IniOptions) -> Self {
        Parser {
            comment: &options.comment,
            delim: &options.delimiter,
        }
    }

    /// Parses the input into a root body and the list of sections.
    pub(crate) fn parse(&self, input: &str) -> (Body, Vec<Section>) {
        let mut root = Body::new();
        let mut sections: Vec<Section> = Vec::new();

        for raw in input.lines() {
            let line = raw.trim();
            if line.is_empty() {
                attach(&mut root, &mut sections, Div::blank().into());
            } else if let Some(rest) = line.strip_prefix(self.comment) {
                attach(&mut root, &mut sections, Div::comment(rest.trim()).into());
            } else if let Some(name) = section_name(line) {
                // Section headers always attach to the document, never nest.
                sections.push(Section::new(name));
            } else if let Some(node) = self.key_value(line) {
                attach(&mut root, &mut sections, node);
            }
            // Anything else is malformed; skip it and keep going.
        }

        (root, sections)
    }

    /// Splits a line on the first delimiter into an entry, detaching a
    /// trailing comment at the first unescaped marker if one is present.
    fn key_value(&self, line: &str) -> Option<Node> {
        let (key, rest) = line.split_once(self.delim)?;
        let entry = match self.find_unescaped(rest) {
            Some(at) => {
                let span = &rest[at + self.comment.len()..];
                Entry::new(key.trim(), rest[..at].trim()).with_span(span.trim())
            }
            None => Entry::new(key.trim(), rest.trim()),
        };
        Some(Node::Entry(entry))
    }

    /// Finds the first occurrence of the comment marker that is not preceded
    /// by a backslash.
    fn find_unescaped(&self, s: &str) -> Option<usize> {
        let mut from = 0;
        while let Some(pos) = s[from..].find(self.comment) {
            let at = from + pos;
            if at == 0 || s.as_bytes()[at - 1] != b'\\' {
                return Some(at);
            }
            from = at + self.comment.len();
        }
        None
    }
}

fn attach(root: &mut Body, sections: &mut Vec<Section>, node: Node) {
    match sections.last_mut() {
        Some(section) => section.body_mut().push(node),
        None => root.push(node),
    }
}

/// Returns the section name for a trimmed `[...]` header line.
fn section_name(line: &str) -> Option<&str> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?;
    Some(inner.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> (Body, Vec<Section>) {
        let options = IniOptions::new();
        Parser::new(&options).parse(input)
    }

    #[test]
    fn test_line_classification() {
        let (root, sections) = parse("# header\n\nkey = value\n[sec]\ninner = 1\n");

        assert_eq!(root.len(), 3);
        assert_eq!(root.nodes()[0].as_div().unwrap().text(), "header");
        assert!(root.nodes()[1].as_div().unwrap().is_blank());
        assert_eq!(root.entry("key").map(Entry::value), Some("value"));

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name(), "sec");
        assert_eq!(sections[0].body().entry("inner").map(Entry::value), Some("1"));
    }

    #[test]
    fn test_trailing_comment_split() {
        let (root, _) = parse("key = value # note\n");
        let entry = root.entry("key").unwrap();
        assert_eq!(entry.value(), "value");
        assert_eq!(entry.span(), Some("note"));
    }

    #[test]
    fn test_escaped_marker_stays_in_value() {
        let (root, _) = parse("key = a \\# b\n");
        let entry = root.entry("key").unwrap();
        assert_eq!(entry.value(), "a \\# b");
        assert_eq!(entry.span(), None);

        // An escaped marker before a real one still yields a span.
        let (root, _) = parse("key = a \\# b # real\n");
        let entry = root.entry("key").unwrap();
        assert_eq!(entry.value(), "a \\# b");
        assert_eq!(entry.span(), Some("real"));
    }

    #[test]
    fn test_first_delimiter_wins() {
        let (root, _) = parse("key = a=b=c\n");
        let entry = root.entry("key").unwrap();
        assert_eq!(entry.value(), "a=b=c");
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let (root, sections) = parse("just some words\nkey = value\n[unclosed\n");
        assert_eq!(root.len(), 1);
        assert!(sections.is_empty());
        assert_eq!(root.entry("key").map(Entry::value), Some("value"));
    }

    #[test]
    fn test_section_header_trimmed_and_top_level() {
        let (_, sections) = parse("[ outer ]\n[inner]\n");
        let names: Vec<&str> = sections.iter().map(Section::name).collect();
        assert_eq!(names, vec!["outer", "inner"]);
    }

    #[test]
    fn test_custom_marker_and_delimiter() {
        let options = IniOptions::new().with_comment(";").with_delimiter(":");
        let (root, _) = Parser::new(&options).parse("; note\nkey: value ; span\n# not a comment = here\n");

        assert_eq!(root.nodes()[0].as_div().unwrap().text(), "note");
        let entry = root.entry("key").unwrap();
        assert_eq!(entry.value(), "value");
        assert_eq!(entry.span(), Some("span"));
        // With `:` as the delimiter, `=` has no special meaning and the
        // third line matches no rule.
        assert_eq!(root.len(), 2);
    }

    #[test]
    fn test_content_after_header_attaches_to_section() {
        let (root, sections) = parse("[sec]\n\n# inside\nkey = 1\n");
        assert!(root.is_empty());
        assert_eq!(sections[0].body().len(), 3);
    }
}
