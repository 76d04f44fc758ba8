//! INI serialization.
//!
//! This module provides the [`Serializer`] that walks a document's node tree
//! back into text.
//!
//! ## Overview
//!
//! Serialization is a pure function of the tree: the root body first, then
//! each section in stored order, each rendering its nodes in stored order.
//! The rendering rules invert the parser exactly for unmodified canonical
//! input, so a parse→dump cycle with no edits reproduces the original text
//! byte for byte:
//!
//! - blank div → empty line
//! - comment div → `<marker> <text>`
//! - section → `[<name>]`
//! - entry → `<key> <delimiter> <value>`, with ` <marker> <span>` appended
//!   on the same line when the entry has a trailing comment
//!
//! Every emitted line is `\n`-terminated.

use crate::node::{Body, Div, Entry, Node, Section};
use crate::options::IniOptions;

/// The INI serializer.
///
/// Accumulates output into a `String`; retrieve it with
/// [`into_inner`](Serializer::into_inner).
pub(crate) struct Serializer<'a> {
    output: String,
    comment: &'a str,
    delim: &'a str,
}

impl<'a> Serializer<'a> {
    pub(crate) fn new(options: &'a IniOptions) -> Self {
        // Pre-allocate a reasonable starting capacity for small documents.
        Serializer {
            output: String::with_capacity(256),
            comment: &options.comment,
            delim: &options.delimiter,
        }
    }

    pub(crate) fn into_inner(self) -> String {
        self.output
    }

    pub(crate) fn write_body(&mut self, body: &Body) {
        for node in body.nodes() {
            self.write_node(node);
        }
    }

    pub(crate) fn write_section(&mut self, section: &Section) {
        self.output.push('[');
        self.output.push_str(section.name());
        self.output.push(']');
        self.output.push('\n');
        self.write_body(section.body());
    }

    fn write_node(&mut self, node: &Node) {
        match node {
            Node::Entry(entry) => self.write_entry(entry),
            Node::Div(div) => self.write_div(div),
        }
    }

    fn write_entry(&mut self, entry: &Entry) {
        self.output.push_str(entry.key());
        self.output.push(' ');
        self.output.push_str(self.delim);
        self.output.push(' ');
        self.output.push_str(entry.value());
        if let Some(span) = entry.span() {
            self.output.push(' ');
            self.output.push_str(self.comment);
            self.output.push(' ');
            self.output.push_str(span);
        }
        self.output.push('\n');
    }

    fn write_div(&mut self, div: &Div) {
        if !div.is_blank() {
            self.output.push_str(self.comment);
            self.output.push(' ');
            self.output.push_str(div.text());
        }
        self.output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dump(body: &Body, sections: &[Section]) -> String {
        let options = IniOptions::new();
        let mut ser = Serializer::new(&options);
        ser.write_body(body);
        for section in sections {
            ser.write_section(section);
        }
        ser.into_inner()
    }

    #[test]
    fn test_entry_rendering() {
        let mut body = Body::new();
        body.push(Entry::new("key", "value"));
        body.push(Entry::new("other", "1").with_span("note"));

        assert_eq!(dump(&body, &[]), "key = value\nother = 1 # note\n");
    }

    #[test]
    fn test_div_rendering() {
        let mut body = Body::new();
        body.push(Div::comment("heading"));
        body.push(Div::blank());

        assert_eq!(dump(&body, &[]), "# heading\n\n");
    }

    #[test]
    fn test_section_rendering_in_stored_order() {
        let mut first = Section::new("a");
        first.body_mut().push(Entry::new("k", "1"));
        let second = Section::new("b");

        assert_eq!(dump(&Body::new(), &[first, second]), "[a]\nk = 1\n[b]\n");
    }

    #[test]
    fn test_custom_markers() {
        let options = IniOptions::new().with_comment(";").with_delimiter(":");
        let mut ser = Serializer::new(&options);
        let mut body = Body::new();
        body.push(Entry::new("key", "value").with_span("span"));
        ser.write_body(&body);

        assert_eq!(ser.into_inner(), "key : value ; span\n");
    }
}
