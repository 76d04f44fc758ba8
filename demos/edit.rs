//! Editing a document without disturbing its layout.
//!
//! Run with: cargo run --example edit

use ini_edit::IniDocument;

fn main() {
    let mut doc: IniDocument = "\
# deployment settings
# maintained by the ops team

[server]
host = localhost # dev default
workers = 4
"
    .parse()
    .unwrap();

    // Update an existing value: the trailing comment stays put.
    doc.set("host", "app.internal", "server");

    // Add a key to an existing section and a whole new section.
    doc.set("workers", "16", "server");
    doc.set_bool("enabled", true, "tls");

    print!("{doc}");
}
