//! Basic parsing and reading.
//!
//! Run with: cargo run --example simple

use ini_edit::IniDocument;

fn main() {
    let text = "\
# application configuration
name = demo

[server]
host = localhost # change for production
port = 8080
";

    let doc: IniDocument = text.parse().unwrap();

    println!("name = {:?}", doc.get("name", ""));
    println!("host = {:?}", doc.get("host", "server"));
    println!("port = {}", doc.get_int("port", "server", 0));

    // Nothing was edited, so the dump matches the input exactly.
    assert_eq!(doc.to_string(), text);
    println!("✓ Round-trip successful");
}
