//! Typed value access with defaults.
//!
//! Run with: cargo run --example typed

use ini_edit::IniDocument;

fn main() {
    let doc: IniDocument = "\
[limits]
max_connections = 200
timeout = 2.5
verbose = on
broken = twelve
"
    .parse()
    .unwrap();

    // Present and well-formed values parse.
    println!("max_connections = {}", doc.get_int("max_connections", "limits", 0));
    println!("timeout         = {}", doc.get_float("timeout", "limits", 0.0));
    println!("verbose         = {}", doc.get_bool("verbose", "limits", false));

    // Absent or unparseable values fall back to the caller's default.
    println!("missing         = {}", doc.get_int("missing", "limits", 42));
    println!("broken          = {}", doc.get_int("broken", "limits", -1));
}
