//! Build script to generate the embedded dictionary
//!
//! Reads the bundled hunspell-style word list and generates Rust source code
//! with a const array of its raw lines.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_line_list(
        "data/sk_SK.dic",
        &Path::new(&out_dir).join("dictionary.rs"),
        "DICTIONARY_LINES",
        "Raw lines of the bundled Slovak word list",
    );

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed=data/sk_SK.dic");
}

fn generate_line_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let lines: Vec<&str> = content.lines().collect();
    let count = lines.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for line in lines {
        // Debug formatting escapes quotes and backslashes but keeps diacritics
        writeln!(output, "    {line:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of raw lines in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
