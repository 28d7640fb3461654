//! Build script to generate embedded dictionary data
//!
//! Reads the data files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out_dir = Path::new(&out_dir);

    generate_word_list(
        "data/solutions.txt",
        &out_dir.join("solutions.rs"),
        "SOLUTIONS",
        "Words a round's solution is drawn from",
    );

    generate_word_list(
        "data/guesses.txt",
        &out_dir.join("guesses.rs"),
        "GUESSES",
        "Additional acceptable guesses (solutions are always acceptable too)",
    );

    generate_word_list(
        "data/letter_glyphs.txt",
        &out_dir.join("glyphs.rs"),
        "LETTER_GLYPHS",
        "Letter glyphs: 26 absent, then 26 present, then 26 correct",
    );

    generate_word_list(
        "data/word_frequency.txt",
        &out_dir.join("frequency.rs"),
        "WORD_FREQUENCY",
        "English words ordered from most to least common",
    );

    generate_symbol_table("data/symbols.tsv", &out_dir.join("symbols.rs"));

    // Rebuild if data changes
    for file in [
        "data/solutions.txt",
        "data/guesses.txt",
        "data/letter_glyphs.txt",
        "data/word_frequency.txt",
        "data/symbols.tsv",
    ] {
        println!("cargo:rerun-if-changed={file}");
    }
}

fn read(input_path: &str) -> String {
    fs::read_to_string(input_path).unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"))
}

fn create(output_path: &Path) -> fs::File {
    fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()))
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = read(input_path);
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = create(output_path);

    writeln!(output, "// Generated from {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

/// Symbol table rows: `symbol \t canonical \t alias,alias`
fn generate_symbol_table(input_path: &str, output_path: &Path) {
    let content = read(input_path);
    let mut output = create(output_path);

    writeln!(output, "// Generated from {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "/// Pictographic symbols with their canonical name and alias names"
    )
    .unwrap();
    writeln!(output, "pub const SYMBOLS: &[(&str, &str, &[&str])] = &[").unwrap();

    for (number, line) in content.lines().enumerate() {
        if line.trim().is_empty() || line.starts_with("# ") {
            continue;
        }
        let mut fields = line.split('\t');
        let (Some(symbol), Some(canonical)) = (fields.next(), fields.next()) else {
            panic!("{input_path}:{}: expected at least two columns", number + 1);
        };
        let aliases: Vec<&str> = fields
            .next()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|alias| !alias.is_empty())
            .collect();
        writeln!(output, "    ({symbol:?}, {canonical:?}, &{aliases:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
}
