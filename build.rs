//! Build script to generate the embedded vocabulary
//!
//! Reads the word list, normalizes it to uppercase, and generates Rust source with
//! one sorted `&[&str]` partition per word length.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

// Keep in sync with crate::core::{MIN_WORD_LEN, MAX_WORD_LEN}
const MIN_WORD_LEN: usize = 2;
const MAX_WORD_LEN: usize = 12;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_vocabulary(
        "data/words.txt",
        &Path::new(&out_dir).join("vocabulary.rs"),
        "English vocabulary, words of 2 to 12 letters",
    );

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed=data/words.txt");
}

fn generate_vocabulary(input_path: &str, output_path: &Path, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut partitions: Vec<Vec<String>> = vec![Vec::new(); MAX_WORD_LEN - MIN_WORD_LEN + 1];
    for line in content.lines() {
        let word = line.trim().to_ascii_uppercase();
        if (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len())
            && word.bytes().all(|b| b.is_ascii_uppercase())
        {
            partitions[word.len() - MIN_WORD_LEN].push(word);
        }
    }
    for partition in &mut partitions {
        partition.sort_unstable();
        partition.dedup();
    }
    let count: usize = partitions.iter().map(Vec::len).sum();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated vocabulary").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}, indexed by `length - MIN_WORD_LEN`").unwrap();
    writeln!(
        output,
        "pub const PARTITIONS: [&[&str]; {}] = [",
        partitions.len()
    )
    .unwrap();

    for (i, partition) in partitions.iter().enumerate() {
        writeln!(output, "    // {} letters", i + MIN_WORD_LEN).unwrap();
        writeln!(output, "    &[").unwrap();
        for word in partition {
            writeln!(output, "        \"{word}\",").unwrap();
        }
        writeln!(output, "    ],").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in PARTITIONS").unwrap();
    writeln!(output, "pub const WORD_COUNT: usize = {count};").unwrap();
}
