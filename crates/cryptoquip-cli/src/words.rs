//! Cleartext dictionary loading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a word list, one word per line, lowercased and trimmed. The
/// list is assumed pre-normalized (composed unicode); malformed entries
/// are weeded out later by shape-length checks.
pub fn load(path: &Path) -> std::io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim().to_lowercase();
        if !word.is_empty() {
            words.push(word);
        }
    }
    Ok(words)
}
