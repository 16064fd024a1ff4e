//! Puzzle file parsing.
//!
//! Format: cipher text lines, `#` comment lines, and `x=e` hint lines
//! (cipher letter left of the `=`, clear letter right). A comment
//! containing `Solution` ends the puzzle — anything after it is the
//! answer key and must not leak into the solve. Punctuation (`.:,"!?;`)
//! is stripped from cipher words; apostrophes inside a word survive so
//! contractions keep their shape, ones wrapping a word are quote marks
//! and are trimmed.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use cryptoquip_core::Puzzle;

pub fn load(path: &Path) -> std::io::Result<Puzzle> {
    let text = fs::read_to_string(path)?;
    Ok(parse(&text))
}

fn parse(text: &str) -> Puzzle {
    let mut words = Vec::new();
    let mut hints = BTreeMap::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            if line.contains("Solution") {
                break;
            }
            continue;
        }

        if line.contains('=') {
            let mut fields = line.split('=');
            let cipher = fields.next().and_then(|f| f.chars().next());
            let clear = fields.last().and_then(|f| f.chars().next());
            if let (Some(cipher), Some(clear)) = (cipher, clear) {
                hints.insert(
                    cipher.to_ascii_lowercase(),
                    clear.to_ascii_lowercase(),
                );
            }
            continue;
        }

        for raw in line.split_whitespace() {
            let word: String = raw
                .to_lowercase()
                .chars()
                .filter(|c| !matches!(c, ':' | '.' | ',' | '"' | '!' | '?' | ';'))
                .collect();
            let word = word.trim_matches('\'');
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }
    }

    Puzzle::new(words, hints)
}
