//! Core-side puzzle representation.
//!
//! Loaders (file parsers, test fixtures) hand the solver one of these:
//! the cipher words in reading order for rendering, the distinct words
//! and letters for solving, and any externally supplied hint pairs.

use std::collections::{BTreeMap, BTreeSet};

use log::warn;
use serde::{Deserialize, Serialize};

/// An enciphered puzzle, normalized and ready to solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    words: Vec<String>,
    unique_words: BTreeSet<String>,
    cipher_letters: BTreeSet<char>,
    hints: BTreeMap<char, char>,
}

impl Puzzle {
    /// Build a puzzle from its word sequence and hint pairs.
    ///
    /// The distinct-word set and sorted cipher-letter set are derived
    /// here. Hints naming letters absent from the puzzle are kept (they
    /// are harmless) but logged.
    pub fn new(words: Vec<String>, hints: BTreeMap<char, char>) -> Self {
        let unique_words: BTreeSet<String> = words.iter().cloned().collect();
        let cipher_letters: BTreeSet<char> = words
            .iter()
            .flat_map(|w| w.chars())
            .filter(|c| c.is_alphabetic())
            .collect();

        for (&cipher, &clear) in &hints {
            if !cipher_letters.contains(&cipher) {
                warn!("hint {cipher}={clear} names a letter not in the puzzle");
            }
        }

        Puzzle {
            words,
            unique_words,
            cipher_letters,
            hints,
        }
    }

    /// Cipher words in reading order, repeats included.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Distinct cipher words. Solving processes each once; it does not
    /// pay to examine the same word several times.
    pub fn unique_words(&self) -> impl Iterator<Item = &str> {
        self.unique_words.iter().map(String::as_str)
    }

    /// Sorted set of distinct cipher letters.
    pub fn cipher_letters(&self) -> &BTreeSet<char> {
        &self.cipher_letters
    }

    /// Pre-supplied (cipher, clear) hint pairs.
    pub fn hints(&self) -> &BTreeMap<char, char> {
        &self.hints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derives_unique_words_and_letters() {
        let p = Puzzle::new(
            vec!["xlk".into(), "lx".into(), "xlk".into()],
            BTreeMap::new(),
        );
        assert_eq!(p.words().len(), 3);
        assert_eq!(p.unique_words().count(), 2);
        assert_eq!(p.cipher_letters(), &BTreeSet::from(['k', 'l', 'x']));
    }

    #[test]
    fn test_hints_kept() {
        let p = Puzzle::new(vec!["xlk".into()], BTreeMap::from([('x', 't')]));
        assert_eq!(p.hints().get(&'x'), Some(&'t'));
    }

    #[test]
    fn test_apostrophes_are_not_cipher_letters() {
        let p = Puzzle::new(vec!["xl'k".into()], BTreeMap::new());
        assert_eq!(p.cipher_letters(), &BTreeSet::from(['k', 'l', 'x']));
    }
}
