//! Per-cycle candidate-set derivation.
//!
//! For each distinct puzzle word, the position-letter index says which
//! clear letters dictionary words carry at each position. Intersecting
//! those sets across every occurrence of a cipher letter — within a
//! word and across words — leaves the letters still consistent with
//! everything seen this cycle. Sets are rebuilt fresh each cycle, never
//! carried over.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::error::Diagnostic;
use crate::index::PositionIndex;
use crate::mapping::SolvedMapping;
use crate::puzzle::Puzzle;
use crate::shape::word_shape;

/// Clear letters still possible for each cipher letter.
pub(crate) type CandidateSets = BTreeMap<char, BTreeSet<char>>;

/// Result of one derivation pass.
pub(crate) struct Derived {
    pub sets: CandidateSets,
    /// Distinct puzzle words whose shape had an index entry; only these
    /// get a compiled pattern afterwards.
    pub matched_words: Vec<String>,
    /// Unmatched-shape observations, informational.
    pub diagnostics: Vec<Diagnostic>,
}

/// Derive candidate sets for one cycle.
///
/// Already-solved cipher letters are forced to their singleton. When a
/// set is first seeded, clear letters already claimed by a different
/// cipher letter are removed; with `forbid_identity` the cipher letter
/// itself is removed too. Apostrophe positions contribute no
/// constraint.
pub(crate) fn derive(
    puzzle: &Puzzle,
    index: &PositionIndex,
    mapping: &SolvedMapping,
    forbid_identity: bool,
) -> Derived {
    let mut sets: CandidateSets = BTreeMap::new();
    let mut matched_words = Vec::new();
    let mut diagnostics = Vec::new();

    for word in puzzle.unique_words() {
        let shape = word_shape(word);
        let entry = match index.entry(&shape) {
            Some(entry) => entry,
            None => {
                debug!("no index entry for '{word}' (shape {shape})");
                diagnostics.push(Diagnostic::UnmatchedShape {
                    word: word.to_string(),
                    shape,
                });
                continue;
            }
        };
        matched_words.push(word.to_string());

        for (i, cipher) in word.chars().enumerate() {
            if !cipher.is_alphabetic() {
                continue;
            }

            if let Some(clear) = mapping.get(cipher) {
                sets.insert(cipher, BTreeSet::from([clear]));
                continue;
            }

            let at_position = entry.letters_at(i);
            match sets.entry(cipher) {
                Entry::Occupied(mut running) => {
                    running.get_mut().retain(|l| at_position.contains(l));
                }
                Entry::Vacant(slot) => {
                    let mut seed: BTreeSet<char> = at_position.clone();
                    seed.retain(|&l| !mapping.is_used(l));
                    if forbid_identity {
                        seed.remove(&cipher);
                    }
                    debug!(
                        "cipher letter '{cipher}' begins cycle with {} candidates",
                        seed.len()
                    );
                    slot.insert(seed);
                }
            }
        }
    }

    Derived {
        sets,
        matched_words,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::ShapeDict;

    fn fixture(dict_words: &[&str], puzzle_words: &[&str]) -> (Puzzle, PositionIndex) {
        let full = ShapeDict::build(dict_words.iter().map(|w| w.to_string()));
        let puzzle = Puzzle::new(
            puzzle_words.iter().map(|w| w.to_string()).collect(),
            BTreeMap::new(),
        );
        let dict = full.restrict_to(puzzle.unique_words());
        let index = PositionIndex::build(&dict);
        (puzzle, index)
    }

    #[test]
    fn test_seed_from_index() {
        let (puzzle, index) = fixture(&["cat", "dog", "top"], &["xlk"]);
        let mapping = SolvedMapping::new(puzzle.cipher_letters().clone());
        let derived = derive(&puzzle, &index, &mapping, false);
        assert_eq!(derived.sets[&'x'], BTreeSet::from(['c', 'd', 't']));
        assert_eq!(derived.sets[&'l'], BTreeSet::from(['a', 'o']));
        assert_eq!(derived.sets[&'k'], BTreeSet::from(['g', 'p', 't']));
    }

    #[test]
    fn test_intersection_across_words() {
        // 'x' opens both puzzle words; the two shapes constrain its
        // initial letter to {c,g} and {g,t}, leaving only 'g'.
        let (puzzle, index) = fixture(&["ca", "go", "gee", "too"], &["xy", "xzz"]);
        let mapping = SolvedMapping::new(puzzle.cipher_letters().clone());
        let derived = derive(&puzzle, &index, &mapping, false);
        assert_eq!(derived.sets[&'x'], BTreeSet::from(['g']));
    }

    #[test]
    fn test_repeated_letter_within_word() {
        let (puzzle, index) = fixture(&["deed", "noon"], &["abba"]);
        let mapping = SolvedMapping::new(puzzle.cipher_letters().clone());
        let derived = derive(&puzzle, &index, &mapping, false);
        // 'a' occupies positions 0 and 3: {d,n} both times.
        assert_eq!(derived.sets[&'a'], BTreeSet::from(['d', 'n']));
        assert_eq!(derived.sets[&'b'], BTreeSet::from(['e', 'o']));
    }

    #[test]
    fn test_solved_letter_forced_to_singleton() {
        let (puzzle, index) = fixture(&["cat", "dog", "top"], &["xlk"]);
        let mut mapping = SolvedMapping::new(puzzle.cipher_letters().clone());
        mapping.set_solved('x', 't').unwrap();
        let derived = derive(&puzzle, &index, &mapping, false);
        assert_eq!(derived.sets[&'x'], BTreeSet::from(['t']));
        // 't' is claimed, so it is removed from 'k''s seed.
        assert_eq!(derived.sets[&'k'], BTreeSet::from(['g', 'p']));
    }

    #[test]
    fn test_forbid_identity_strips_self() {
        let (puzzle, index) = fixture(&["ab", "xy"], &["ab"]);
        let mapping = SolvedMapping::new(puzzle.cipher_letters().clone());

        let lenient = derive(&puzzle, &index, &mapping, false);
        assert_eq!(lenient.sets[&'a'], BTreeSet::from(['a', 'x']));

        let strict = derive(&puzzle, &index, &mapping, true);
        assert_eq!(strict.sets[&'a'], BTreeSet::from(['x']));
        assert_eq!(strict.sets[&'b'], BTreeSet::from(['y']));
    }

    #[test]
    fn test_unmatched_shape_reported_not_fatal() {
        let (puzzle, index) = fixture(&["cat"], &["xlk", "qq"]);
        let mapping = SolvedMapping::new(puzzle.cipher_letters().clone());
        let derived = derive(&puzzle, &index, &mapping, false);
        // "qq" (shape "00") has no dictionary entries: reported, skipped,
        // and its letter gets no candidate set this cycle.
        assert_eq!(
            derived.diagnostics,
            vec![Diagnostic::UnmatchedShape {
                word: "qq".into(),
                shape: "00".into(),
            }]
        );
        assert!(!derived.sets.contains_key(&'q'));
        assert_eq!(derived.matched_words, vec!["xlk".to_string()]);
        // The matched word still constrains its own letters.
        assert_eq!(derived.sets[&'x'], BTreeSet::from(['c']));
    }

    #[test]
    fn test_apostrophe_positions_skipped() {
        let (puzzle, index) = fixture(&["don't", "can't"], &["abc'd"]);
        let mapping = SolvedMapping::new(puzzle.cipher_letters().clone());
        let derived = derive(&puzzle, &index, &mapping, false);
        assert!(!derived.sets.contains_key(&'\''));
        assert_eq!(derived.sets[&'d'], BTreeSet::from(['t']));
    }
}
