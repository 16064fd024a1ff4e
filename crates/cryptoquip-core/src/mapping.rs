//! The partial cipher-to-clear mapping built up across cycles.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::Diagnostic;

/// Partial injective mapping from cipher letters to clear letters.
///
/// Grows monotonically: a pair, once recorded, is never removed or
/// overwritten. The set of claimed clear letters is tracked so no clear
/// letter ever backs two different cipher letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedMapping {
    cipher_letters: BTreeSet<char>,
    solved: BTreeMap<char, char>,
    used_clear: BTreeSet<char>,
}

impl SolvedMapping {
    /// Create an empty mapping over the puzzle's cipher-letter universe.
    pub fn new(cipher_letters: BTreeSet<char>) -> Self {
        SolvedMapping {
            cipher_letters,
            solved: BTreeMap::new(),
            used_clear: BTreeSet::new(),
        }
    }

    /// Associate a clear letter with a cipher letter.
    ///
    /// Re-recording the same pair is a no-op. Recording a different
    /// clear letter for an already-solved cipher letter, or a clear
    /// letter that already backs another cipher letter, leaves the
    /// mapping unchanged and returns the conflict: the constraint
    /// system has become inconsistent and the caller must surface it.
    pub fn set_solved(&mut self, cipher: char, clear: char) -> Result<(), Diagnostic> {
        if let Some(&existing) = self.solved.get(&cipher) {
            if existing == clear {
                return Ok(());
            }
            return Err(Diagnostic::MappingConflict {
                cipher,
                existing,
                attempted: clear,
            });
        }
        if self.used_clear.contains(&clear) {
            let claimed_by = self
                .solved
                .iter()
                .find(|&(_, &l)| l == clear)
                .map(|(&c, _)| c)
                .unwrap_or(cipher);
            return Err(Diagnostic::ClearLetterTaken {
                cipher,
                claimed_by,
                clear,
            });
        }
        self.solved.insert(cipher, clear);
        self.used_clear.insert(clear);
        Ok(())
    }

    /// The clear letter solving `cipher`, if known.
    pub fn get(&self, cipher: char) -> Option<char> {
        self.solved.get(&cipher).copied()
    }

    /// Whether a clear letter is already claimed by some cipher letter.
    pub fn is_used(&self, clear: char) -> bool {
        self.used_clear.contains(&clear)
    }

    /// Number of solved cipher letters.
    pub fn len(&self) -> usize {
        self.solved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solved.is_empty()
    }

    /// Whether every cipher letter in the puzzle has a solution.
    pub fn is_complete(&self) -> bool {
        self.cipher_letters
            .iter()
            .all(|c| self.solved.contains_key(c))
    }

    /// The sorted cipher-letter universe this mapping covers.
    pub fn cipher_letters(&self) -> &BTreeSet<char> {
        &self.cipher_letters
    }

    /// Iterate over solved (cipher, clear) pairs in cipher order.
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.solved.iter().map(|(&c, &l)| (c, l))
    }

    /// Solved pairs as a plain map, for snapshots.
    pub fn pairs(&self) -> BTreeMap<char, char> {
        self.solved.clone()
    }

    /// Decode a cipher word with the current mapping, `'?'` marking
    /// unsolved letters. Non-letters pass through unchanged.
    pub fn decode(&self, cipher_word: &str) -> String {
        cipher_word
            .chars()
            .map(|c| {
                if !c.is_alphabetic() {
                    c
                } else {
                    self.get(c).unwrap_or('?')
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(letters: &str) -> SolvedMapping {
        SolvedMapping::new(letters.chars().collect())
    }

    #[test]
    fn test_set_and_get() {
        let mut m = mapping("xyz");
        m.set_solved('x', 't').unwrap();
        assert_eq!(m.get('x'), Some('t'));
        assert_eq!(m.get('y'), None);
        assert!(m.is_used('t'));
        assert!(!m.is_used('x'));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_same_pair_is_noop() {
        let mut m = mapping("xyz");
        m.set_solved('x', 't').unwrap();
        assert!(m.set_solved('x', 't').is_ok());
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_conflict_rejected_and_reported() {
        let mut m = mapping("xyz");
        m.set_solved('x', 't').unwrap();
        let err = m.set_solved('x', 'u').unwrap_err();
        assert_eq!(
            err,
            Diagnostic::MappingConflict {
                cipher: 'x',
                existing: 't',
                attempted: 'u',
            }
        );
        // Mapping unchanged.
        assert_eq!(m.get('x'), Some('t'));
        assert!(!m.is_used('u'));
    }

    #[test]
    fn test_clear_letter_backs_one_cipher_letter() {
        let mut m = mapping("xy");
        m.set_solved('x', 't').unwrap();
        let err = m.set_solved('y', 't').unwrap_err();
        assert_eq!(
            err,
            Diagnostic::ClearLetterTaken {
                cipher: 'y',
                claimed_by: 'x',
                clear: 't',
            }
        );
        // Mapping unchanged and still injective.
        assert_eq!(m.get('y'), None);
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_injection_held_by_caller_via_is_used() {
        let mut m = mapping("xy");
        m.set_solved('x', 't').unwrap();
        // Candidate derivation consults is_used before offering 't'
        // for any other cipher letter.
        assert!(m.is_used('t'));
    }

    #[test]
    fn test_is_complete() {
        let mut m = mapping("ab");
        assert!(!m.is_complete());
        m.set_solved('a', 'x').unwrap();
        assert!(!m.is_complete());
        m.set_solved('b', 'y').unwrap();
        assert!(m.is_complete());
    }

    #[test]
    fn test_decode() {
        let mut m = mapping("xlk");
        m.set_solved('x', 't').unwrap();
        m.set_solved('l', 'o').unwrap();
        assert_eq!(m.decode("xlk"), "to?");
        assert_eq!(m.decode("x'l"), "t'o");
    }
}
