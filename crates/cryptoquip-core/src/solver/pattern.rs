//! Pattern compilation.
//!
//! Each cipher letter's candidate set compresses into a character
//! class; concatenating the classes for a word's positions, anchored at
//! both ends, gives the pattern its dictionary bucket is re-filtered
//! against. Contiguous candidate runs collapse to ranges, so
//! {d,e,f,h} becomes `[d-fh]`.

use std::collections::BTreeMap;

use regex::Regex;

use crate::error::SolveError;
use crate::mapping::SolvedMapping;
use crate::shape::word_shape;
use crate::solver::candidates::CandidateSets;

/// A compiled per-word pattern, paired with the shape bucket it
/// filters.
#[derive(Debug, Clone)]
pub struct WordMatcher {
    pub cipher_word: String,
    pub shape: String,
    pub pattern: String,
    pub regex: Regex,
}

/// Compile the character class for one cipher letter.
///
/// A solved letter compiles to its clear literal whatever the input set
/// holds. An empty set is fatal: every remaining candidate is claimed
/// elsewhere, so the puzzle is unsolvable under current assumptions.
pub(crate) fn class_spec(
    cipher: char,
    candidates: &std::collections::BTreeSet<char>,
    mapping: &SolvedMapping,
) -> Result<String, SolveError> {
    if let Some(clear) = mapping.get(cipher) {
        return Ok(clear.to_string());
    }
    if candidates.is_empty() {
        return Err(SolveError::CandidatesExhausted { cipher });
    }
    if candidates.len() == 1 {
        if let Some(&only) = candidates.iter().next() {
            return Ok(only.to_string());
        }
    }

    // Drop clear letters already claimed by other cipher letters; they
    // may have been claimed after this set was derived.
    let letters: Vec<char> = candidates
        .iter()
        .copied()
        .filter(|&l| !mapping.is_used(l))
        .collect();
    match letters.as_slice() {
        [] => Err(SolveError::CandidatesExhausted { cipher }),
        [only] => Ok(only.to_string()),
        _ => Ok(format!("[{}]", compress_ranges(&letters))),
    }
}

/// Compress sorted letters into contiguous-range runs: a run of one
/// emits the letter, a run of two emits both, three or more emit
/// `first-last`.
fn compress_ranges(letters: &[char]) -> String {
    let mut out = String::new();
    let mut iter = letters.iter().copied();
    let Some(first) = iter.next() else {
        return out;
    };
    let (mut start, mut end) = (first, first);

    let mut flush = |out: &mut String, start: char, end: char| {
        let span = end as u32 - start as u32;
        match span {
            0 => out.push(start),
            1 => {
                out.push(start);
                out.push(end);
            }
            _ => {
                out.push(start);
                out.push('-');
                out.push(end);
            }
        }
    };

    for l in iter {
        if l as u32 == end as u32 + 1 {
            end = l;
        } else {
            flush(&mut out, start, end);
            start = l;
            end = l;
        }
    }
    flush(&mut out, start, end);
    out
}

/// Compile a matcher for every matched puzzle word.
///
/// Class specs are memoized per cipher letter for the cycle: a letter's
/// class is identical wherever it occurs. Non-letter characters
/// (apostrophes) pass through escaped.
pub(crate) fn word_matchers<'a, I>(
    words: I,
    sets: &CandidateSets,
    mapping: &SolvedMapping,
) -> Result<Vec<WordMatcher>, SolveError>
where
    I: IntoIterator<Item = &'a str>,
{
    let empty = std::collections::BTreeSet::new();
    let mut specs: BTreeMap<char, String> = BTreeMap::new();
    let mut matchers = Vec::new();

    for word in words {
        let mut pattern = String::from("^");
        for c in word.chars() {
            if !c.is_alphabetic() {
                pattern.push_str(&regex::escape(&c.to_string()));
                continue;
            }
            if !specs.contains_key(&c) {
                let set = sets.get(&c).unwrap_or(&empty);
                specs.insert(c, class_spec(c, set, mapping)?);
            }
            if let Some(spec) = specs.get(&c) {
                pattern.push_str(spec);
            }
        }
        pattern.push('$');

        let regex = Regex::new(&pattern).map_err(|source| SolveError::BadPattern {
            pattern: pattern.clone(),
            source,
        })?;
        matchers.push(WordMatcher {
            cipher_word: word.to_string(),
            shape: word_shape(word),
            pattern,
            regex,
        });
    }

    Ok(matchers)
}
