//! Position-letter index.
//!
//! Derived from a [`ShapeDict`]: for each shape, the set of letters the
//! dictionary's words of that shape contain at each position. This is
//! what candidate derivation intersects against. Rebuilt from scratch
//! after every dictionary refinement; it is a pure function of its
//! input, which keeps the per-cycle correctness argument simple.

use std::collections::{BTreeMap, BTreeSet};

use crate::dictionary::ShapeDict;

/// Per-shape slice of the index: the shape's length and the letters seen
/// at each position across all words of that shape.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    length: usize,
    positions: Vec<BTreeSet<char>>,
}

impl IndexEntry {
    fn new(length: usize) -> Self {
        IndexEntry {
            length,
            positions: vec![BTreeSet::new(); length],
        }
    }

    /// Number of positions in this shape.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Letters observed at a position. Out-of-range positions yield the
    /// empty set.
    pub fn letters_at(&self, position: usize) -> &BTreeSet<char> {
        static EMPTY: BTreeSet<char> = BTreeSet::new();
        self.positions.get(position).unwrap_or(&EMPTY)
    }
}

/// Index of every shape in a dictionary.
#[derive(Debug, Clone, Default)]
pub struct PositionIndex {
    entries: BTreeMap<String, IndexEntry>,
}

impl PositionIndex {
    /// Build the index for every bucket of `dict`.
    ///
    /// Only lowercase letters and apostrophes are recorded; anything
    /// else in a dictionary word is skipped defensively.
    pub fn build(dict: &ShapeDict) -> Self {
        let mut entries = BTreeMap::new();

        for (shape, words) in dict.iter() {
            // An empty bucket indexes nothing; its shape stays absent so
            // candidate derivation reports it as unmatched.
            if words.is_empty() {
                continue;
            }
            let length = shape.chars().count();
            let entry: &mut IndexEntry = entries
                .entry(shape.to_string())
                .or_insert_with(|| IndexEntry::new(length));
            for word in words {
                for (idx, c) in word.chars().enumerate() {
                    if !c.is_ascii_lowercase() && c != '\'' {
                        continue;
                    }
                    if let Some(set) = entry.positions.get_mut(idx) {
                        set.insert(c);
                    }
                }
            }
        }

        PositionIndex { entries }
    }

    /// Look up the entry for a shape, if any bucket produced one.
    pub fn entry(&self, shape: &str) -> Option<&IndexEntry> {
        self.entries.get(shape)
    }

    /// Number of indexed shapes.
    pub fn shape_count(&self) -> usize {
        self.entries.len()
    }
}
