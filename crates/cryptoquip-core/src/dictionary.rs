//! Shape-keyed dictionaries.
//!
//! A [`ShapeDict`] groups dictionary words by their shape. The solver
//! narrows one per cycle: restrict to the puzzle's shapes up front, then
//! re-filter against compiled word patterns. A filtered dictionary is
//! always a subset of its predecessor; buckets only ever shrink.

use std::collections::BTreeMap;

use crate::shape::word_shape;
use crate::solver::WordMatcher;

/// Dictionary words grouped by shape.
#[derive(Debug, Clone, Default)]
pub struct ShapeDict {
    buckets: BTreeMap<String, Vec<String>>,
}

impl ShapeDict {
    /// Group words by shape.
    ///
    /// Words whose shape length differs from their own character count
    /// contain unexpected symbols and are dropped.
    pub fn build<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut buckets: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for word in words {
            let shape = word_shape(&word);
            if shape.chars().count() != word.chars().count() {
                continue;
            }
            buckets.entry(shape).or_default().push(word);
        }
        ShapeDict { buckets }
    }

    /// Copy out only the buckets whose shapes occur among the given
    /// puzzle words. A shape with no dictionary entries yields an empty
    /// bucket, so later lookups stay total.
    pub fn restrict_to<'a, I>(&self, puzzle_words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut buckets: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for word in puzzle_words {
            let shape = word_shape(word);
            buckets
                .entry(shape.clone())
                .or_insert_with(|| self.bucket(&shape).to_vec());
        }
        ShapeDict { buckets }
    }

    /// Keep only words that satisfy the compiled pattern targeting their
    /// shape. Several puzzle words may share a shape; a word surviving
    /// any of their patterns stays, recorded once per bucket.
    pub fn filter_by_patterns(&self, matchers: &[WordMatcher]) -> Self {
        let mut buckets: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for m in matchers {
            let bucket = buckets.entry(m.shape.clone()).or_default();
            for word in self.bucket(&m.shape) {
                if m.regex.is_match(word) && !bucket.contains(word) {
                    bucket.push(word.clone());
                }
            }
        }
        ShapeDict { buckets }
    }

    /// Words known for a shape; empty slice when the shape is absent.
    pub fn bucket(&self, shape: &str) -> &[String] {
        self.buckets.get(shape).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over (shape, bucket) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.buckets
            .iter()
            .map(|(shape, words)| (shape.as_str(), words.as_slice()))
    }

    /// Number of distinct shapes.
    pub fn shape_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total word count across all buckets.
    pub fn word_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}
