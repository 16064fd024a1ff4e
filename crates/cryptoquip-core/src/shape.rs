//! Word shape fingerprinting.
//!
//! A word's shape is its letter-repetition pattern: each position holds a
//! symbol assigned the first time that letter appears, left to right. Two
//! words share a shape exactly when some bijective letter-renaming turns
//! one into the other, which makes the shape the lookup key for "which
//! dictionary words could this cipher word be?".

use std::collections::HashMap;

/// Compute the canonical shape of a word.
///
/// Symbols are allocated in order of first appearance starting at `'0'`
/// (`"deed"` → `"0110"`, `"kayak"` → `"01210"`). Apostrophes emit
/// themselves and consume no symbol; they sort below `'0'`, so they never
/// collide with a generated symbol. Any other non-letter is dropped,
/// which leaves the key shorter than the word — callers use the length
/// mismatch to reject malformed input.
pub fn word_shape(word: &str) -> String {
    let mut assigned: HashMap<char, char> = HashMap::new();
    let mut next: u32 = 0;
    let mut key = String::with_capacity(word.len());

    for c in word.chars() {
        let l = c.to_lowercase().next().unwrap_or(c);
        if l.is_alphabetic() {
            let symbol = *assigned.entry(l).or_insert_with(|| {
                let s = char::from_u32('0' as u32 + next)
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                next += 1;
                s
            });
            key.push(symbol);
        } else if l == '\'' {
            key.push('\'');
        }
    }

    key
}
