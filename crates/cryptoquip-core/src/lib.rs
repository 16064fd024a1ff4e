//! Constraint-propagation engine for solving monoalphabetic
//! substitution ciphers (cryptoquips).
//!
//! Given the puzzle's cipher words and a cleartext dictionary, the
//! solver fingerprints words by letter-repetition shape, indexes which
//! clear letters dictionary words carry at each position of each shape,
//! intersects those sets across every occurrence of each cipher letter,
//! compiles the surviving candidates into character-class patterns, and
//! re-filters the dictionary against them — repeating until the
//! cipher-to-clear mapping is determined or the cycle budget runs out.
//!
//! ```
//! use cryptoquip_core::{Puzzle, ShapeDict, Solver};
//! use std::collections::BTreeMap;
//!
//! let dictionary = ShapeDict::build(
//!     ["top", "cat", "dog"].map(String::from),
//! );
//! let puzzle = Puzzle::new(vec!["xlk".into()], BTreeMap::from([('x', 't')]));
//! let report = Solver::new().solve(&puzzle, &dictionary);
//! assert_eq!(report.mapping.decode("xlk"), "top");
//! ```
//!
//! Loading word lists and puzzle files, and rendering the results, are
//! the caller's concern; see the `cryptoquip-cli` crate.

pub mod dictionary;
pub mod error;
pub mod index;
pub mod mapping;
pub mod puzzle;
pub mod shape;
pub mod solver;

pub use dictionary::ShapeDict;
pub use error::{Diagnostic, SolveError};
pub use index::{IndexEntry, PositionIndex};
pub use mapping::SolvedMapping;
pub use puzzle::Puzzle;
pub use shape::word_shape;
pub use solver::{
    CycleSnapshot, DictStats, Outcome, SolveReport, Solver, SolverConfig, WordMatcher,
};
