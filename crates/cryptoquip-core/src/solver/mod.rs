//! Solver orchestrator.
//!
//! One cycle: derive candidate sets → commit singletons → compile word
//! patterns → filter the shape dictionary → rebuild the index → deduce
//! from the surviving matches. Cycles repeat until the mapping is
//! complete, a contradiction halts pattern compilation, or the cycle
//! budget runs out. Every cycle re-derives its state from that cycle's
//! dictionary; nothing is updated incrementally.

mod candidates;
mod pattern;

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::dictionary::ShapeDict;
use crate::error::Diagnostic;
use crate::index::PositionIndex;
use crate::mapping::SolvedMapping;
use crate::puzzle::Puzzle;

pub use pattern::WordMatcher;

/// Terminal state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Every cipher letter in the puzzle is solved.
    Converged,
    /// Cycle budget reached with letters unsolved. A normal outcome for
    /// under-constrained puzzles, not an error.
    Exhausted,
    /// A candidate set emptied out or a pattern failed to compile;
    /// pattern compilation stopped for the run.
    Contradiction,
}

/// Shape/word counts of a dictionary, for progress reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictStats {
    pub shapes: usize,
    pub words: usize,
}

impl DictStats {
    fn of(dict: &ShapeDict) -> Self {
        DictStats {
            shapes: dict.shape_count(),
            words: dict.word_count(),
        }
    }
}

/// State exposed after each cycle for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleSnapshot {
    pub cycle: usize,
    pub dictionary: DictStats,
    pub candidates: BTreeMap<char, BTreeSet<char>>,
    pub solved: BTreeMap<char, char>,
}

/// Everything a run produced: terminal state, the mapping, the final
/// candidate sets, per-cycle snapshots, and every diagnostic observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    pub outcome: Outcome,
    pub mapping: SolvedMapping,
    pub candidates: BTreeMap<char, BTreeSet<char>>,
    pub cycles: usize,
    pub snapshots: Vec<CycleSnapshot>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Solver policy knobs.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Cycle budget; the run stops here even if letters remain.
    pub max_cycles: usize,
    /// Forbid a cipher letter from decoding to itself.
    pub forbid_identity: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_cycles: 4,
            forbid_identity: false,
        }
    }
}

/// The constraint-propagation solver.
pub struct Solver {
    config: SolverConfig,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a solver with default policy.
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Solver { config }
    }

    /// Run the solve loop over a puzzle and a full cleartext dictionary.
    ///
    /// Mapping conflicts are recorded and skipped (the run stays
    /// lenient and keeps deducing other letters); an emptied candidate
    /// set is fatal and ends the run as [`Outcome::Contradiction`].
    pub fn solve(&self, puzzle: &Puzzle, dictionary: &ShapeDict) -> SolveReport {
        let mut dict = dictionary.restrict_to(puzzle.unique_words());
        let mut index = PositionIndex::build(&dict);
        let mut mapping = SolvedMapping::new(puzzle.cipher_letters().clone());
        let mut diagnostics = Vec::new();
        let mut snapshots = Vec::new();
        let mut final_candidates = BTreeMap::new();
        let mut contradiction = false;
        let mut cycles = 0;

        info!(
            "puzzle dictionary: {} shapes, {} words",
            dict.shape_count(),
            dict.word_count()
        );

        for (&cipher, &clear) in puzzle.hints() {
            info!("hint: {cipher} = {clear}");
            record(mapping.set_solved(cipher, clear), &mut diagnostics);
        }

        while !mapping.is_complete() && cycles < self.config.max_cycles {
            debug!(
                "cycle {cycles}: {} shapes, {} words, {} of {} letters solved",
                dict.shape_count(),
                dict.word_count(),
                mapping.len(),
                puzzle.cipher_letters().len()
            );

            let derived =
                candidates::derive(puzzle, &index, &mapping, self.config.forbid_identity);
            diagnostics.extend(derived.diagnostics.iter().cloned());

            // Singleton propagation must precede pattern compilation so
            // fresh solutions narrow the other words' patterns.
            for (&cipher, set) in &derived.sets {
                if set.len() == 1 && mapping.get(cipher).is_none() {
                    if let Some(&clear) = set.iter().next() {
                        debug!("cipher letter '{cipher}' solved as '{clear}' (sole candidate)");
                        record(mapping.set_solved(cipher, clear), &mut diagnostics);
                    }
                }
            }

            let matchers = match pattern::word_matchers(
                derived.matched_words.iter().map(String::as_str),
                &derived.sets,
                &mapping,
            ) {
                Ok(matchers) => matchers,
                Err(err) => {
                    warn!("{err}");
                    diagnostics.push(Diagnostic::from(&err));
                    final_candidates = derived.sets;
                    contradiction = true;
                    break;
                }
            };

            dict = dict.filter_by_patterns(&matchers);
            index = PositionIndex::build(&dict);
            deduce_from_matches(&dict, &matchers, &mut mapping, &mut diagnostics);

            final_candidates = derived.sets.clone();
            snapshots.push(CycleSnapshot {
                cycle: cycles,
                dictionary: DictStats::of(&dict),
                candidates: derived.sets,
                solved: mapping.pairs(),
            });
            cycles += 1;
        }

        let outcome = if contradiction {
            Outcome::Contradiction
        } else if mapping.is_complete() {
            Outcome::Converged
        } else {
            Outcome::Exhausted
        };
        info!(
            "{outcome:?} after {cycles} cycles, {} of {} letters solved",
            mapping.len(),
            puzzle.cipher_letters().len()
        );

        SolveReport {
            outcome,
            mapping,
            candidates: final_candidates,
            cycles,
            snapshots,
            diagnostics,
        }
    }
}

/// Deductions from the freshly filtered dictionary.
///
/// Three forms, in the original's order: a sole surviving word pins
/// every letter of its cipher word; a position letter-identical across
/// all survivors pins that position (a heuristic — unsound when the
/// true word is missing from the dictionary, so conflicts it causes are
/// recorded, not trusted); and a cipher letter whose surviving clear
/// letters form a singleton across all matches is pinned.
fn deduce_from_matches(
    dict: &ShapeDict,
    matchers: &[WordMatcher],
    mapping: &mut SolvedMapping,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let mut letters_from_matches: BTreeMap<char, BTreeSet<char>> = BTreeMap::new();

    for m in matchers {
        let survivors: Vec<&String> = dict
            .bucket(&m.shape)
            .iter()
            .filter(|w| m.regex.is_match(w))
            .collect();
        if survivors.is_empty() {
            continue;
        }

        let cipher_chars: Vec<char> = m.cipher_word.chars().collect();
        let survivor_chars: Vec<Vec<char>> =
            survivors.iter().map(|w| w.chars().collect()).collect();

        for chars in &survivor_chars {
            for (&cipher, &clear) in cipher_chars.iter().zip(chars.iter()) {
                if !cipher.is_alphabetic() {
                    continue;
                }
                letters_from_matches.entry(cipher).or_default().insert(clear);
            }
        }

        if survivors.len() == 1 {
            info!(
                "'{}' has a single surviving match: '{}'",
                m.cipher_word, survivors[0]
            );
            for (&cipher, &clear) in cipher_chars.iter().zip(survivor_chars[0].iter()) {
                if !cipher.is_alphabetic() {
                    continue;
                }
                record(mapping.set_solved(cipher, clear), diagnostics);
            }
        } else {
            for (i, &cipher) in cipher_chars.iter().enumerate() {
                if !cipher.is_alphabetic() {
                    continue;
                }
                let at_position: BTreeSet<char> = survivor_chars
                    .iter()
                    .filter_map(|chars| chars.get(i).copied())
                    .collect();
                if at_position.len() == 1 {
                    if let Some(&clear) = at_position.iter().next() {
                        debug!(
                            "position {i} of '{}' identical across {} survivors: '{clear}'",
                            m.cipher_word,
                            survivors.len()
                        );
                        record(mapping.set_solved(cipher, clear), diagnostics);
                    }
                }
            }
        }
    }

    for (cipher, clears) in letters_from_matches {
        if clears.len() == 1 {
            if let Some(&clear) = clears.iter().next() {
                record(mapping.set_solved(cipher, clear), diagnostics);
            }
        }
    }
}

/// Record a rejected deduction without letting it stop the run.
fn record(result: Result<(), Diagnostic>, diagnostics: &mut Vec<Diagnostic>) {
    if let Err(d) = result {
        warn!("{d}");
        diagnostics.push(d);
    }
}
