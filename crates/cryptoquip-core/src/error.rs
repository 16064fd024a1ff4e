//! Error and diagnostic taxonomy.
//!
//! Fatal conditions abort the run and surface as [`SolveError`].
//! Everything else is a [`Diagnostic`]: recorded in the solve report,
//! never raised, so the caller decides whether a partial solution is
//! acceptable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal solver errors. These stop pattern compilation for the run.
#[derive(Debug, Error)]
pub enum SolveError {
    /// Every clear letter still possible for this cipher letter is
    /// already claimed by some other cipher letter: the puzzle is
    /// unsolvable under current assumptions.
    #[error("cipher letter '{cipher}' has no remaining candidate clear letters")]
    CandidatesExhausted { cipher: char },

    /// A compiled word pattern was rejected by the regex engine.
    #[error("word pattern {pattern:?} failed to compile")]
    BadPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Non-fatal conditions observed during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnostic {
    /// A deduction tried to give an already-solved cipher letter a
    /// different clear letter. The original mapping is kept.
    MappingConflict {
        cipher: char,
        existing: char,
        attempted: char,
    },
    /// A deduction tried to claim a clear letter that already backs a
    /// different cipher letter. The mapping stays injective.
    ClearLetterTaken {
        cipher: char,
        claimed_by: char,
        clear: char,
    },
    /// A puzzle word's shape has no dictionary entries this cycle; the
    /// word contributes no constraint.
    UnmatchedShape { word: String, shape: String },
    /// A cipher letter's candidate set became empty (the fatal
    /// [`SolveError::CandidatesExhausted`] as recorded in the report).
    EmptyCandidates { cipher: char },
    /// A compiled pattern was rejected by the regex engine.
    PatternRejected { pattern: String },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::MappingConflict {
                cipher,
                existing,
                attempted,
            } => write!(
                f,
                "cipher letter '{cipher}' already solved as '{existing}', rejected '{attempted}'"
            ),
            Diagnostic::ClearLetterTaken {
                cipher,
                claimed_by,
                clear,
            } => write!(
                f,
                "clear letter '{clear}' already backs '{claimed_by}', rejected for '{cipher}'"
            ),
            Diagnostic::UnmatchedShape { word, shape } => {
                write!(f, "no dictionary entries for '{word}' (shape {shape})")
            }
            Diagnostic::EmptyCandidates { cipher } => {
                write!(f, "cipher letter '{cipher}' ran out of candidates")
            }
            Diagnostic::PatternRejected { pattern } => {
                write!(f, "pattern {pattern:?} rejected")
            }
        }
    }
}

impl From<&SolveError> for Diagnostic {
    fn from(err: &SolveError) -> Self {
        match err {
            SolveError::CandidatesExhausted { cipher } => {
                Diagnostic::EmptyCandidates { cipher: *cipher }
            }
            SolveError::BadPattern { pattern, .. } => Diagnostic::PatternRejected {
                pattern: pattern.clone(),
            },
        }
    }
}
