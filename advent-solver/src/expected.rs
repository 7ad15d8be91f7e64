//! Recorded answers and verification of computed ones

use crate::solver::ExecutionMode;
use std::fmt;

/// Known answers for one part of a solver
///
/// `sample` is the answer for the embedded sample input, `puzzle` the answer
/// for the personal puzzle input. Either may still be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Expected {
    /// Answer for the embedded sample
    pub sample: Option<&'static str>,
    /// Answer for the real puzzle input
    pub puzzle: Option<&'static str>,
}

impl Expected {
    /// Both answers known
    pub const fn new(sample: &'static str, puzzle: &'static str) -> Self {
        Self {
            sample: Some(sample),
            puzzle: Some(puzzle),
        }
    }

    /// Only the sample answer known
    pub const fn sample(sample: &'static str) -> Self {
        Self {
            sample: Some(sample),
            puzzle: None,
        }
    }

    /// Only the puzzle answer known
    pub const fn puzzle(puzzle: &'static str) -> Self {
        Self {
            sample: None,
            puzzle: Some(puzzle),
        }
    }

    /// The recorded answer that applies to `mode`
    pub fn for_mode(&self, mode: ExecutionMode) -> Option<&'static str> {
        match mode {
            ExecutionMode::Puzzle => self.puzzle,
            ExecutionMode::Sample => self.sample,
        }
    }

    /// Compare `answer` with the recorded value for `mode`
    pub fn check(&self, answer: &str, mode: ExecutionMode) -> Verification {
        match self.for_mode(mode) {
            Some(expected) if expected == answer => Verification::Verified,
            Some(expected) => Verification::Mismatch { expected },
            None => Verification::Pending,
        }
    }
}

/// Outcome of comparing a computed answer with its record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// The answer matches the record
    Verified,
    /// The answer differs from the record
    Mismatch {
        /// The recorded answer
        expected: &'static str,
    },
    /// A record exists but has no value for the current mode yet
    Pending,
    /// The part carries no record
    Unverified,
}

impl Verification {
    /// Verify `answer` against an optional record
    pub fn of(expected: Option<&Expected>, answer: &str, mode: ExecutionMode) -> Self {
        expected.map_or(Self::Unverified, |e| e.check(answer, mode))
    }

    /// Whether the answer contradicts its record
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch { .. })
    }

    /// Report tag, empty for unverified parts
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Verified => "(verified)",
            Self::Mismatch { .. } => "(error)",
            Self::Pending => "(tbd)",
            Self::Unverified => "",
        }
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
