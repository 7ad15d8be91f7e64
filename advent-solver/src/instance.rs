//! Parsed solver state and its type-erased handle

use crate::error::{ParseError, SolveError};
use crate::solver::{ExecutionMode, Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// One answered part together with when it was computed
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Wall time spent in `solve_part`
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Input parsed by `S` for one execution mode
///
/// Construction is the only place `S::parse` runs. The mode the input was
/// read in is fixed with it, so a sample-sized floor or expansion factor
/// chosen during parsing holds for every part answered afterwards.
pub struct SolverInstance<'a, S: Solver> {
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` as `mode` input and remember how long that took
    ///
    /// # Errors
    ///
    /// Whatever `S::parse` rejects the input with.
    pub fn new(input: &'a str, mode: ExecutionMode) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input, mode)?;
        Ok(Self {
            shared,
            parse_start,
            parse_end: Utc::now(),
        })
    }
}

/// Object-safe view of a [`SolverInstance`], as handed out by the registry
///
/// ```no_run
/// use advent_solver::DynSolver;
///
/// fn answer_both(mut solver: Box<dyn DynSolver>) -> Result<(), advent_solver::SolveError> {
///     for part in 1..=2 {
///         let result = solver.solve(part)?;
///         println!("{part}: {} in {}us", result.answer, result.duration().num_microseconds().unwrap_or(0));
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Answer `part` from the parsed state; parts outside `1..=PARTS` fail
    /// with [`SolveError::PartOutOfRange`]
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_start(&self) -> DateTime<Utc>;

    fn parse_end(&self) -> DateTime<Utc>;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        Ok(SolveResult {
            answer,
            solve_start,
            solve_end: Utc::now(),
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }
}
