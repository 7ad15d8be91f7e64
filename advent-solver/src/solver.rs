//! Core solver trait and related types

use crate::error::{ParseError, SolveError};
use crate::expected::Expected;

/// Where a solver's input comes from
///
/// `Puzzle` runs against the personal input (cached or downloaded), `Sample`
/// against the small example embedded in the solver. Some days tune their
/// constants to the mode, so the mode is handed to [`AocParser::parse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Real puzzle input
    #[default]
    Puzzle,
    /// Embedded sample input
    Sample,
}

impl ExecutionMode {
    /// Whether the mode runs against embedded samples
    pub fn is_sample(self) -> bool {
        self == Self::Sample
    }
}

/// Trait for parsing AOC puzzle input into shared data
///
/// This trait defines the shared data type and parsing logic for a solver,
/// providing clean separation between parsing and solving concerns.
///
/// # Example
///
/// ```
/// use advent_solver::{AocParser, ExecutionMode, ParseError};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait AocParser {
    /// The shared data structure that holds parsed input and intermediate results.
    ///
    /// Use any ownership strategy:
    /// - `Vec<T>` or custom structs for owned data (simplest, supports mutation)
    /// - `&'a str` for zero-copy borrowed data when no transformation is needed
    type SharedData<'a>: 'a;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str, mode: ExecutionMode) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Core trait that all puzzle solvers must implement.
///
/// Extends `AocParser` to inherit `SharedData` type and `parse()` function.
/// Each solver handles a specific year-day problem and defines:
/// - How to solve each part of the problem using mutable access to shared data
/// - The sample input used in [`ExecutionMode::Sample`]
/// - Known answers used to verify results
///
/// # Example
///
/// ```
/// use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};
///
/// struct Day1Solver;
///
/// impl AocParser for Day1Solver {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
///         input.lines()
///             .map(|line| line.parse().map_err(|_|
///                 ParseError::InvalidFormat("Expected integer".to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i32>().to_string()),
///             2 => Ok(shared.iter().product::<i32>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
///
///     fn sample(_part: u8) -> Option<&'static str> {
///         Some("1\n2\n3")
///     }
///
///     fn expected(part: u8) -> Option<Expected> {
///         match part {
///             1 => Some(Expected::sample("6")),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Arguments
    /// * `shared` - Mutable reference to shared data (parsed input and intermediate results)
    /// * `part` - The part number (1, 2, etc.)
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;

    /// Embedded sample input for a part, `None` if the part has no sample
    ///
    /// Parts may return different samples when the second part changes how
    /// the example has to be read.
    fn sample(part: u8) -> Option<&'static str>;

    /// Known answers for a part, `None` if the part is not verified at all
    fn expected(_part: u8) -> Option<Expected> {
        None
    }
}

/// Range-checked access to [`Solver::solve_part`]
pub trait SolverExt: Solver {
    /// Solve `part`, rejecting part numbers outside `1..=PARTS`
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
