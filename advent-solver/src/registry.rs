//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::expected::Expected;
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::{ExecutionMode, Solver};

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// Base year for AoC (first year of Advent of Code)
pub const BASE_YEAR: u16 = 2015;
/// Maximum number of years supported (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Calculate flat index from year/day, returning None if out of bounds
#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    let y = (year - BASE_YEAR) as usize;
    let d = (day - 1) as usize;
    Some(y * DAYS_PER_YEAR + d)
}

/// Reconstruct year/day from flat index
#[inline]
fn from_index(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

// ============================================================================
// Factory Types
// ============================================================================

/// Thread-safe factory function type for creating solver instances
pub type SolverFactory = Box<
    dyn for<'a> Fn(&'a str, ExecutionMode) -> Result<Box<dyn DynSolver + 'a>, ParseError>
        + Send
        + Sync,
>;

/// Lookup of a solver's embedded sample for a part
pub type SampleFn = fn(u8) -> Option<&'static str>;

/// Lookup of a solver's recorded answers for a part
pub type ExpectedFn = fn(u8) -> Option<Expected>;

/// Metadata about a registered solver factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The puzzle year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

impl FactoryInfo {
    /// Run-order key, `year * 100 + day`
    pub fn order_key(&self) -> u32 {
        u32::from(self.year) * 100 + u32::from(self.day)
    }
}

/// Factory entry with metadata
struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
    sample: SampleFn,
    expected: ExpectedFn,
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for constructing a [`SolverRegistry`] with a fluent API
///
/// The builder pattern allows for method chaining and ensures the registry
/// is immutable after construction. It also provides duplicate detection
/// during registration.
///
/// # Example
///
/// ```
/// use advent_solver::{AocParser, ExecutionMode, ParseError, RegistryBuilder, SolveError, Solver};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Day1 {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.len().to_string())
///     }
///
///     fn sample(_part: u8) -> Option<&'static str> {
///         Some("abc")
///     }
/// }
///
/// let registry = RegistryBuilder::new()
///     .register_solver::<Day1>(2023, 1)
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2023, 1, "hello", ExecutionMode::Puzzle).unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "5");
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a solver factory with explicit metadata
    ///
    /// Returns an error if year/day is out of bounds or already registered.
    ///
    /// # Arguments
    /// * `year` - The puzzle year
    /// * `day` - The day number (1-25)
    /// * `parts` - Number of parts the solver answers
    /// * `sample` - Lookup of the embedded sample per part
    /// * `expected` - Lookup of the recorded answers per part
    /// * `factory` - Parses input into a boxed [`DynSolver`]
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        sample: SampleFn,
        expected: ExpectedFn,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str, ExecutionMode) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        self.entries[index] = Some(SolverFactoryEntry {
            factory: Box::new(factory),
            parts,
            sample,
            expected,
        });
        Ok(self)
    }

    /// Register solver type `S` for a specific year and day
    ///
    /// The factory parses the input once into a [`SolverInstance`]; samples
    /// and expected answers come from the [`Solver`] implementation.
    pub fn register_solver<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register(
            year,
            day,
            S::PARTS,
            S::sample,
            S::expected,
            move |input, mode| {
                let instance = SolverInstance::<S>::new(input, mode)?;
                Ok(Box::new(instance))
            },
        )
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Immutable registry for looking up and creating solvers
///
/// Uses a flat Vec with index math for O(1) lookup; iteration therefore
/// always visits solvers in ascending (year, day) order.
pub struct SolverRegistry {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverRegistry {
    fn entry(&self, year: u16, day: u8) -> Option<&SolverFactoryEntry> {
        calc_index(year, day).and_then(|i| self.entries.get(i)?.as_ref())
    }

    /// Iterate over metadata for all registered factories, ordered by (year, day)
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = from_index(i);
                FactoryInfo {
                    year,
                    day,
                    parts: e.parts,
                }
            })
        })
    }

    /// Get metadata for a specific factory
    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        self.entry(year, day).map(|e| FactoryInfo {
            year,
            day,
            parts: e.parts,
        })
    }

    /// Check if a factory exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.entry(year, day).is_some()
    }

    /// Get the number of registered factories
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }

    /// Embedded sample of a solver part, `None` when unregistered or missing
    pub fn sample(&self, year: u16, day: u8, part: u8) -> Option<&'static str> {
        self.entry(year, day).and_then(|e| (e.sample)(part))
    }

    /// Recorded answers of a solver part
    pub fn expected(&self, year: u16, day: u8, part: u8) -> Option<Expected> {
        self.entry(year, day).and_then(|e| (e.expected)(part))
    }

    /// Create a solver instance by invoking the factory for a specific year/day
    ///
    /// # Arguments
    /// * `year` - The puzzle year
    /// * `day` - The day number (1-25)
    /// * `input` - The input string for the problem
    /// * `mode` - Whether `input` is real puzzle input or a sample
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully created solver
    /// * `Err(SolverError)` - Solver not found or parsing failed
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
        mode: ExecutionMode,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;

        let entry = self
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input, mode).map_err(SolverError::ParseError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip_bounds() {
        assert_eq!(calc_index(2015, 1), Some(0));
        assert_eq!(calc_index(2034, 25), Some(CAPACITY - 1));
        assert_eq!(calc_index(2014, 1), None);
        assert_eq!(calc_index(2035, 1), None);
        assert_eq!(calc_index(2023, 0), None);
        assert_eq!(calc_index(2023, 26), None);
        assert_eq!(from_index(calc_index(2023, 10).unwrap()), (2023, 10));
    }

    #[test]
    fn test_order_key() {
        let info = FactoryInfo {
            year: 2024,
            day: 7,
            parts: 2,
        };
        assert_eq!(info.order_key(), 202_407);
    }
}
