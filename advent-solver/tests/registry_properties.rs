//! Property-based tests for registry ordering, lookup and registration errors

use advent_solver::{
    AocParser, ExecutionMode, Expected, ParseError, RegistrationError, RegistryBuilder,
    SolveError, Solver, SolverError,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Counts lines; fails to parse on empty input
struct LineCount;

impl AocParser for LineCount {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        if input.is_empty() {
            return Err(ParseError::MissingData("empty input".into()));
        }
        Ok(input.lines().collect())
    }
}

impl Solver for LineCount {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared.len().to_string()),
            2 => Ok(shared.iter().map(|l| l.len()).sum::<usize>().to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }

    fn sample(part: u8) -> Option<&'static str> {
        match part {
            1 => Some("a\nbb"),
            _ => None,
        }
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::new("2", "3")),
            _ => None,
        }
    }
}

fn year_day() -> impl Strategy<Value = (u16, u8)> {
    (2015u16..=2034, 1u8..=25)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Whatever order solvers are registered in, iteration is ascending by (year, day)
    #[test]
    fn prop_iteration_is_ordered(keys in prop::collection::btree_set(year_day(), 1..20)) {
        let mut shuffled: Vec<_> = keys.iter().copied().collect();
        shuffled.reverse();

        let mut builder = RegistryBuilder::new();
        for (year, day) in &shuffled {
            builder = builder.register_solver::<LineCount>(*year, *day).unwrap();
        }
        let registry = builder.build();

        let seen: Vec<_> = registry.iter_info().map(|i| (i.year, i.day)).collect();
        let expected: Vec<_> = keys.iter().copied().collect();
        prop_assert_eq!(seen, expected);
        prop_assert_eq!(registry.len(), keys.len());
    }

    /// Registering the same (year, day) twice is rejected
    #[test]
    fn prop_duplicate_rejected((year, day) in year_day()) {
        let result = RegistryBuilder::new()
            .register_solver::<LineCount>(year, day)
            .unwrap()
            .register_solver::<LineCount>(year, day);

        prop_assert!(matches!(result, Err(RegistrationError::DuplicateSolver(y, d)) if y == year && d == day));
    }

    /// Years outside the supported window and day 0 or above 25 are rejected
    #[test]
    fn prop_out_of_bounds_rejected(year in prop_oneof![1990u16..2015, 2035u16..3000], day in 1u8..=25) {
        let result = RegistryBuilder::new().register_solver::<LineCount>(year, day);
        prop_assert!(matches!(result, Err(RegistrationError::InvalidYearDay(_, _))));
    }
}

#[test]
fn test_create_solver_and_solve() {
    let registry = RegistryBuilder::new()
        .register_solver::<LineCount>(2023, 10)
        .unwrap()
        .build();

    let mut solver = registry
        .create_solver(2023, 10, "abc\nde\nf", ExecutionMode::Puzzle)
        .unwrap();

    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());
    assert_eq!(solver.solve(1).unwrap().answer, "3");
    assert_eq!(solver.solve(2).unwrap().answer, "6");
    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
}

#[test]
fn test_create_solver_errors() {
    let registry = RegistryBuilder::new()
        .register_solver::<LineCount>(2023, 10)
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2023, 11, "x", ExecutionMode::Puzzle),
        Err(SolverError::NotFound(2023, 11))
    ));
    assert!(matches!(
        registry.create_solver(2023, 0, "x", ExecutionMode::Puzzle),
        Err(SolverError::InvalidYearDay(2023, 0))
    ));
    assert!(matches!(
        registry.create_solver(2023, 10, "", ExecutionMode::Puzzle),
        Err(SolverError::ParseError(ParseError::MissingData(_)))
    ));
}

#[test]
fn test_samples_and_expected_lookup() {
    let registry = RegistryBuilder::new()
        .register_solver::<LineCount>(2024, 1)
        .unwrap()
        .build();

    assert_eq!(registry.sample(2024, 1, 1), Some("a\nbb"));
    assert_eq!(registry.sample(2024, 1, 2), None);
    assert_eq!(registry.sample(2024, 2, 1), None);
    assert_eq!(registry.expected(2024, 1, 1), Some(Expected::new("2", "3")));
    assert_eq!(registry.expected(2024, 1, 2), None);

    let days: BTreeSet<_> = registry.iter_info().map(|i| i.day).collect();
    assert_eq!(days.into_iter().collect::<Vec<_>>(), vec![1]);
}
