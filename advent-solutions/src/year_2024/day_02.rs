//! Red-nosed reports: strictly monotonic levels changing by one to three

use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};
use itertools::Itertools;

pub struct Day02;

fn is_safe(levels: impl Iterator<Item = i32> + Clone) -> bool {
    let steps = levels.tuple_windows().map(|(a, b)| b - a);
    steps.clone().all(|d| (1..=3).contains(&d)) || steps.clone().all(|d| (-3..=-1).contains(&d))
}

/// Safe as is, or after removing exactly one level
fn is_safe_dampened(levels: &[i32]) -> bool {
    is_safe(levels.iter().copied())
        || (0..levels.len()).any(|skip| {
            is_safe(
                levels
                    .iter()
                    .enumerate()
                    .filter(move |&(i, _)| i != skip)
                    .map(|(_, &l)| l),
            )
        })
}

impl AocParser for Day02 {
    type SharedData<'a> = Vec<Vec<i32>>;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .enumerate()
            .map(|(i, line)| {
                line.split_whitespace()
                    .map(str::parse)
                    .collect::<Result<Vec<i32>, _>>()
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", i + 1, e)))
            })
            .collect()
    }
}

impl Solver for Day02 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let safe = match part {
            1 => shared.iter().filter(|r| is_safe(r.iter().copied())).count(),
            2 => shared.iter().filter(|r| is_safe_dampened(r)).count(),
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(safe.to_string())
    }

    fn sample(_part: u8) -> Option<&'static str> {
        Some(SAMPLE)
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::sample("2")),
            2 => Some(Expected::sample("4")),
            _ => None,
        }
    }
}

const SAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";
