//! Mirage maintenance: extrapolate sequences through repeated differences

use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};
use itertools::Itertools;

pub struct Day09;

/// Next value after `values`; recursion bottoms out once the differences are constant
fn extrapolate(values: &[i64]) -> i64 {
    let Some(&last) = values.last() else {
        return 0;
    };
    if values.iter().all_equal() {
        return last;
    }
    let differences: Vec<_> = values.iter().tuple_windows().map(|(a, b)| b - a).collect();
    last + extrapolate(&differences)
}

impl AocParser for Day09 {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .enumerate()
            .map(|(i, line)| {
                line.split_whitespace()
                    .map(str::parse)
                    .collect::<Result<Vec<i64>, _>>()
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", i + 1, e)))
            })
            .collect()
    }
}

impl Solver for Day09 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let sum: i64 = match part {
            1 => shared.iter().map(|values| extrapolate(values)).sum(),
            2 => shared
                .iter()
                .map(|values| {
                    let reversed: Vec<_> = values.iter().rev().copied().collect();
                    extrapolate(&reversed)
                })
                .sum(),
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(sum.to_string())
    }

    fn sample(_part: u8) -> Option<&'static str> {
        Some(SAMPLE)
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::new("114", "1725987467")),
            2 => Some(Expected::new("2", "971")),
            _ => None,
        }
    }
}

const SAMPLE: &str = "\
0 3 6 9 12 15
1 3 6 10 15 21
10 13 16 21 30 45
";
