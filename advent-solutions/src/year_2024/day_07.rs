//! Bridge repair: which equations can be made true with `+`, `*` and `||`

use crate::utils::{digit_count, numeric::power_of_10};
use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};
use anyhow::{Context, anyhow};
use rayon::prelude::*;

pub struct Day07;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Add,
    Multiply,
    Concatenate,
}

impl Operator {
    fn apply(self, left: u64, right: u64) -> Option<u64> {
        match self {
            Self::Add => left.checked_add(right),
            Self::Multiply => left.checked_mul(right),
            Self::Concatenate => power_of_10(digit_count(right))
                .and_then(|shift| left.checked_mul(shift))
                .and_then(|shifted| shifted.checked_add(right)),
        }
    }
}

#[derive(Debug)]
pub struct Equation {
    result: u64,
    values: Vec<u64>,
}

impl Equation {
    /// Depth-first over operator choices, left to right; values only grow so
    /// anything above the target is pruned
    fn solvable(&self, operators: &[Operator]) -> bool {
        let Some((&first, rest)) = self.values.split_first() else {
            return false;
        };
        let mut stack = vec![(first, rest)];
        while let Some((value, rest)) = stack.pop() {
            match rest.split_first() {
                None if value == self.result => return true,
                None => {}
                Some((&next, tail)) => stack.extend(
                    operators
                        .iter()
                        .filter_map(|op| op.apply(value, next))
                        .filter(|&v| v <= self.result)
                        .map(|v| (v, tail)),
                ),
            }
        }
        false
    }
}

fn parse_equation(line: &str) -> anyhow::Result<Equation> {
    let (result, values) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' in '{}'", line))?;
    let values = values
        .split_whitespace()
        .map(|v| v.parse().with_context(|| format!("invalid value '{}'", v)))
        .collect::<anyhow::Result<Vec<_>>>()?;
    if values.is_empty() {
        return Err(anyhow!("no values in '{}'", line));
    }
    Ok(Equation {
        result: result.trim().parse().context("invalid result")?,
        values,
    })
}

impl AocParser for Day07 {
    type SharedData<'a> = Vec<Equation>;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(parse_equation)
            .collect::<anyhow::Result<_>>()
            .map_err(ParseError::invalid)
    }
}

impl Solver for Day07 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let operators: &[Operator] = match part {
            1 => &[Operator::Add, Operator::Multiply],
            2 => &[Operator::Add, Operator::Multiply, Operator::Concatenate],
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        let total: u64 = shared
            .par_iter()
            .filter(|equation| equation.solvable(operators))
            .map(|equation| equation.result)
            .sum();
        Ok(total.to_string())
    }

    fn sample(_part: u8) -> Option<&'static str> {
        Some(SAMPLE)
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::sample("3749")),
            2 => Some(Expected::sample("11387")),
            _ => None,
        }
    }
}

const SAMPLE: &str = "\
190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";
