//! Historian hysteria: compare two location lists

use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};
use itertools::Itertools;

pub struct Day01;

#[derive(Debug)]
pub struct Lists {
    left: Vec<u32>,
    right: Vec<u32>,
}

impl AocParser for Day01 {
    type SharedData<'a> = Lists;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        let (mut left, mut right): (Vec<u32>, Vec<u32>) = input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .enumerate()
            .map(|(i, line)| -> Result<(u32, u32), ParseError> {
                let values: Vec<u32> = line
                    .split_whitespace()
                    .map(str::parse)
                    .collect::<Result<_, _>>()
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", i + 1, e)))?;
                match values.as_slice() {
                    &[l, r] => Ok((l, r)),
                    _ => Err(ParseError::InvalidFormat(format!(
                        "(line {}) expected two numbers",
                        i + 1
                    ))),
                }
            })
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .unzip();

        left.sort_unstable();
        right.sort_unstable();
        Ok(Lists { left, right })
    }
}

impl Solver for Day01 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let answer: u64 = match part {
            1 => shared
                .left
                .iter()
                .zip(&shared.right)
                .map(|(l, r)| u64::from(l.abs_diff(*r)))
                .sum(),
            2 => {
                let counts = shared.right.iter().counts();
                shared
                    .left
                    .iter()
                    .map(|l| u64::from(*l) * counts.get(l).copied().unwrap_or(0) as u64)
                    .sum()
            }
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(answer.to_string())
    }

    fn sample(_part: u8) -> Option<&'static str> {
        Some(SAMPLE)
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::sample("11")),
            2 => Some(Expected::sample("31")),
            _ => None,
        }
    }
}

const SAMPLE: &str = "\
3   4
4   3
2   5
1   3
3   9
3   3
";
