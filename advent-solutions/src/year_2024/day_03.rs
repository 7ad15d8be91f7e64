//! Mull it over: add up `mul(x,y)` instructions in corrupted memory

use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};
use regex::Regex;

pub struct Day03;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

fn products(instructions: &[Instruction], honor_toggles: bool) -> u64 {
    let mut enabled = true;
    let mut total = 0;
    for instruction in instructions {
        match *instruction {
            Instruction::Do => enabled = true,
            Instruction::Dont => enabled = !honor_toggles,
            Instruction::Mul(x, y) if enabled => total += x * y,
            Instruction::Mul(..) => {}
        }
    }
    total
}

impl AocParser for Day03 {
    type SharedData<'a> = Vec<Instruction>;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        let pattern =
            Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)").map_err(ParseError::invalid)?;
        pattern
            .captures_iter(input)
            .map(|caps| match (caps.get(1), caps.get(2)) {
                (Some(x), Some(y)) => Ok(Instruction::Mul(
                    x.as_str().parse().map_err(ParseError::invalid)?,
                    y.as_str().parse().map_err(ParseError::invalid)?,
                )),
                _ if &caps[0] == "do()" => Ok(Instruction::Do),
                _ => Ok(Instruction::Dont),
            })
            .collect()
    }
}

impl Solver for Day03 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let total = match part {
            1 => products(shared, false),
            2 => products(shared, true),
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(total.to_string())
    }

    fn sample(part: u8) -> Option<&'static str> {
        match part {
            1 => Some(SAMPLE_MUL),
            2 => Some(SAMPLE_TOGGLES),
            _ => None,
        }
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::sample("161")),
            2 => Some(Expected::sample("48")),
            _ => None,
        }
    }
}

const SAMPLE_MUL: &str = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";

const SAMPLE_TOGGLES: &str =
    "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
