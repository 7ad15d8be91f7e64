//! Plutonian pebbles: count stones after repeated blinks

use crate::utils::{digit_count, numeric::power_of_10};
use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};
use std::collections::HashMap;

pub struct Day11;

#[derive(Debug)]
pub struct Stones {
    initial: Vec<u64>,
    /// Stones produced by (engraving, blinks left); shared between both parts
    memo: HashMap<(u64, u32), u64>,
}

impl Stones {
    fn count(&mut self, stone: u64, blinks: u32) -> Result<u64, SolveError> {
        if blinks == 0 {
            return Ok(1);
        }
        if let Some(&known) = self.memo.get(&(stone, blinks)) {
            return Ok(known);
        }

        let digits = digit_count(stone);
        let result = if stone == 0 {
            self.count(1, blinks - 1)?
        } else if digits % 2 == 0 {
            let half = power_of_10(digits / 2)
                .ok_or_else(|| SolveError::Invariant(format!("cannot split {}", stone)))?;
            self.count(stone / half, blinks - 1)? + self.count(stone % half, blinks - 1)?
        } else {
            let engraved = stone
                .checked_mul(2024)
                .ok_or_else(|| SolveError::Invariant(format!("{} * 2024 overflows", stone)))?;
            self.count(engraved, blinks - 1)?
        };

        self.memo.insert((stone, blinks), result);
        Ok(result)
    }

    fn count_all(&mut self, blinks: u32) -> Result<u64, SolveError> {
        let initial = self.initial.clone();
        initial.into_iter().try_fold(0, |total, stone| Ok(total + self.count(stone, blinks)?))
    }
}

impl AocParser for Day11 {
    type SharedData<'a> = Stones;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        let initial = input
            .split_whitespace()
            .map(|s| s.parse().map_err(|_| ParseError::invalid(format!("invalid stone '{}'", s))))
            .collect::<Result<Vec<u64>, _>>()?;
        if initial.is_empty() {
            return Err(ParseError::MissingData("no stones".into()));
        }
        Ok(Stones {
            initial,
            memo: HashMap::new(),
        })
    }
}

impl Solver for Day11 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let blinks = match part {
            1 => 25,
            2 => 75,
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        let count = shared.count_all(blinks)?;
        log::debug!("{} memoised stone states", shared.memo.len());
        Ok(count.to_string())
    }

    fn sample(_part: u8) -> Option<&'static str> {
        Some("125 17")
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::sample("55312")),
            _ => None,
        }
    }
}
