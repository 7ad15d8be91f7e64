//! Claw contraption: cheapest button presses reaching each prize

use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};
use regex::Regex;

pub struct Day13;

const COST_A: i64 = 3;
const COST_B: i64 = 1;
const PRIZE_OFFSET: i64 = 10_000_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Machine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

impl Machine {
    /// Tokens for the unique press counts solving the 2x2 system (Cramer's rule), if integral
    fn tokens(&self, offset: i64) -> Option<i64> {
        let (px, py) = (self.prize.0 + offset, self.prize.1 + offset);
        let determinant = self.a.0 * self.b.1 - self.a.1 * self.b.0;
        if determinant == 0 {
            return None;
        }
        let a = (px * self.b.1 - py * self.b.0) / determinant;
        let b = (self.a.0 * py - self.a.1 * px) / determinant;
        let exact = self.a.0 * a + self.b.0 * b == px && self.a.1 * a + self.b.1 * b == py;
        (exact && a >= 0 && b >= 0).then_some(a * COST_A + b * COST_B)
    }
}

impl AocParser for Day13 {
    type SharedData<'a> = Vec<Machine>;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        let pattern = Regex::new(
            r"Button A: X\+(\d+), Y\+(\d+)\s+Button B: X\+(\d+), Y\+(\d+)\s+Prize: X=(\d+), Y=(\d+)",
        )
        .map_err(ParseError::invalid)?;

        let machines = pattern
            .captures_iter(input)
            .map(|caps| -> Result<Machine, std::num::ParseIntError> {
                let (_, numbers) = caps.extract::<6>();
                let [ax, ay, bx, by, px, py] = numbers.map(|n| n.parse::<i64>());
                Ok(Machine {
                    a: (ax?, ay?),
                    b: (bx?, by?),
                    prize: (px?, py?),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(ParseError::invalid)?;

        let blocks = input.split("Button A").count() - 1;
        if machines.is_empty() || machines.len() != blocks {
            return Err(ParseError::invalid(format!(
                "read {} machines from {} blocks",
                machines.len(),
                blocks
            )));
        }
        Ok(machines)
    }
}

impl Solver for Day13 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let offset = match part {
            1 => 0,
            2 => PRIZE_OFFSET,
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        let tokens: i64 = shared.iter().filter_map(|m| m.tokens(offset)).sum();
        Ok(tokens.to_string())
    }

    fn sample(_part: u8) -> Option<&'static str> {
        Some(SAMPLE)
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::new("480", "36838")),
            2 => Some(Expected::puzzle("83029436920891")),
            _ => None,
        }
    }
}

const SAMPLE: &str = "\
Button A: X+94, Y+34
Button B: X+22, Y+67
Prize: X=8400, Y=5400

Button A: X+26, Y+66
Button B: X+67, Y+21
Prize: X=12748, Y=12176

Button A: X+17, Y+86
Button B: X+84, Y+37
Prize: X=7870, Y=6450

Button A: X+69, Y+23
Button B: X+27, Y+71
Prize: X=18641, Y=10279
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample() {
        let mut shared = Day13::parse(SAMPLE, ExecutionMode::Sample).unwrap();
        assert_eq!(shared.len(), 4);
        assert_eq!(Day13::solve_part(&mut shared, 1).unwrap(), "480");
    }

    #[test]
    fn test_offset_prizes() {
        let machines = Day13::parse(SAMPLE, ExecutionMode::Sample).unwrap();
        let winnable: Vec<_> = machines
            .iter()
            .map(|m| m.tokens(PRIZE_OFFSET).is_some())
            .collect();
        assert_eq!(winnable, vec![false, true, false, true]);
    }

    #[test]
    fn test_first_machine_cost() {
        let machines = Day13::parse(SAMPLE, ExecutionMode::Sample).unwrap();
        assert_eq!(machines[0].tokens(0), Some(280));
        assert_eq!(machines[1].tokens(0), None);
    }

    #[test]
    fn test_incomplete_machine() {
        let input = "Button A: X+94, Y+34\nButton B: X+22, Y+67\n";
        assert!(Day13::parse(input, ExecutionMode::Puzzle).is_err());
    }
}
