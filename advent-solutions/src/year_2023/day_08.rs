//! Haunted wasteland: follow left/right instructions through a node network

use crate::utils::lcm_all;
use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};
use anyhow::anyhow;
use std::collections::HashMap;

pub struct Day08;

#[derive(Debug)]
pub struct Network<'a> {
    instructions: &'a [u8],
    nodes: HashMap<&'a str, (&'a str, &'a str)>,
}

impl Network<'_> {
    /// Steps from `start` until `done` holds; errors on a dead end or a walk that can never finish
    fn steps(&self, start: &str, done: impl Fn(&str) -> bool) -> Result<u64, SolveError> {
        // position in the instructions times node count bounds the distinct states
        let limit = (self.instructions.len() * self.nodes.len()) as u64 + 1;

        let mut current = start;
        let mut steps = 0u64;
        for &turn in self.instructions.iter().cycle() {
            if done(current) {
                return Ok(steps);
            }
            if steps > limit {
                return Err(SolveError::Invariant(format!("no exit reachable from {}", start)));
            }
            let (left, right) = self
                .nodes
                .get(current)
                .ok_or_else(|| SolveError::Invariant(format!("unknown node {}", current)))?;
            current = if turn == b'L' { *left } else { *right };
            steps += 1;
        }

        Err(SolveError::Invariant("empty instructions".into()))
    }
}

fn parse_network(input: &str) -> anyhow::Result<Network<'_>> {
    let mut lines = input.lines();
    let instructions = lines
        .next()
        .map(str::trim)
        .filter(|l| !l.is_empty() && l.bytes().all(|b| b == b'L' || b == b'R'))
        .ok_or_else(|| anyhow!("first line must be a non-empty L/R sequence"))?;

    let nodes = lines
        .filter(|l| !l.trim().is_empty())
        .map(|line| -> anyhow::Result<_> {
            let (id, targets) = line
                .split_once(" = ")
                .ok_or_else(|| anyhow!("expected 'ID = (L, R)', got '{}'", line))?;
            let (left, right) = targets
                .trim()
                .strip_prefix('(')
                .and_then(|t| t.strip_suffix(')'))
                .and_then(|t| t.split_once(", "))
                .ok_or_else(|| anyhow!("malformed targets in '{}'", line))?;
            Ok((id.trim(), (left, right)))
        })
        .collect::<anyhow::Result<_>>()?;

    Ok(Network {
        instructions: instructions.as_bytes(),
        nodes,
    })
}

impl AocParser for Day08 {
    type SharedData<'a> = Network<'a>;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        parse_network(input).map_err(ParseError::invalid)
    }
}

impl Solver for Day08 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => shared.steps("AAA", |id| id == "ZZZ").map(|s| s.to_string()),
            2 => {
                let mut starts: Vec<_> = shared
                    .nodes
                    .keys()
                    .copied()
                    .filter(|id| id.ends_with('A'))
                    .collect();
                starts.sort_unstable();

                let cycles = starts
                    .iter()
                    .map(|start| {
                        let steps = shared.steps(start, |id| id.ends_with('Z'))?;
                        i64::try_from(steps).map_err(|e| SolveError::SolveFailed(Box::new(e)))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                log::debug!("cycle lengths {:?}", cycles);

                lcm_all(cycles)
                    .map(|steps| steps.to_string())
                    .map_err(|e| SolveError::SolveFailed(Box::new(e)))
            }
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }

    fn sample(_part: u8) -> Option<&'static str> {
        Some(SAMPLE)
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::new("6", "20659")),
            2 => Some(Expected::new("6", "15690466351717")),
            _ => None,
        }
    }
}

const SAMPLE: &str = "\
LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample() {
        let mut shared = Day08::parse(SAMPLE, ExecutionMode::Sample).unwrap();
        assert_eq!(Day08::solve_part(&mut shared, 1).unwrap(), "6");
        assert_eq!(Day08::solve_part(&mut shared, 2).unwrap(), "6");
    }

    #[test]
    fn test_ghost_paths_use_lcm() {
        let input = "\
LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)
";
        let mut shared = Day08::parse(input, ExecutionMode::Sample).unwrap();
        assert_eq!(Day08::solve_part(&mut shared, 2).unwrap(), "6");
    }

    #[test]
    fn test_unreachable_exit_is_reported() {
        let input = "L\n\nAAA = (AAA, ZZZ)\nZZZ = (ZZZ, ZZZ)\n";
        let mut shared = Day08::parse(input, ExecutionMode::Sample).unwrap();
        assert!(matches!(
            Day08::solve_part(&mut shared, 1),
            Err(SolveError::Invariant(_))
        ));
    }

    #[test]
    fn test_rejects_bad_instructions() {
        assert!(Day08::parse("LXR\n\nAAA = (AAA, AAA)\n", ExecutionMode::Puzzle).is_err());
    }
}
