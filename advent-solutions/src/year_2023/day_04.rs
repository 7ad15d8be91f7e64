//! Scratchcards: points per card, then cards won as copies of the following ones

use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};
use std::collections::HashSet;

pub struct Day04;

fn numbers(text: &str) -> Result<HashSet<u32>, ParseError> {
    text.split_whitespace()
        .map(|n| n.parse().map_err(ParseError::invalid))
        .collect()
}

/// How many picked numbers of a card are winning numbers
fn parse_matches(line: &str) -> Result<usize, ParseError> {
    let (_, content) = line
        .split_once(':')
        .ok_or_else(|| ParseError::invalid(format!("missing ':' in '{}'", line)))?;
    let (winning, picked) = content
        .split_once('|')
        .ok_or_else(|| ParseError::invalid(format!("missing '|' in '{}'", line)))?;
    Ok(numbers(winning)?.intersection(&numbers(picked)?).count())
}

impl AocParser for Day04 {
    type SharedData<'a> = Vec<usize>;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(parse_matches)
            .collect()
    }
}

/// Original plus won copies; a card never wins past the end of the table
fn total_cards(matches: &[usize]) -> u64 {
    let mut copies = vec![1u64; matches.len()];
    for (i, &won) in matches.iter().enumerate() {
        let end = (i + 1 + won).min(matches.len());
        for j in i + 1..end {
            copies[j] += copies[i];
        }
    }
    copies.iter().sum()
}

impl Solver for Day04 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let answer: u64 = match part {
            1 => shared
                .iter()
                .filter(|&&m| m > 0)
                .map(|&m| 1u64 << (m - 1))
                .sum(),
            2 => total_cards(shared),
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(answer.to_string())
    }

    fn sample(_part: u8) -> Option<&'static str> {
        Some(SAMPLE)
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::sample("13")),
            2 => Some(Expected::sample("30")),
            _ => None,
        }
    }
}

const SAMPLE: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample() {
        let mut shared = Day04::parse(SAMPLE, ExecutionMode::Sample).unwrap();
        assert_eq!(shared, vec![4, 2, 2, 1, 0, 0]);
        assert_eq!(Day04::solve_part(&mut shared, 1).unwrap(), "13");
        assert_eq!(Day04::solve_part(&mut shared, 2).unwrap(), "30");
    }

    #[test]
    fn test_wins_are_clamped_to_the_table() {
        assert_eq!(total_cards(&[5, 1]), 3);
    }
}
