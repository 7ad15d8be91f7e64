//! Trebuchet calibration: first and last digit of every line

use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};
use regex::Regex;

pub struct Day01;

pub struct Calibration<'a> {
    lines: Vec<&'a str>,
    digit: Regex,
    digit_or_word: Regex,
}

const WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

fn value_of(token: &str) -> Option<u32> {
    token
        .parse()
        .ok()
        .or_else(|| WORDS.iter().position(|w| *w == token).map(|i| i as u32 + 1))
}

/// Every digit in `line`, matching at each offset so spelled digits may overlap ("eighthree")
fn digits<'a>(line: &'a str, pattern: &'a Regex) -> impl Iterator<Item = u32> + 'a {
    (0..line.len())
        .filter_map(move |i| line.get(i..))
        .filter_map(move |rest| pattern.find(rest))
        .filter_map(|m| value_of(m.as_str()))
}

fn calibration_sum(lines: &[&str], pattern: &Regex) -> Result<u32, SolveError> {
    lines.iter().try_fold(0, |sum, line| {
        let mut found = digits(line, pattern);
        let first = found
            .next()
            .ok_or_else(|| SolveError::Invariant(format!("no digit in line '{}'", line)))?;
        let last = found.last().unwrap_or(first);
        Ok(sum + first * 10 + last)
    })
}

impl AocParser for Day01 {
    type SharedData<'a> = Calibration<'a>;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        let lines: Vec<_> = input.lines().filter(|l| !l.trim().is_empty()).collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("no calibration lines".into()));
        }

        let words = WORDS.join("|");
        Ok(Calibration {
            lines,
            digit: Regex::new(r"^\d").map_err(ParseError::invalid)?,
            digit_or_word: Regex::new(&format!(r"^(?:\d|{})", words))
                .map_err(ParseError::invalid)?,
        })
    }
}

impl Solver for Day01 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let pattern = match part {
            1 => &shared.digit,
            2 => &shared.digit_or_word,
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        calibration_sum(&shared.lines, pattern).map(|sum| sum.to_string())
    }

    fn sample(part: u8) -> Option<&'static str> {
        match part {
            1 => Some(SAMPLE_ONE),
            _ => Some(SAMPLE_TWO),
        }
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::sample("142")),
            2 => Some(Expected::sample("281")),
            _ => None,
        }
    }
}

const SAMPLE_ONE: &str = "\
1abc2
pqr3stu8vwx
a1b2c3d4e5f
treb7uchet
";

const SAMPLE_TWO: &str = "\
two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen
";

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Day01::parse(input, ExecutionMode::Sample).unwrap();
        Day01::solve_part_checked_range(&mut shared, part).unwrap()
    }

    #[test]
    fn test_samples() {
        assert_eq!(solve(SAMPLE_ONE, 1), "142");
        assert_eq!(solve(SAMPLE_TWO, 2), "281");
    }

    #[test]
    fn test_overlapping_words() {
        assert_eq!(solve("eighthree", 2), "83");
        assert_eq!(solve("sevenine", 2), "79");
    }

    #[test]
    fn test_single_digit_counts_twice() {
        assert_eq!(solve("treb7uchet", 1), "77");
    }

    #[test]
    fn test_line_without_digit_fails() {
        let mut shared = Day01::parse("abc", ExecutionMode::Sample).unwrap();
        assert!(matches!(
            Day01::solve_part(&mut shared, 1),
            Err(SolveError::Invariant(_))
        ));
    }
}
