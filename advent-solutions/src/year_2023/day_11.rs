//! Cosmic expansion: galaxy distances after empty rows and columns grow

use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};
use itertools::Itertools;

pub struct Day11;

#[derive(Debug)]
pub struct Universe {
    galaxies: Vec<(i64, i64)>,
    empty_rows: Vec<i64>,
    empty_columns: Vec<i64>,
    /// Growth factor of part two, smaller for the sample
    large_factor: i64,
}

impl Universe {
    fn expanded(&self, factor: i64) -> Vec<(i64, i64)> {
        let grow = |coordinate: i64, empty: &[i64]| {
            let before = empty.partition_point(|&e| e < coordinate) as i64;
            coordinate + before * (factor - 1)
        };
        self.galaxies
            .iter()
            .map(|&(column, row)| {
                (
                    grow(column, self.empty_columns.as_slice()),
                    grow(row, self.empty_rows.as_slice()),
                )
            })
            .collect()
    }

    fn total_distance(&self, factor: i64) -> i64 {
        self.expanded(factor)
            .iter()
            .tuple_combinations()
            .map(|(a, b)| (a.0 - b.0).abs() + (a.1 - b.1).abs())
            .sum()
    }
}

impl AocParser for Day11 {
    type SharedData<'a> = Universe;

    fn parse(input: &str, mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        let lines: Vec<&[u8]> = input
            .lines()
            .filter(|l| !l.is_empty())
            .map(str::as_bytes)
            .collect();
        let width = lines
            .first()
            .map(|l| l.len())
            .ok_or_else(|| ParseError::MissingData("empty image".into()))?;
        if let Some(row) = lines.iter().position(|l| l.len() != width) {
            return Err(ParseError::invalid(format!("row {} is not {} wide", row, width)));
        }

        let mut galaxies = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            for (column, &b) in line.iter().enumerate() {
                match b {
                    b'#' => galaxies.push((column as i64, row as i64)),
                    b'.' => {}
                    other => {
                        return Err(ParseError::invalid(format!(
                            "unexpected '{}' at {},{}",
                            other as char, column, row
                        )));
                    }
                }
            }
        }

        let empty_rows = (0..lines.len())
            .filter(|&r| lines[r].iter().all(|&b| b == b'.'))
            .map(|r| r as i64)
            .collect();
        let empty_columns = (0..width)
            .filter(|&c| lines.iter().all(|l| l[c] == b'.'))
            .map(|c| c as i64)
            .collect();

        Ok(Universe {
            galaxies,
            empty_rows,
            empty_columns,
            large_factor: match mode {
                ExecutionMode::Puzzle => 1_000_000,
                ExecutionMode::Sample => 100,
            },
        })
    }
}

impl Solver for Day11 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let factor = match part {
            1 => 2,
            2 => shared.large_factor,
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(shared.total_distance(factor).to_string())
    }

    fn sample(_part: u8) -> Option<&'static str> {
        Some(SAMPLE)
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::new("374", "9795148")),
            2 => Some(Expected::new("8410", "650672493820")),
            _ => None,
        }
    }
}

const SAMPLE: &str = "\
...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample() {
        let mut shared = Day11::parse(SAMPLE, ExecutionMode::Sample).unwrap();
        assert_eq!(Day11::solve_part(&mut shared, 1).unwrap(), "374");
        assert_eq!(Day11::solve_part(&mut shared, 2).unwrap(), "8410");
        assert_eq!(shared.total_distance(10), 1030);
    }

    #[test]
    fn test_factor_follows_mode() {
        let universe = Day11::parse(SAMPLE, ExecutionMode::Puzzle).unwrap();
        assert_eq!(universe.large_factor, 1_000_000);
        assert_eq!(universe.empty_rows, vec![3, 7]);
        assert_eq!(universe.empty_columns, vec![2, 5, 8]);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(Day11::parse("#..\n#.\n", ExecutionMode::Puzzle).is_err());
    }
}
