//! Ceres search: find XMAS in a letter grid, then MAS crossed in an X

use crate::utils::{Area, Point};
use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};

pub struct Day04;

/// Column and row steps of the eight reading directions
const DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

#[derive(Debug)]
pub struct WordSearch {
    area: Area,
    letters: Vec<u8>,
}

impl WordSearch {
    fn at(&self, point: Point) -> Option<u8> {
        self.area
            .contains(point)
            .then(|| self.letters[(point.row * self.area.width() + point.column) as usize])
    }

    fn reads(&self, start: Point, (dc, dr): (i32, i32), word: &[u8]) -> bool {
        word.iter().enumerate().all(|(i, &letter)| {
            let i = i as i32;
            self.at(Point::new(start.column + dc * i, start.row + dr * i)) == Some(letter)
        })
    }

    fn count_word(&self, word: &[u8]) -> usize {
        self.area
            .points()
            .map(|p| DIRECTIONS.iter().filter(|&&d| self.reads(p, d, word)).count())
            .sum()
    }

    /// `A` centres with `M` and `S` at opposite ends of both diagonals
    fn is_cross(&self, centre: Point) -> bool {
        let corner = |dc, dr| self.at(Point::new(centre.column + dc, centre.row + dr));
        let diagonal_ok = |a: Option<u8>, b: Option<u8>| {
            matches!((a, b), (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M')))
        };
        self.at(centre) == Some(b'A')
            && diagonal_ok(corner(-1, -1), corner(1, 1))
            && diagonal_ok(corner(1, -1), corner(-1, 1))
    }
}

impl AocParser for Day04 {
    type SharedData<'a> = WordSearch;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        let area = Area::from_lines(input).ok_or_else(|| ParseError::MissingData("empty grid".into()))?;
        let mut letters = Vec::with_capacity((area.width() * area.height()) as usize);
        for (row, line) in input.lines().enumerate() {
            if line.len() != area.width() as usize {
                return Err(ParseError::invalid(format!("row {} is not {} wide", row, area.width())));
            }
            letters.extend_from_slice(line.as_bytes());
        }
        Ok(WordSearch { area, letters })
    }
}

impl Solver for Day04 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let count = match part {
            1 => shared.count_word(b"XMAS"),
            2 => shared.area.points().filter(|&p| shared.is_cross(p)).count(),
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(count.to_string())
    }

    fn sample(_part: u8) -> Option<&'static str> {
        Some(SAMPLE)
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::sample("18")),
            2 => Some(Expected::sample("9")),
            _ => None,
        }
    }
}

const SAMPLE: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample() {
        let mut shared = Day04::parse(SAMPLE, ExecutionMode::Sample).unwrap();
        assert_eq!(Day04::solve_part(&mut shared, 1).unwrap(), "18");
        assert_eq!(Day04::solve_part(&mut shared, 2).unwrap(), "9");
    }

    #[test]
    fn test_every_direction_counts() {
        let grid = "XMAS\nMM..\nA.A.\nS..S\n";
        let mut shared = Day04::parse(grid, ExecutionMode::Puzzle).unwrap();
        assert_eq!(Day04::solve_part(&mut shared, 1).unwrap(), "3");
    }

    #[test]
    fn test_cross_needs_both_diagonals() {
        let mut shared = Day04::parse("M.S\n.A.\nM.S\n", ExecutionMode::Puzzle).unwrap();
        assert_eq!(Day04::solve_part(&mut shared, 2).unwrap(), "1");
        let mut shared = Day04::parse("M.M\n.A.\nM.S\n", ExecutionMode::Puzzle).unwrap();
        assert_eq!(Day04::solve_part(&mut shared, 2).unwrap(), "0");
    }

    #[test]
    fn test_ragged_grid() {
        assert!(Day04::parse("XMAS\nXM\n", ExecutionMode::Puzzle).is_err());
    }
}
