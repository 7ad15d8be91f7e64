//! Resonant collinearity: antinodes of same-frequency antenna pairs

use crate::utils::{Area, Point};
use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};
use itertools::Itertools;
use std::collections::{HashMap, HashSet};

pub struct Day08;

#[derive(Debug)]
pub struct Roof {
    area: Area,
    frequencies: HashMap<char, Vec<Point>>,
}

impl Roof {
    /// Points `from + k * (from - other)` inside the roof, for `k` in `steps`
    fn line_from(&self, from: Point, other: Point, steps: impl Iterator<Item = i32>) -> Vec<Point> {
        let (dc, dr) = (from.column - other.column, from.row - other.row);
        steps
            .map(|k| Point::new(from.column + k * dc, from.row + k * dr))
            .take_while(|p| self.area.contains(*p))
            .collect()
    }

    fn antinodes(&self, with_harmonics: bool) -> HashSet<Point> {
        self.frequencies
            .values()
            .flat_map(|antennas| antennas.iter().permutations(2))
            .flat_map(|pair| {
                let (&from, &other) = (pair[0], pair[1]);
                if with_harmonics {
                    self.line_from(from, other, 0..)
                } else {
                    self.line_from(from, other, 1..=1)
                }
            })
            .collect()
    }
}

impl AocParser for Day08 {
    type SharedData<'a> = Roof;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        let area = Area::from_lines(input).ok_or_else(|| ParseError::MissingData("empty map".into()))?;
        let mut frequencies: HashMap<char, Vec<Point>> = HashMap::new();
        for (row, line) in input.lines().enumerate() {
            if line.len() != area.width() as usize {
                return Err(ParseError::invalid(format!("row {} is not {} wide", row, area.width())));
            }
            // anything but letters and digits is open roof
            for (column, c) in line.chars().enumerate().filter(|(_, c)| c.is_ascii_alphanumeric()) {
                frequencies
                    .entry(c)
                    .or_default()
                    .push(Point::new(column as i32, row as i32));
            }
        }
        Ok(Roof { area, frequencies })
    }
}

impl Solver for Day08 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let antinodes = match part {
            1 => shared.antinodes(false),
            2 => shared.antinodes(true),
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        log::debug!(
            "\n{}",
            shared.area.render(|p| if antinodes.contains(&p) { '#' } else { '.' })
        );
        Ok(antinodes.len().to_string())
    }

    fn sample(_part: u8) -> Option<&'static str> {
        Some(SAMPLE)
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::sample("14")),
            2 => Some(Expected::sample("34")),
            _ => None,
        }
    }
}

const SAMPLE: &str = "\
............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";
