//! Guard gallivant: follow a patrolling guard and find obstructions that trap it

use crate::utils::{Area, Direction, Point};
use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct Day06;

#[derive(Debug, PartialEq, Eq)]
enum Patrol {
    /// The guard walked off the map; holds every cell it stood on
    Left(Vec<Point>),
    /// The guard came back to a cell facing a direction it already had there
    Looped,
}

#[derive(Debug)]
pub struct Lab {
    area: Area,
    blocked: Vec<bool>,
    start: Point,
    route: Option<Vec<Point>>,
}

impl Lab {
    fn index(&self, point: Point) -> usize {
        point.row as usize * self.area.width() as usize + point.column as usize
    }

    fn is_blocked(&self, point: Point, extra: Option<Point>) -> bool {
        extra == Some(point) || self.blocked[self.index(point)]
    }

    /// Walk from the start, turning right at obstacles; `extra` is one added obstacle
    fn patrol(&self, extra: Option<Point>) -> Patrol {
        // one bit per direction faced on each cell
        let mut seen = vec![0u8; self.blocked.len()];
        let mut position = self.start;
        let mut facing = Direction::Up;

        loop {
            let bit = 1 << facing as u8;
            let cell = &mut seen[self.index(position)];
            if *cell & bit != 0 {
                return Patrol::Looped;
            }
            *cell |= bit;

            let next = position.next(facing);
            if !self.area.contains(next) {
                break;
            }
            if self.is_blocked(next, extra) {
                facing = facing.turn_right();
            } else {
                position = next;
            }
        }

        let visited = self
            .area
            .points()
            .filter(|&p| seen[self.index(p)] != 0)
            .collect();
        Patrol::Left(visited)
    }

    fn route(&mut self) -> Result<&[Point], SolveError> {
        if self.route.is_none() {
            match self.patrol(None) {
                Patrol::Left(route) => self.route = Some(route),
                Patrol::Looped => {
                    return Err(SolveError::Invariant("guard never leaves the lab".into()));
                }
            }
        }
        Ok(self.route.as_deref().unwrap_or_default())
    }
}

impl AocParser for Day06 {
    type SharedData<'a> = Lab;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        let area = Area::from_lines(input).ok_or_else(|| ParseError::MissingData("empty map".into()))?;

        let mut blocked = Vec::with_capacity((area.width() * area.height()) as usize);
        let mut start = None;
        for (row, line) in input.lines().enumerate() {
            if line.len() != area.width() as usize {
                return Err(ParseError::invalid(format!("row {} is not {} wide", row, area.width())));
            }
            for (column, c) in line.chars().enumerate() {
                match c {
                    '#' => blocked.push(true),
                    '.' => blocked.push(false),
                    '^' => {
                        start = Some(Point::new(column as i32, row as i32));
                        blocked.push(false);
                    }
                    other => {
                        return Err(ParseError::invalid(format!("unexpected '{}' in row {}", other, row)));
                    }
                }
            }
        }

        Ok(Lab {
            area,
            blocked,
            start: start.ok_or_else(|| ParseError::MissingData("no guard".into()))?,
            route: None,
        })
    }
}

impl Solver for Day06 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared.route()?.len().to_string()),
            2 => {
                // only cells on the original route can change the guard's path
                let candidates = shared.route()?.to_vec();
                let lab = &*shared;
                let loops = AtomicUsize::new(0);
                candidates
                    .par_iter()
                    .filter(|&&p| p != lab.start)
                    .for_each(|&p| {
                        if lab.patrol(Some(p)) == Patrol::Looped {
                            loops.fetch_add(1, Ordering::Relaxed);
                        }
                    });
                Ok(loops.into_inner().to_string())
            }
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }

    fn sample(_part: u8) -> Option<&'static str> {
        Some(SAMPLE)
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::sample("41")),
            2 => Some(Expected::sample("6")),
            _ => None,
        }
    }
}

const SAMPLE: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample() {
        let mut shared = Day06::parse(SAMPLE, ExecutionMode::Sample).unwrap();
        assert_eq!(Day06::solve_part(&mut shared, 1).unwrap(), "41");
        assert_eq!(Day06::solve_part(&mut shared, 2).unwrap(), "6");
    }

    #[test]
    fn test_known_loop_obstruction() {
        let lab = Day06::parse(SAMPLE, ExecutionMode::Sample).unwrap();
        assert_eq!(lab.patrol(Some(Point::new(3, 6))), Patrol::Looped);
        assert!(matches!(lab.patrol(Some(Point::new(0, 0))), Patrol::Left(_)));
    }

    #[test]
    fn test_trapped_guard_is_an_error() {
        let mut lab = Day06::parse(".#.\n#^#\n.#.\n", ExecutionMode::Puzzle).unwrap();
        assert!(matches!(
            Day06::solve_part(&mut lab, 1),
            Err(SolveError::Invariant(_))
        ));
    }

    #[test]
    fn test_missing_guard() {
        assert!(matches!(
            Day06::parse("...\n.#.\n", ExecutionMode::Puzzle),
            Err(ParseError::MissingData(_))
        ));
    }
}
