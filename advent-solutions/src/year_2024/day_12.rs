//! Garden groups: fence prices by perimeter, then by number of sides

use crate::utils::{Area, Direction, Point};
use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};
use std::collections::HashSet;

pub struct Day12;

#[derive(Debug)]
struct Region {
    plant: char,
    plots: HashSet<Point>,
}

impl Region {
    fn perimeter(&self) -> usize {
        self.plots
            .iter()
            .map(|p| {
                Direction::ALL
                    .into_iter()
                    .filter(|&d| !self.plots.contains(&p.next(d)))
                    .count()
            })
            .sum()
    }

    /// A polygon has as many sides as corners. Each plot contributes one
    /// corner per pair of adjacent directions that is either fenced on both
    /// sides (outer) or open on both sides with the diagonal fenced (inner).
    fn sides(&self) -> usize {
        self.plots
            .iter()
            .map(|&p| {
                Direction::ALL
                    .into_iter()
                    .filter(|&d| {
                        let side = p.next(d);
                        let other = p.next(d.turn_right());
                        let diagonal = side.next(d.turn_right());
                        match (self.plots.contains(&side), self.plots.contains(&other)) {
                            (false, false) => true,
                            (true, true) => !self.plots.contains(&diagonal),
                            _ => false,
                        }
                    })
                    .count()
            })
            .sum()
    }
}

#[derive(Debug)]
pub struct Garden {
    regions: Vec<Region>,
}

fn regions(area: Area, plants: &[char]) -> Vec<Region> {
    let plant_at = |p: Point| (p.row * area.width() + p.column) as usize;
    let mut seen = vec![false; plants.len()];
    let mut regions = Vec::new();

    for start in area.points() {
        if seen[plant_at(start)] {
            continue;
        }
        let plant = plants[plant_at(start)];
        seen[plant_at(start)] = true;
        let mut plots = HashSet::from([start]);
        let mut stack = vec![start];
        while let Some(point) = stack.pop() {
            for next in Direction::ALL.into_iter().map(|d| point.next(d)) {
                if area.contains(next) && !seen[plant_at(next)] && plants[plant_at(next)] == plant {
                    seen[plant_at(next)] = true;
                    plots.insert(next);
                    stack.push(next);
                }
            }
        }
        regions.push(Region { plant, plots });
    }
    regions
}

impl AocParser for Day12 {
    type SharedData<'a> = Garden;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        let area = Area::from_lines(input).ok_or_else(|| ParseError::MissingData("empty garden".into()))?;
        let mut plants = Vec::with_capacity((area.width() * area.height()) as usize);
        for (row, line) in input.lines().enumerate() {
            if line.chars().count() != area.width() as usize {
                return Err(ParseError::invalid(format!("row {} is not {} wide", row, area.width())));
            }
            plants.extend(line.chars());
        }
        let regions = regions(area, &plants);
        log::debug!("{} regions", regions.len());
        Ok(Garden { regions })
    }
}

impl Solver for Day12 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let price: usize = match part {
            1 => shared.regions.iter().map(|r| r.plots.len() * r.perimeter()).sum(),
            2 => shared.regions.iter().map(|r| r.plots.len() * r.sides()).sum(),
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(price.to_string())
    }

    fn sample(_part: u8) -> Option<&'static str> {
        Some(SAMPLE)
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::new("1930", "1421958")),
            2 => Some(Expected::sample("1206")),
            _ => None,
        }
    }
}

const SAMPLE: &str = "\
RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE
";

#[cfg(test)]
mod tests {
    use super::*;

    fn garden(text: &str) -> Garden {
        Day12::parse(text, ExecutionMode::Puzzle).unwrap()
    }

    #[test]
    fn test_sample() {
        let mut shared = Day12::parse(SAMPLE, ExecutionMode::Sample).unwrap();
        assert_eq!(shared.regions.len(), 11);
        assert_eq!(Day12::solve_part(&mut shared, 1).unwrap(), "1930");
        assert_eq!(Day12::solve_part(&mut shared, 2).unwrap(), "1206");
    }

    #[test]
    fn test_small_garden() {
        let mut shared = garden("AAAA\nBBCD\nBBCC\nEEEC\n");
        assert_eq!(Day12::solve_part(&mut shared, 1).unwrap(), "140");
        assert_eq!(Day12::solve_part(&mut shared, 2).unwrap(), "80");
    }

    #[test]
    fn test_enclosed_regions_count_inner_sides() {
        let mut shared = garden("EEEEE\nEXXXX\nEEEEE\nEXXXX\nEEEEE\n");
        assert_eq!(Day12::solve_part(&mut shared, 2).unwrap(), "236");

        let mut shared = garden("AAAAAA\nAAABBA\nAAABBA\nABBAAA\nABBAAA\nAAAAAA\n");
        assert_eq!(Day12::solve_part(&mut shared, 2).unwrap(), "368");
    }

    #[test]
    fn test_same_plant_apart_is_two_regions() {
        let shared = garden("ABA\n");
        let plants: Vec<char> = shared.regions.iter().map(|r| r.plant).collect();
        assert_eq!(plants, vec!['A', 'B', 'A']);
    }
}
