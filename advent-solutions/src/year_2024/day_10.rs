//! Hoof it: count the hiking trails climbing from height 0 to height 9

use crate::utils::{Area, Direction, Point};
use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};
use std::collections::HashSet;

pub struct Day10;

const TRAILHEAD: u8 = 0;
const PEAK: u8 = 9;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct TrailStats {
    /// Distinct peaks reachable, summed over trailheads
    score: usize,
    /// Distinct trails, summed over trailheads
    rating: usize,
}

#[derive(Debug)]
pub struct TopographicMap {
    area: Area,
    heights: Vec<Option<u8>>,
    stats: Option<TrailStats>,
}

impl TopographicMap {
    fn height(&self, point: Point) -> Option<u8> {
        if !self.area.contains(point) {
            return None;
        }
        self.heights[point.row as usize * self.area.width() as usize + point.column as usize]
    }

    /// Explicit-stack search from one trailhead. Every stack entry is a
    /// distinct partial trail, so each arrival at a peak is a distinct trail.
    fn explore(&self, trailhead: Point) -> TrailStats {
        let mut peaks = HashSet::new();
        let mut trails = 0;
        let mut stack = vec![(trailhead, TRAILHEAD)];

        while let Some((point, height)) = stack.pop() {
            if height == PEAK {
                peaks.insert(point);
                trails += 1;
                continue;
            }
            stack.extend(
                Direction::ALL
                    .into_iter()
                    .map(|d| point.next(d))
                    .filter(|&next| self.height(next) == Some(height + 1))
                    .map(|next| (next, height + 1)),
            );
        }

        TrailStats {
            score: peaks.len(),
            rating: trails,
        }
    }

    fn stats(&mut self) -> TrailStats {
        if let Some(stats) = self.stats {
            return stats;
        }
        let stats = self
            .area
            .points()
            .filter(|&p| self.height(p) == Some(TRAILHEAD))
            .map(|p| self.explore(p))
            .fold(TrailStats::default(), |acc, s| TrailStats {
                score: acc.score + s.score,
                rating: acc.rating + s.rating,
            });
        self.stats = Some(stats);
        stats
    }
}

impl AocParser for Day10 {
    type SharedData<'a> = TopographicMap;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        let area = Area::from_lines(input).ok_or_else(|| ParseError::MissingData("empty map".into()))?;
        let mut heights = Vec::with_capacity((area.width() * area.height()) as usize);
        for (row, line) in input.lines().enumerate() {
            if line.len() != area.width() as usize {
                return Err(ParseError::invalid(format!("row {} is not {} wide", row, area.width())));
            }
            for c in line.chars() {
                // '.' marks impassable tiles in some examples
                heights.push(match c {
                    '.' => None,
                    c => Some(c.to_digit(10).ok_or_else(|| {
                        ParseError::invalid(format!("unexpected '{}' in row {}", c, row))
                    })? as u8),
                });
            }
        }

        Ok(TopographicMap {
            area,
            heights,
            stats: None,
        })
    }
}

impl Solver for Day10 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let stats = shared.stats();
        match part {
            1 => Ok(stats.score.to_string()),
            2 => Ok(stats.rating.to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }

    fn sample(_part: u8) -> Option<&'static str> {
        Some(SAMPLE)
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::sample("36")),
            2 => Some(Expected::sample("81")),
            _ => None,
        }
    }
}

const SAMPLE: &str = "\
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Day10::parse(input, ExecutionMode::Sample).unwrap();
        Day10::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn test_sample() {
        assert_eq!(solve(SAMPLE, 1), "36");
        assert_eq!(solve(SAMPLE, 2), "81");
    }

    #[test]
    fn test_single_trail() {
        let input = "\
0123
1234
8765
9876
";
        assert_eq!(solve(input, 1), "1");
        assert_eq!(solve(input, 2), "16");
    }

    #[test]
    fn test_impassable_tiles() {
        let input = "\
...0...
...1...
...2...
6543456
7.....7
8.....8
9.....9
";
        assert_eq!(solve(input, 1), "2");
        assert_eq!(solve(input, 2), "2");
    }
}
