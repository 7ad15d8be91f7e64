//! Restroom redoubt: robots wrapping around a floor

use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};
use rayon::prelude::*;
use regex::Regex;

pub struct Day14;

/// Seconds scanned when looking for the picture
const SEARCH_SECONDS: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Robot {
    position: (i64, i64),
    velocity: (i64, i64),
}

#[derive(Debug)]
pub struct Floor {
    width: i64,
    height: i64,
    robots: Vec<Robot>,
}

impl Floor {
    fn positions(&self, seconds: u32) -> impl Iterator<Item = (i64, i64)> + '_ {
        let t = i64::from(seconds);
        self.robots.iter().map(move |r| {
            (
                (r.position.0 + r.velocity.0 * t).rem_euclid(self.width),
                (r.position.1 + r.velocity.1 * t).rem_euclid(self.height),
            )
        })
    }

    /// Product of the robot counts per quadrant; the middle lines count for none
    fn safety_factor(&self, seconds: u32) -> u64 {
        let (mid_x, mid_y) = (self.width / 2, self.height / 2);
        let mut quadrants = [0u64; 4];
        for (x, y) in self.positions(seconds) {
            if x == mid_x || y == mid_y {
                continue;
            }
            quadrants[usize::from(x > mid_x) + 2 * usize::from(y > mid_y)] += 1;
        }
        quadrants.iter().product()
    }

    /// `n^2` times the positional variance, exact in integers
    fn spread(&self, seconds: u32) -> i64 {
        let n = self.robots.len() as i64;
        let (mut sx, mut sy, mut sxx, mut syy) = (0, 0, 0, 0);
        for (x, y) in self.positions(seconds) {
            sx += x;
            sy += y;
            sxx += x * x;
            syy += y * y;
        }
        (n * sxx - sx * sx) + (n * syy - sy * sy)
    }

    fn render(&self, seconds: u32) -> String {
        let mut rows = vec![vec!['.'; self.width as usize]; self.height as usize];
        for (x, y) in self.positions(seconds) {
            rows[y as usize][x as usize] = 'X';
        }
        rows.into_iter()
            .map(|r| r.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl AocParser for Day14 {
    type SharedData<'a> = Floor;

    fn parse(input: &str, mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        let (width, height) = if mode.is_sample() { (11, 7) } else { (101, 103) };
        let pattern = Regex::new(r"^p=(-?\d+),(-?\d+) v=(-?\d+),(-?\d+)$").map_err(ParseError::invalid)?;

        let robots = input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| {
                let caps = pattern
                    .captures(line)
                    .ok_or_else(|| ParseError::invalid(format!("not a robot: '{}'", line)))?;
                let (_, [px, py, vx, vy]) = caps.extract();
                let number = |s: &str| s.parse::<i64>().map_err(ParseError::invalid);
                Ok(Robot {
                    position: (number(px)?, number(py)?),
                    velocity: (number(vx)?, number(vy)?),
                })
            })
            .collect::<Result<Vec<_>, ParseError>>()?;

        if robots.is_empty() {
            return Err(ParseError::MissingData("no robots".into()));
        }
        Ok(Floor {
            width,
            height,
            robots,
        })
    }
}

impl Solver for Day14 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared.safety_factor(100).to_string()),
            2 => {
                let floor = &*shared;
                let (_, seconds) = (0..SEARCH_SECONDS)
                    .into_par_iter()
                    .map(|s| (floor.spread(s), s))
                    .min()
                    .ok_or_else(|| SolveError::Invariant("empty search".into()))?;
                log::debug!("tightest arrangement after {}s:\n{}", seconds, floor.render(seconds));
                Ok(seconds.to_string())
            }
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }

    fn sample(part: u8) -> Option<&'static str> {
        // the picture only appears on the full-size floor
        match part {
            1 => Some(SAMPLE),
            _ => None,
        }
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::new("12", "226236192")),
            2 => Some(Expected::puzzle("8168")),
            _ => None,
        }
    }
}

const SAMPLE: &str = "\
p=0,4 v=3,-3
p=6,3 v=-1,-3
p=10,3 v=-1,2
p=2,0 v=2,-1
p=0,0 v=1,3
p=3,0 v=-2,-2
p=7,6 v=-1,-3
p=3,0 v=-1,-2
p=9,3 v=2,3
p=7,3 v=-1,2
p=2,4 v=2,-3
p=9,5 v=-3,-3
";
