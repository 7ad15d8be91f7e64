//! Cube conundrum: which games fit a bag of 12 red, 13 green and 14 blue cubes

use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};

pub struct Day02;

/// Cubes of each color shown in one handful
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CubeSet {
    red: u32,
    green: u32,
    blue: u32,
}

impl CubeSet {
    const BAG: CubeSet = CubeSet {
        red: 12,
        green: 13,
        blue: 14,
    };

    fn fits_in(&self, bag: &CubeSet) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    fn max(self, other: CubeSet) -> CubeSet {
        CubeSet {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn power(&self) -> u32 {
        self.red * self.green * self.blue
    }
}

#[derive(Debug)]
pub struct Game {
    id: u32,
    handfuls: Vec<CubeSet>,
}

impl Game {
    fn minimum(&self) -> CubeSet {
        self.handfuls.iter().fold(CubeSet::default(), |acc, set| acc.max(*set))
    }
}

fn parse_handful(text: &str) -> Result<CubeSet, ParseError> {
    let mut set = CubeSet::default();
    for entry in text.split(',') {
        let (count, color) = entry
            .trim()
            .split_once(' ')
            .ok_or_else(|| ParseError::invalid(format!("expected '<count> <color>', got '{}'", entry)))?;
        let count: u32 = count.parse().map_err(ParseError::invalid)?;
        match color {
            "red" => set.red = count,
            "green" => set.green = count,
            "blue" => set.blue = count,
            other => return Err(ParseError::invalid(format!("unknown color '{}'", other))),
        }
    }
    Ok(set)
}

fn parse_game(line: &str) -> Result<Game, ParseError> {
    let (header, content) = line
        .split_once(':')
        .ok_or_else(|| ParseError::invalid(format!("missing ':' in '{}'", line)))?;
    let id = header
        .trim()
        .strip_prefix("Game ")
        .ok_or_else(|| ParseError::invalid(format!("expected 'Game <id>', got '{}'", header)))?
        .parse()
        .map_err(ParseError::invalid)?;
    let handfuls = content
        .split(';')
        .filter(|h| !h.trim().is_empty())
        .map(parse_handful)
        .collect::<Result<_, _>>()?;
    Ok(Game { id, handfuls })
}

impl AocParser for Day02 {
    type SharedData<'a> = Vec<Game>;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(parse_game)
            .collect()
    }
}

impl Solver for Day02 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let answer: u32 = match part {
            1 => shared
                .iter()
                .filter(|g| g.handfuls.iter().all(|h| h.fits_in(&CubeSet::BAG)))
                .map(|g| g.id)
                .sum(),
            2 => shared.iter().map(|g| g.minimum().power()).sum(),
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(answer.to_string())
    }

    fn sample(_part: u8) -> Option<&'static str> {
        Some(SAMPLE)
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::sample("8")),
            2 => Some(Expected::sample("2286")),
            _ => None,
        }
    }
}

const SAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample() {
        let mut shared = Day02::parse(SAMPLE, ExecutionMode::Sample).unwrap();
        assert_eq!(Day02::solve_part(&mut shared, 1).unwrap(), "8");
        assert_eq!(Day02::solve_part(&mut shared, 2).unwrap(), "2286");
    }

    #[test]
    fn test_minimum_set() {
        let games = Day02::parse(SAMPLE, ExecutionMode::Sample).unwrap();
        assert_eq!(
            games[0].minimum(),
            CubeSet {
                red: 4,
                green: 2,
                blue: 6
            }
        );
    }

    #[test]
    fn test_unknown_color() {
        assert!(Day02::parse("Game 1: 3 purple", ExecutionMode::Puzzle).is_err());
    }
}
