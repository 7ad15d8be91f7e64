//! Wait for it: ways to beat the record distance of each boat race

use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};

pub struct Day06;

#[derive(Debug)]
pub struct RaceSheet<'a> {
    times: &'a str,
    distances: &'a str,
}

fn values<'a>(line: Option<&'a str>, label: &str) -> Result<&'a str, ParseError> {
    line.and_then(|l| l.trim().strip_prefix(label))
        .ok_or_else(|| ParseError::MissingData(format!("'{}' line", label)))
}

fn separate(text: &str) -> Result<Vec<u64>, ParseError> {
    text.split_whitespace()
        .map(|n| n.parse().map_err(ParseError::invalid))
        .collect()
}

/// The columns read as one number once the spaces are removed
fn joined(text: &str) -> Result<u64, ParseError> {
    text.split_whitespace()
        .collect::<String>()
        .parse()
        .map_err(ParseError::invalid)
}

/// Hold times `h` in `0..=time` with `h * (time - h) > record`
///
/// The travelled distance is symmetric around `time / 2`, so the first
/// winning hold time is found by binary search and mirrored.
fn ways_to_win(time: u64, record: u64) -> u64 {
    let half = time / 2;
    if half * (time - half) <= record {
        return 0;
    }
    let (mut low, mut high) = (0, half);
    while low < high {
        let mid = (low + high) / 2;
        if mid * (time - mid) > record {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    time + 1 - 2 * low
}

impl AocParser for Day06 {
    type SharedData<'a> = RaceSheet<'a>;

    fn parse<'a>(input: &'a str, _mode: ExecutionMode) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.lines();
        let sheet = RaceSheet {
            times: values(lines.next(), "Time:")?,
            distances: values(lines.next(), "Distance:")?,
        };
        if separate(sheet.times)?.len() != separate(sheet.distances)?.len() {
            return Err(ParseError::invalid("every race needs a time and a distance"));
        }
        Ok(sheet)
    }
}

impl Solver for Day06 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let invalid = |e: ParseError| SolveError::Invariant(e.to_string());
        let answer = match part {
            1 => {
                let times = separate(shared.times).map_err(invalid)?;
                let records = separate(shared.distances).map_err(invalid)?;
                times
                    .into_iter()
                    .zip(records)
                    .map(|(time, record)| ways_to_win(time, record))
                    .product::<u64>()
            }
            2 => ways_to_win(
                joined(shared.times).map_err(invalid)?,
                joined(shared.distances).map_err(invalid)?,
            ),
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(answer.to_string())
    }

    fn sample(_part: u8) -> Option<&'static str> {
        Some(SAMPLE)
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::new("288", "588588")),
            2 => Some(Expected::new("71503", "34655848")),
            _ => None,
        }
    }
}

const SAMPLE: &str = "\
Time:      7  15   30
Distance:  9  40  200
";
