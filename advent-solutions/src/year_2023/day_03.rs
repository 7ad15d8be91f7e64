//! Gear ratios: part numbers next to engine symbols

use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};
use regex::Regex;

pub struct Day03;

#[derive(Debug)]
struct PartNumber {
    value: u32,
    row: i32,
    first: i32,
    last: i32,
}

impl PartNumber {
    fn touches(&self, symbol: &Symbol) -> bool {
        (symbol.row - self.row).abs() <= 1 && (self.first - 1..=self.last + 1).contains(&symbol.column)
    }
}

#[derive(Debug)]
struct Symbol {
    name: char,
    row: i32,
    column: i32,
}

#[derive(Debug)]
pub struct Schematic {
    numbers: Vec<PartNumber>,
    symbols: Vec<Symbol>,
}

impl AocParser for Day03 {
    type SharedData<'a> = Schematic;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        let digits = Regex::new(r"\d+").map_err(ParseError::invalid)?;
        let mut numbers = Vec::new();
        let mut symbols = Vec::new();

        for (row, line) in input.lines().enumerate() {
            let row = row as i32;
            for m in digits.find_iter(line) {
                numbers.push(PartNumber {
                    value: m.as_str().parse().map_err(ParseError::invalid)?,
                    row,
                    first: m.start() as i32,
                    last: m.end() as i32 - 1,
                });
            }
            symbols.extend(
                line.char_indices()
                    .filter(|(_, c)| *c != '.' && !c.is_ascii_digit() && !c.is_whitespace())
                    .map(|(column, name)| Symbol {
                        name,
                        row,
                        column: column as i32,
                    }),
            );
        }

        Ok(Schematic { numbers, symbols })
    }
}

impl Solver for Day03 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let answer: u32 = match part {
            1 => shared
                .numbers
                .iter()
                .filter(|n| shared.symbols.iter().any(|s| n.touches(s)))
                .map(|n| n.value)
                .sum(),
            2 => shared
                .symbols
                .iter()
                .filter(|s| s.name == '*')
                .filter_map(|gear| {
                    let adjacent: Vec<u32> = shared
                        .numbers
                        .iter()
                        .filter(|n| n.touches(gear))
                        .map(|n| n.value)
                        .collect();
                    (adjacent.len() == 2).then(|| adjacent[0] * adjacent[1])
                })
                .sum(),
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(answer.to_string())
    }

    fn sample(_part: u8) -> Option<&'static str> {
        Some(SAMPLE)
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::sample("4361")),
            2 => Some(Expected::sample("467835")),
            _ => None,
        }
    }
}

const SAMPLE: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";
