//! Print queue: page ordering rules and the updates that break them

use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};
use std::cmp::Ordering;
use std::collections::HashSet;

pub struct Day05;

#[derive(Debug)]
pub struct PrintQueue {
    /// `(before, after)` pairs
    rules: HashSet<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl PrintQueue {
    fn compare(&self, a: u32, b: u32) -> Ordering {
        if self.rules.contains(&(a, b)) {
            Ordering::Less
        } else if self.rules.contains(&(b, a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn is_ordered(&self, pages: &[u32]) -> bool {
        pages.iter().enumerate().all(|(i, &later)| {
            pages[..i]
                .iter()
                .all(|&earlier| !self.rules.contains(&(later, earlier)))
        })
    }
}

fn middle(pages: &[u32]) -> Result<u32, SolveError> {
    if pages.len() % 2 == 0 {
        return Err(SolveError::Invariant(format!("update {:?} has no middle page", pages)));
    }
    Ok(pages[pages.len() / 2])
}

fn numbers(line: &str, separator: char) -> Result<Vec<u32>, ParseError> {
    line.split(separator)
        .map(|n| n.trim().parse().map_err(ParseError::invalid))
        .collect()
}

impl AocParser for Day05 {
    type SharedData<'a> = PrintQueue;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        let input = input.replace("\r\n", "\n");
        let (rules, updates) = input
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("blank line between rules and updates".into()))?;

        let rules = rules
            .lines()
            .map(|line| match numbers(line, '|')?.as_slice() {
                &[before, after] => Ok((before, after)),
                _ => Err(ParseError::invalid(format!("rule '{}' needs two pages", line))),
            })
            .collect::<Result<_, _>>()?;
        let updates = updates
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|line| numbers(line, ','))
            .collect::<Result<_, _>>()?;

        Ok(PrintQueue { rules, updates })
    }
}

impl Solver for Day05 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let reorder = match part {
            1 => false,
            2 => true,
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        let mut sum = 0;
        for pages in &shared.updates {
            match (reorder, shared.is_ordered(pages)) {
                (false, true) => sum += middle(pages)?,
                (true, false) => {
                    let mut sorted = pages.clone();
                    sorted.sort_by(|&a, &b| shared.compare(a, b));
                    log::debug!("{:?} => {:?}", pages, sorted);
                    sum += middle(&sorted)?;
                }
                _ => {}
            }
        }
        Ok(sum.to_string())
    }

    fn sample(_part: u8) -> Option<&'static str> {
        Some(SAMPLE)
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::new("143", "4578")),
            2 => Some(Expected::new("123", "6179")),
            _ => None,
        }
    }
}

const SAMPLE: &str = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";
