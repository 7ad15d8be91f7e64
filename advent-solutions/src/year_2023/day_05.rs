//! Seed almanac: push seeds, then whole seed ranges, through seven layered maps

use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};
use anyhow::{Context, anyhow};
use rayon::prelude::*;
use std::ops::Range;

pub struct Day05;

/// `source..source + len` maps onto `destination..`
#[derive(Debug, Clone, Copy)]
struct Mapping {
    destination: i64,
    source: i64,
    len: i64,
}

impl Mapping {
    fn source_range(&self) -> Range<i64> {
        self.source..self.source + self.len
    }

    fn offset(&self) -> i64 {
        self.destination - self.source
    }
}

/// One `x-to-y map:` block
#[derive(Debug)]
struct Layer {
    name: String,
    mappings: Vec<Mapping>,
}

impl Layer {
    fn translate(&self, value: i64) -> i64 {
        self.mappings
            .iter()
            .find(|m| m.source_range().contains(&value))
            .map_or(value, |m| value + m.offset())
    }

    /// Map a set of ranges, splitting each where mappings begin and end
    fn translate_ranges(&self, ranges: Vec<Range<i64>>) -> Vec<Range<i64>> {
        let mut mapped = Vec::new();
        let mut pending = ranges;

        for mapping in &self.mappings {
            let source = mapping.source_range();
            let mut unmapped = Vec::new();
            for range in pending {
                let start = range.start.max(source.start);
                let end = range.end.min(source.end);
                if start >= end {
                    unmapped.push(range);
                    continue;
                }
                mapped.push(start + mapping.offset()..end + mapping.offset());
                if range.start < start {
                    unmapped.push(range.start..start);
                }
                if end < range.end {
                    unmapped.push(end..range.end);
                }
            }
            pending = unmapped;
        }

        mapped.extend(pending);
        mapped
    }
}

#[derive(Debug)]
pub struct Almanac {
    seeds: Vec<i64>,
    layers: Vec<Layer>,
}

impl Almanac {
    fn location(&self, seed: i64) -> i64 {
        self.layers.iter().fold(seed, |value, layer| layer.translate(value))
    }

    fn lowest_location(&self, range: Range<i64>) -> Option<i64> {
        self.layers
            .iter()
            .fold(vec![range], |ranges, layer| layer.translate_ranges(ranges))
            .into_iter()
            .filter(|r| !r.is_empty())
            .map(|r| r.start)
            .min()
    }
}

fn numbers(text: &str) -> anyhow::Result<Vec<i64>> {
    text.split_whitespace()
        .map(|n| n.parse().with_context(|| format!("invalid number '{}'", n)))
        .collect()
}

fn parse_almanac(input: &str) -> anyhow::Result<Almanac> {
    let mut blocks = input.split("\n\n");
    let seeds = blocks
        .next()
        .and_then(|line| line.trim().strip_prefix("seeds:"))
        .ok_or_else(|| anyhow!("first line must list the seeds"))?;
    let seeds = numbers(seeds)?;

    let layers = blocks
        .filter(|block| !block.trim().is_empty())
        .map(|block| -> anyhow::Result<Layer> {
            let mut lines = block.trim().lines();
            let header = lines.next().unwrap_or_default();
            let name = header
                .strip_suffix(" map:")
                .ok_or_else(|| anyhow!("expected a map header, got '{}'", header))?;
            let mappings = lines
                .map(|line| -> anyhow::Result<Mapping> {
                    match numbers(line)?.as_slice() {
                        &[destination, source, len] => Ok(Mapping {
                            destination,
                            source,
                            len,
                        }),
                        _ => Err(anyhow!("map line needs three numbers: '{}'", line)),
                    }
                })
                .collect::<anyhow::Result<_>>()?;
            Ok(Layer {
                name: name.to_string(),
                mappings,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(Almanac { seeds, layers })
}

impl AocParser for Day05 {
    type SharedData<'a> = Almanac;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        let input = input.replace("\r\n", "\n");
        let almanac = parse_almanac(&input).map_err(ParseError::invalid)?;
        log::debug!(
            "almanac layers: {}",
            almanac
                .layers
                .iter()
                .map(|l| l.name.as_str())
                .collect::<Vec<_>>()
                .join(" -> ")
        );
        Ok(almanac)
    }
}

impl Solver for Day05 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let lowest = match part {
            1 => shared.seeds.iter().map(|&seed| shared.location(seed)).min(),
            2 => {
                if shared.seeds.len() % 2 != 0 {
                    return Err(SolveError::Invariant(
                        "seed ranges come in start/length pairs".into(),
                    ));
                }
                let ranges: Vec<_> = shared
                    .seeds
                    .chunks_exact(2)
                    .map(|pair| pair[0]..pair[0] + pair[1])
                    .collect();
                let almanac = &*shared;
                ranges
                    .into_par_iter()
                    .filter_map(|range| almanac.lowest_location(range))
                    .min()
            }
            _ => return Err(SolveError::PartNotImplemented(part)),
        };

        lowest
            .map(|location| location.to_string())
            .ok_or_else(|| SolveError::Invariant("no seeds".into()))
    }

    fn sample(_part: u8) -> Option<&'static str> {
        Some(SAMPLE)
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::new("35", "340994526")),
            2 => Some(Expected::new("46", "52210644")),
            _ => None,
        }
    }
}

const SAMPLE: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";
