//! Disk fragmenter: compact a dense disk map block by block, then file by file

use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};

pub struct Day09;

/// A run of blocks on the disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    len: usize,
}

#[derive(Debug)]
pub struct DiskMap {
    /// Indexed by file id
    files: Vec<Span>,
    free: Vec<Span>,
}

impl DiskMap {
    fn size(&self) -> usize {
        self.files.last().map_or(0, |f| f.start + f.len)
    }

    fn blocks(&self) -> Vec<Option<usize>> {
        let mut blocks = vec![None; self.size()];
        for (id, file) in self.files.iter().enumerate() {
            blocks[file.start..file.start + file.len].fill(Some(id));
        }
        blocks
    }

    /// Move single blocks from the end into the leftmost gaps
    fn compact_blocks(&self) -> Vec<Option<usize>> {
        let mut blocks = self.blocks();
        let (mut gap, mut tail) = (0, blocks.len());
        loop {
            while gap < tail && blocks[gap].is_some() {
                gap += 1;
            }
            while tail > gap && blocks[tail - 1].is_none() {
                tail -= 1;
            }
            if tail <= gap + 1 {
                break;
            }
            blocks.swap(gap, tail - 1);
        }
        blocks
    }

    /// Move whole files, highest id first, into the leftmost gap that fits
    fn compact_files(&self) -> Vec<Option<usize>> {
        let mut files = self.files.clone();
        let mut free = self.free.clone();

        for file in files.iter_mut().rev() {
            let Some(gap) = free
                .iter_mut()
                .take_while(|gap| gap.start < file.start)
                .find(|gap| gap.len >= file.len)
            else {
                continue;
            };
            file.start = gap.start;
            gap.start += file.len;
            gap.len -= file.len;
        }

        let mut blocks = vec![None; self.size()];
        for (id, file) in files.iter().enumerate() {
            blocks[file.start..file.start + file.len].fill(Some(id));
        }
        blocks
    }
}

fn checksum(blocks: &[Option<usize>]) -> u64 {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(position, id)| id.map(|id| (position * id) as u64))
        .sum()
}

fn render(blocks: &[Option<usize>]) -> String {
    blocks
        .iter()
        .map(|b| b.map_or('.', |id| char::from_digit((id % 10) as u32, 10).unwrap_or('?')))
        .collect()
}

impl AocParser for Day09 {
    type SharedData<'a> = DiskMap;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        let mut files = Vec::new();
        let mut free = Vec::new();
        let mut position = 0;
        for (i, c) in input.trim().chars().enumerate() {
            let len = c
                .to_digit(10)
                .ok_or_else(|| ParseError::invalid(format!("'{}' is not a digit", c)))? as usize;
            let span = Span { start: position, len };
            if i % 2 == 0 {
                files.push(span);
            } else if len > 0 {
                free.push(span);
            }
            position += len;
        }
        if files.is_empty() {
            return Err(ParseError::MissingData("empty disk map".into()));
        }
        Ok(DiskMap { files, free })
    }
}

impl Solver for Day09 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let blocks = match part {
            1 => shared.compact_blocks(),
            2 => shared.compact_files(),
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        log::debug!("{}", render(&blocks));
        Ok(checksum(&blocks).to_string())
    }

    fn sample(_part: u8) -> Option<&'static str> {
        Some(SAMPLE)
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::sample("1928")),
            2 => Some(Expected::sample("2858")),
            _ => None,
        }
    }
}

const SAMPLE: &str = "2333133121414131402";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample() {
        let mut shared = Day09::parse(SAMPLE, ExecutionMode::Sample).unwrap();
        assert_eq!(Day09::solve_part(&mut shared, 1).unwrap(), "1928");
        assert_eq!(Day09::solve_part(&mut shared, 2).unwrap(), "2858");
    }

    #[test]
    fn test_layouts() {
        let disk = Day09::parse("12345", ExecutionMode::Sample).unwrap();
        assert_eq!(render(&disk.blocks()), "0..111....22222");
        assert_eq!(render(&disk.compact_blocks()), "022111222......");
        assert_eq!(
            render(&Day09::parse(SAMPLE, ExecutionMode::Sample).unwrap().compact_files()),
            "00992111777.44.333....5555.6666.....8888.."
        );
    }

    #[test]
    fn test_not_a_digit() {
        assert!(Day09::parse("12a4", ExecutionMode::Puzzle).is_err());
        assert!(Day09::parse("", ExecutionMode::Puzzle).is_err());
    }
}
