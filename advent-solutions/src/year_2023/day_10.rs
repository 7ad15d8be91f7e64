//! Pipe maze: trace the loop through the start tile, then count what it encloses
//!
//! The loop is walked once and shared by both parts. Part one is half its
//! length; part two applies the shoelace formula to the ordered loop and
//! converts the area to an interior tile count with Pick's theorem.

use crate::utils::{Area, Direction, Point, interior_points, shoelace_area};
use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};
use std::collections::{HashMap, HashSet};

pub struct Day10;

/// A pipe segment joining exactly two directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipe {
    symbol: char,
    connectors: [Direction; 2],
}

const PIPES: [Pipe; 6] = [
    Pipe::new('|', Direction::Up, Direction::Down),
    Pipe::new('-', Direction::Left, Direction::Right),
    Pipe::new('L', Direction::Up, Direction::Right),
    Pipe::new('J', Direction::Left, Direction::Up),
    Pipe::new('7', Direction::Left, Direction::Down),
    Pipe::new('F', Direction::Down, Direction::Right),
];

impl Pipe {
    const fn new(symbol: char, a: Direction, b: Direction) -> Self {
        Self {
            symbol,
            connectors: [a, b],
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        PIPES.into_iter().find(|p| p.symbol == symbol)
    }

    fn opens(&self, direction: Direction) -> bool {
        self.connectors.contains(&direction)
    }

    /// Whether `self` and `other`, lying one step towards `direction`, join up.
    /// Both ends must face each other.
    pub fn connects_to(&self, other: &Pipe, direction: Direction) -> bool {
        self.opens(direction) && other.opens(direction.reverse())
    }
}

#[derive(Debug)]
pub struct PipeMap {
    pipes: HashMap<Point, Pipe>,
    area: Area,
    start: Point,
    loop_points: Option<Vec<Point>>,
}

impl PipeMap {
    fn get(&self, point: Point) -> Option<&Pipe> {
        self.pipes.get(&point)
    }

    /// Infer the pipe hidden under the start tile from its in-bounds neighbours
    fn start_pipe(&self) -> Option<Pipe> {
        let neighbours: Vec<(Direction, &Pipe)> = Direction::ALL
            .into_iter()
            .map(|d| (d, self.start.next(d)))
            .filter(|(_, p)| self.area.contains(*p))
            .filter_map(|(d, p)| self.get(p).map(|pipe| (d, pipe)))
            .collect();

        PIPES.into_iter().find(|candidate| {
            neighbours
                .iter()
                .filter(|(d, pipe)| candidate.connects_to(pipe, *d))
                .count()
                == 2
        })
    }

    /// Walk from the start, always taking the first connected unvisited neighbour,
    /// until no such neighbour is left
    fn walk_loop(&self) -> Vec<Point> {
        let mut visited = HashSet::new();
        let mut ordered = Vec::new();
        let mut current = Some(self.start);

        while let Some(point) = current {
            visited.insert(point);
            ordered.push(point);

            current = self.get(point).and_then(|pipe| {
                Direction::ALL.into_iter().map(|d| (d, point.next(d))).find_map(|(d, next)| {
                    let next_pipe = self.get(next)?;
                    (pipe.connects_to(next_pipe, d) && !visited.contains(&next)).then_some(next)
                })
            });
        }

        ordered
    }

    fn loop_points(&mut self) -> &[Point] {
        if self.loop_points.is_none() {
            let points = self.walk_loop();
            log::debug!("pipe loop has {} tiles", points.len());
            self.loop_points = Some(points);
        }
        self.loop_points.as_deref().unwrap_or_default()
    }

    fn render(&self) -> String {
        self.area
            .render(|p| self.get(p).map_or('.', |pipe| pipe.symbol))
    }
}

fn parse_pipe_map(input: &str) -> Result<PipeMap, ParseError> {
    let area = Area::from_lines(input).ok_or_else(|| ParseError::MissingData("empty map".into()))?;

    let mut pipes = HashMap::new();
    let mut start = None;
    for (row, line) in input.lines().enumerate() {
        for (column, c) in line.chars().enumerate() {
            let point = Point::new(column as i32, row as i32);
            match c {
                '.' => {}
                'S' if start.is_none() => start = Some(point),
                'S' => return Err(ParseError::invalid(format!("second start tile at {}", point))),
                c => {
                    let pipe = Pipe::from_symbol(c).ok_or_else(|| {
                        ParseError::invalid(format!("unexpected tile '{}' at {}", c, point))
                    })?;
                    pipes.insert(point, pipe);
                }
            }
        }
    }

    let start = start.ok_or_else(|| ParseError::MissingData("no start tile".into()))?;
    let mut map = PipeMap {
        pipes,
        area,
        start,
        loop_points: None,
    };

    let start_pipe = map
        .start_pipe()
        .ok_or_else(|| ParseError::invalid(format!("no pipe shape fits the start tile at {}", start)))?;
    map.pipes.insert(start, start_pipe);
    Ok(map)
}

impl AocParser for Day10 {
    type SharedData<'a> = PipeMap;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        let map = parse_pipe_map(input)?;
        log::debug!("pipe map:\n{}", map.render());
        Ok(map)
    }
}

impl Solver for Day10 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let points = shared.loop_points();
        match part {
            1 => Ok((points.len() / 2).to_string()),
            2 => {
                let area = shoelace_area(points);
                Ok(interior_points(points.len(), area).to_string())
            }
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }

    fn sample(part: u8) -> Option<&'static str> {
        match part {
            1 => Some(SAMPLE_ONE),
            _ => Some(SAMPLE_TWO),
        }
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::new("8", "6886")),
            2 => Some(Expected::new("8", "371")),
            _ => None,
        }
    }
}

const SAMPLE_ONE: &str = "\
..F7.
.FJ|.
SJ.L7
|F--J
LJ...
";

const SAMPLE_TWO: &str = "\
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...
";

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SQUARE: &str = "\
.....
.S-7.
.|.|.
.L-J.
.....
";

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Day10::parse(input, ExecutionMode::Sample).unwrap();
        Day10::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn test_square_loop() {
        assert_eq!(solve(SQUARE, 1), "4");
        assert_eq!(solve(SQUARE, 2), "1");
    }

    #[test]
    fn test_samples() {
        assert_eq!(solve(SAMPLE_ONE, 1), "8");
        assert_eq!(solve(SAMPLE_ONE, 2), "1");
        assert_eq!(solve(SAMPLE_TWO, 2), "8");
    }

    #[test]
    fn test_loop_visits_each_tile_once() {
        for (input, length) in [(SQUARE, 8), (SAMPLE_ONE, 16), (SAMPLE_TWO, 140)] {
            let mut map = Day10::parse(input, ExecutionMode::Sample).unwrap();
            let points = map.loop_points().to_vec();
            let distinct: HashSet<_> = points.iter().copied().collect();
            assert_eq!(points.len(), length);
            assert_eq!(distinct.len(), length);
        }
    }

    #[test]
    fn test_start_shape_is_inferred() {
        let map = Day10::parse(SAMPLE_ONE, ExecutionMode::Sample).unwrap();
        assert_eq!(map.get(Point::new(0, 2)).map(|p| p.symbol), Some('F'));

        let map = Day10::parse(SQUARE, ExecutionMode::Sample).unwrap();
        assert_eq!(map.get(Point::new(1, 1)).map(|p| p.symbol), Some('F'));
    }

    #[test]
    fn test_start_at_grid_edge_ignores_outside() {
        let input = "S-7\n|.|\nL-J\n";
        assert_eq!(solve(input, 1), "4");
        assert_eq!(solve(input, 2), "1");
    }

    #[test]
    fn test_connection_is_symmetric() {
        for a in PIPES {
            for b in PIPES {
                for d in Direction::ALL {
                    assert_eq!(a.connects_to(&b, d), b.connects_to(&a, d.reverse()));
                }
            }
        }
        let vertical = Pipe::from_symbol('|').unwrap();
        let horizontal = Pipe::from_symbol('-').unwrap();
        assert!(!vertical.connects_to(&horizontal, Direction::Up));
    }

    #[test]
    fn test_malformed_maps() {
        assert!(matches!(
            Day10::parse("...\n.-.\n...", ExecutionMode::Puzzle),
            Err(ParseError::MissingData(_))
        ));
        assert!(matches!(
            Day10::parse(".S.\n...\n...", ExecutionMode::Puzzle),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Day10::parse("S-7\n|x|\nL-J", ExecutionMode::Puzzle),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    /// A rectangular loop of `width` x `height` tiles with the start on its top-left corner
    fn rectangle(width: usize, height: usize, margin: usize) -> String {
        let total = width + 2 * margin;
        let mut rows = vec![".".repeat(total); margin];
        for row in 0..height {
            let mut line = ".".repeat(margin);
            for column in 0..width {
                let c = match (row, column) {
                    (0, 0) => 'S',
                    (0, c) if c == width - 1 => '7',
                    (r, 0) if r == height - 1 => 'L',
                    (r, c) if r == height - 1 && c == width - 1 => 'J',
                    (0, _) => '-',
                    (r, _) if r == height - 1 => '-',
                    (_, 0) => '|',
                    (_, c) if c == width - 1 => '|',
                    _ => '.',
                };
                line.push(c);
            }
            line.push_str(&".".repeat(margin));
            rows.push(line);
        }
        rows.extend(vec![".".repeat(total); margin]);
        rows.join("\n")
    }

    proptest! {
        #[test]
        fn prop_rectangle_loops(width in 2usize..15, height in 2usize..15, margin in 0usize..3) {
            let input = rectangle(width, height, margin);
            let boundary = 2 * (width + height) - 4;
            let inside = (width - 2) * (height - 2);

            prop_assert_eq!(solve(&input, 1), (boundary / 2).to_string());
            prop_assert_eq!(solve(&input, 2), inside.to_string());
        }
    }
}
