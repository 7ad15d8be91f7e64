//! Warehouse woes: a robot pushing boxes, then pushing double-width boxes

use crate::utils::{Area, Direction, Point};
use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};
use std::collections::HashSet;

pub struct Day15;

const ROBOT: u8 = b'@';
const WALL: u8 = b'#';
const EMPTY: u8 = b'.';
const BOX: u8 = b'O';
const BOX_LEFT: u8 = b'[';
const BOX_RIGHT: u8 = b']';

#[derive(Debug, Clone)]
struct Grid {
    area: Area,
    cells: Vec<u8>,
}

impl Grid {
    fn parse(text: &str) -> Result<Self, ParseError> {
        let area = Area::from_lines(text).ok_or_else(|| ParseError::MissingData("no map".into()))?;
        let mut cells = Vec::with_capacity((area.width() * area.height()) as usize);
        for line in text.lines() {
            if line.len() != area.width() as usize {
                return Err(ParseError::invalid(format!("ragged map row '{}'", line)));
            }
            if let Some(c) = line.bytes().find(|c| !b"@#.O".contains(c)) {
                return Err(ParseError::invalid(format!("unknown map cell '{}'", c as char)));
            }
            cells.extend_from_slice(line.as_bytes());
        }
        Ok(Self { area, cells })
    }

    /// Every cell doubled sideways; boxes become `[]` and the robot keeps its left half
    fn widen(&self) -> Self {
        let cells = self
            .cells
            .iter()
            .flat_map(|&c| match c {
                BOX => [BOX_LEFT, BOX_RIGHT],
                ROBOT => [ROBOT, EMPTY],
                other => [other, other],
            })
            .collect();
        Self {
            area: Area::new(self.area.max_row, self.area.width() * 2 - 1),
            cells,
        }
    }

    fn index(&self, point: Point) -> usize {
        point.row as usize * self.area.width() as usize + point.column as usize
    }

    /// Cell content; everything off the map behaves as wall
    fn at(&self, point: Point) -> u8 {
        if self.area.contains(point) {
            self.cells[self.index(point)]
        } else {
            WALL
        }
    }

    fn set(&mut self, point: Point, value: u8) {
        let index = self.index(point);
        self.cells[index] = value;
    }

    fn robot(&self) -> Option<Point> {
        self.area.points().find(|&p| self.at(p) == ROBOT)
    }

    /// Cells that have to move along with `from`, or `None` if a wall blocks
    fn pushed_cells(&self, from: Point, direction: Direction) -> Option<Vec<Point>> {
        let vertical = matches!(direction, Direction::Up | Direction::Down);
        let mut seen = HashSet::new();
        let mut affected = Vec::new();
        let mut frontier = vec![from];

        while let Some(point) = frontier.pop() {
            if !seen.insert(point) {
                continue;
            }
            affected.push(point);
            let next = point.next(direction);
            match self.at(next) {
                WALL => return None,
                BOX => frontier.push(next),
                BOX_LEFT => {
                    frontier.push(next);
                    if vertical {
                        frontier.push(next.next(Direction::Right));
                    }
                }
                BOX_RIGHT => {
                    frontier.push(next);
                    if vertical {
                        frontier.push(next.next(Direction::Left));
                    }
                }
                _ => {}
            }
        }
        Some(affected)
    }

    /// Perform every move; returns the final robot position
    fn run(&mut self, moves: &[Direction]) -> Result<Point, SolveError> {
        let mut robot = self
            .robot()
            .ok_or_else(|| SolveError::Invariant("no robot on the map".into()))?;

        for &direction in moves {
            let Some(affected) = self.pushed_cells(robot, direction) else {
                continue;
            };
            let contents: Vec<u8> = affected.iter().map(|&p| self.at(p)).collect();
            for &point in &affected {
                self.set(point, EMPTY);
            }
            for (&point, &content) in affected.iter().zip(&contents) {
                self.set(point.next(direction), content);
            }
            robot = robot.next(direction);
        }
        Ok(robot)
    }

    /// Sum of `100 * row + column` over every box (left half for wide boxes)
    fn gps_sum(&self) -> i64 {
        self.area
            .points()
            .filter(|&p| matches!(self.at(p), BOX | BOX_LEFT))
            .map(|p| 100 * i64::from(p.row) + i64::from(p.column))
            .sum()
    }

    fn render(&self) -> String {
        self.area.render(|p| self.at(p) as char)
    }
}

#[derive(Debug)]
pub struct Warehouse {
    grid: Grid,
    moves: Vec<Direction>,
}

impl Warehouse {
    fn simulate(&self, grid: &mut Grid) -> Result<String, SolveError> {
        let robot = grid.run(&self.moves)?;
        log::debug!("robot ends at {}:\n{}", robot, grid.render());
        Ok(grid.gps_sum().to_string())
    }
}

impl AocParser for Day15 {
    type SharedData<'a> = Warehouse;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        let input = input.replace("\r\n", "\n");
        let (map, moves) = input
            .trim_start_matches('\n')
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("no blank line before the moves".into()))?;

        let grid = Grid::parse(map)?;
        if grid.cells.iter().filter(|&&c| c == ROBOT).count() != 1 {
            return Err(ParseError::invalid("map needs exactly one robot"));
        }

        let moves = moves
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                Direction::from_arrow(c)
                    .ok_or_else(|| ParseError::invalid(format!("unknown move '{}'", c)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Warehouse { grid, moves })
    }
}

impl Solver for Day15 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => shared.simulate(&mut shared.grid.clone()),
            2 => shared.simulate(&mut shared.grid.widen()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }

    fn sample(part: u8) -> Option<&'static str> {
        match part {
            1 => Some(SAMPLE_NARROW),
            2 => Some(SAMPLE_WIDE),
            _ => None,
        }
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::new("2028", "1456590")),
            2 => Some(Expected::new("618", "1489116")),
            _ => None,
        }
    }
}

const SAMPLE_NARROW: &str = "\
########
#..O.O.#
##@.O..#
#...O..#
#.#.O..#
#...O..#
#......#
########

<^^>>>vv<v>>v<<
";

const SAMPLE_WIDE: &str = "\
#######
#...#.#
#.....#
#..OO@#
#..O..#
#.....#
#######

<vv<<^^<<^^
";

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Day15::parse(input, ExecutionMode::Sample).unwrap();
        Day15::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn test_samples() {
        assert_eq!(solve(SAMPLE_NARROW, 1), "2028");
        assert_eq!(solve(SAMPLE_WIDE, 2), "618");
    }

    #[test]
    fn test_widen() {
        let grid = Grid::parse("#O.@#").unwrap();
        let wide = grid.widen();
        assert_eq!(wide.render(), "##[]..@.##\n");
        assert_eq!(wide.area.width(), 10);
    }

    #[test]
    fn test_push_against_wall_does_nothing() {
        let mut shared = Day15::parse("#####\n#@OO#\n#####\n\n>>", ExecutionMode::Sample).unwrap();
        let mut grid = shared.grid.clone();
        assert_eq!(grid.run(&shared.moves).unwrap(), Point::new(1, 1));
        assert_eq!(Day15::solve_part(&mut shared, 1).unwrap(), "205");
    }

    #[test]
    fn test_wide_box_pulls_its_other_half() {
        // robot under the right half lifts the whole box
        let input = "######\n#....#\n#.O..#\n#.@..#\n######\n\n^";
        let shared = Day15::parse(input, ExecutionMode::Sample).unwrap();
        let mut grid = shared.grid.widen();
        grid.run(&[Direction::Right, Direction::Up]).unwrap();
        assert_eq!(grid.at(Point::new(4, 1)), BOX_LEFT);
        assert_eq!(grid.at(Point::new(5, 1)), BOX_RIGHT);
        assert_eq!(grid.at(Point::new(5, 2)), ROBOT);
    }

    #[test]
    fn test_malformed_input() {
        assert!(Day15::parse("#@#", ExecutionMode::Sample).is_err());
        assert!(Day15::parse("#@#\n\n^x", ExecutionMode::Sample).is_err());
        assert!(Day15::parse("#.#\n\n^", ExecutionMode::Sample).is_err());
    }
}
