//! Grid geometry: points, directions, bounded areas and polygon formulas

use std::fmt;

/// One of the four grid directions, in clockwise order starting at `Up`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All four directions in clockwise order
    pub const ALL: [Direction; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    fn from_index(index: u8) -> Self {
        Self::ALL[usize::from(index % 4)]
    }

    fn index(self) -> u8 {
        self as u8
    }

    /// Quarter turn clockwise
    pub fn turn_right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Quarter turn counter-clockwise
    pub fn turn_left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Half turn
    pub fn reverse(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Parse the arrow notation `^ > v <`
    pub fn from_arrow(c: char) -> Option<Self> {
        match c {
            '^' => Some(Self::Up),
            '>' => Some(Self::Right),
            'v' => Some(Self::Down),
            '<' => Some(Self::Left),
            _ => None,
        }
    }
}

/// A position on a grid; rows grow downwards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub column: i32,
    pub row: i32,
}

impl Point {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// The neighbouring point one step towards `direction`
    pub fn next(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::new(self.column, self.row - 1),
            Direction::Right => Self::new(self.column + 1, self.row),
            Direction::Down => Self::new(self.column, self.row + 1),
            Direction::Left => Self::new(self.column - 1, self.row),
        }
    }

    /// Manhattan distance
    pub fn distance(self, other: Point) -> u32 {
        self.column.abs_diff(other.column) + self.row.abs_diff(other.row)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.column, self.row)
    }
}

/// Inclusive, zero-based grid bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Area {
    pub max_row: i32,
    pub max_column: i32,
}

impl Area {
    pub const fn new(max_row: i32, max_column: i32) -> Self {
        Self {
            max_row,
            max_column,
        }
    }

    /// Bounds of a text grid: line count by the width of the first line.
    ///
    /// Returns `None` for empty text.
    pub fn from_lines(text: &str) -> Option<Self> {
        let mut lines = text.lines();
        let width = lines.next()?.len();
        let height = 1 + lines.count();
        Some(Self::new(height as i32 - 1, width as i32 - 1))
    }

    pub fn contains(&self, point: Point) -> bool {
        (0..=self.max_column).contains(&point.column) && (0..=self.max_row).contains(&point.row)
    }

    pub fn width(&self) -> i32 {
        self.max_column + 1
    }

    pub fn height(&self) -> i32 {
        self.max_row + 1
    }

    /// Every point of the area, row by row
    pub fn points(self) -> impl Iterator<Item = Point> {
        (0..=self.max_row).flat_map(move |row| {
            (0..=self.max_column).map(move |column| Point::new(column, row))
        })
    }

    /// Render one character per point, one line per row
    pub fn render(&self, mut cell: impl FnMut(Point) -> char) -> String {
        let mut out = String::with_capacity((self.width() as usize + 1) * self.height() as usize);
        for row in 0..=self.max_row {
            for column in 0..=self.max_column {
                out.push(cell(Point::new(column, row)));
            }
            out.push('\n');
        }
        out
    }
}

/// Area of a simple polygon given its vertices in traversal order
///
/// <https://en.wikipedia.org/wiki/Shoelace_formula>
pub fn shoelace_area(points: &[Point]) -> f64 {
    let n = points.len();
    let twice: i64 = (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            i64::from(a.column) * i64::from(b.row) - i64::from(b.column) * i64::from(a.row)
        })
        .sum();
    twice.abs() as f64 / 2.0
}

/// Lattice points strictly inside a polygon with `boundary` points on its edge
///
/// <https://en.wikipedia.org/wiki/Pick%27s_theorem>
pub fn interior_points(boundary: usize, area: f64) -> i64 {
    (area - boundary as f64 / 2.0 + 1.0) as i64
}
