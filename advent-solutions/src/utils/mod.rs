//! Shared helpers for the day solvers

pub mod geometry;
pub mod numeric;

pub use geometry::{Area, Direction, Point, interior_points, shoelace_area};
pub use numeric::{NumericError, digit_count, gcd, lcm, lcm_all};
