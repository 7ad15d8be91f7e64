//! Puzzle Solver Library
//!
//! A small, type-safe framework for daily puzzle solvers across multiple years
//! and days. Each solver parses its input once and answers two parts from the
//! parsed state.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining solvers ([`AocParser`], [`Solver`])
//! - Embedded samples and recorded answers per part ([`Expected`], [`Verification`])
//! - Type-erased instances with parse and solve timing ([`DynSolver`])
//! - An explicit, immutable registry keyed by (year, day) ([`SolverRegistry`])
//!
//! # Quick Example
//!
//! ```
//! use advent_solver::{AocParser, ExecutionMode, ParseError, RegistryBuilder, SolveError, Solver};
//!
//! pub struct MyDay1;
//!
//! impl AocParser for MyDay1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str, _mode: ExecutionMode) -> Result<Vec<i32>, ParseError> {
//!         input.lines()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl Solver for MyDay1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(parsed: &mut Vec<i32>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(parsed.iter().sum::<i32>().to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//!
//!     fn sample(_part: u8) -> Option<&'static str> {
//!         Some("1\n2\n3")
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<MyDay1>(2023, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 1, "1\n2\n3", ExecutionMode::Puzzle).unwrap();
//! let result = solver.solve(1).unwrap();
//! assert_eq!(result.answer, "6");
//! ```

mod error;
mod expected;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use expected::{Expected, Verification};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    ExpectedFn, FactoryInfo, RegistryBuilder, SampleFn, SolverFactory, SolverRegistry,
};
pub use solver::{AocParser, ExecutionMode, Solver, SolverExt};
