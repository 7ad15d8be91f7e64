//! Puzzle solutions organized by year
//!
//! Every day is a [`Solver`](advent_solver::Solver) implementation; the
//! `register` function of each year module adds its days to a
//! [`RegistryBuilder`]. [`register_all`] wires up everything in this crate.
//!
//! ```
//! use advent_solver::{ExecutionMode, RegistryBuilder};
//!
//! let registry = advent_solutions::register_all(RegistryBuilder::new())
//!     .unwrap()
//!     .build();
//!
//! let sample = registry.sample(2023, 10, 1).unwrap();
//! let mut solver = registry.create_solver(2023, 10, sample, ExecutionMode::Sample).unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "8");
//! ```

use advent_solver::{RegistrationError, RegistryBuilder};

pub mod utils;
pub mod year_2023;
pub mod year_2024;

/// Register the solvers of every year
pub fn register_all(builder: RegistryBuilder) -> Result<RegistryBuilder, RegistrationError> {
    let builder = year_2023::register(builder)?;
    year_2024::register(builder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::{ExecutionMode, Verification};

    #[test]
    fn test_every_sample_matches_its_record() {
        let registry = register_all(RegistryBuilder::new()).unwrap().build();
        assert_eq!(registry.len(), 26);

        for info in registry.iter_info() {
            for part in 1..=info.parts {
                let Some(sample) = registry.sample(info.year, info.day, part) else {
                    continue;
                };
                let mut solver = registry
                    .create_solver(info.year, info.day, sample, ExecutionMode::Sample)
                    .unwrap();
                let answer = solver.solve(part).unwrap().answer;
                let expected = registry.expected(info.year, info.day, part);
                let verification = Verification::of(expected.as_ref(), &answer, ExecutionMode::Sample);
                assert!(
                    !verification.is_mismatch(),
                    "{} day {} part {}: got {}",
                    info.year,
                    info.day,
                    part,
                    answer
                );
            }
        }
    }

    #[test]
    fn test_registration_is_ordered() {
        let registry = register_all(RegistryBuilder::new()).unwrap().build();
        let keys: Vec<_> = registry.iter_info().map(|i| i.order_key()).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
        assert!(register_all(register_all(RegistryBuilder::new()).unwrap()).is_err());
    }
}
