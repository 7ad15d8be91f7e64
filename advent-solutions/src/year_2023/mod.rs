//! Solutions for 2023

use advent_solver::{RegistrationError, RegistryBuilder};

pub mod day_01;
pub mod day_02;
pub mod day_03;
pub mod day_04;
pub mod day_05;
pub mod day_06;
pub mod day_07;
pub mod day_08;
pub mod day_09;
pub mod day_10;
pub mod day_11;

/// Register every 2023 day
pub fn register(builder: RegistryBuilder) -> Result<RegistryBuilder, RegistrationError> {
    builder
        .register_solver::<day_01::Day01>(2023, 1)?
        .register_solver::<day_02::Day02>(2023, 2)?
        .register_solver::<day_03::Day03>(2023, 3)?
        .register_solver::<day_04::Day04>(2023, 4)?
        .register_solver::<day_05::Day05>(2023, 5)?
        .register_solver::<day_06::Day06>(2023, 6)?
        .register_solver::<day_07::Day07>(2023, 7)?
        .register_solver::<day_08::Day08>(2023, 8)?
        .register_solver::<day_09::Day09>(2023, 9)?
        .register_solver::<day_10::Day10>(2023, 10)?
        .register_solver::<day_11::Day11>(2023, 11)
}
