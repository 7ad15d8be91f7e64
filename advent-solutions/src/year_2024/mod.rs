//! Solutions for 2024

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
pub mod day_12;
pub mod day_13;
pub mod day_14;
pub mod day_15;

/// Register every 2024 day
pub fn register(builder: RegistryBuilder) -> Result<RegistryBuilder, RegistrationError> {
    builder
        .register_solver::<day_01::Day01>(2024, 1)?
        .register_solver::<day_02::Day02>(2024, 2)?
        .register_solver::<day_03::Day03>(2024, 3)?
        .register_solver::<day_04::Day04>(2024, 4)?
        .register_solver::<day_05::Day05>(2024, 5)?
        .register_solver::<day_06::Day06>(2024, 6)?
        .register_solver::<day_07::Day07>(2024, 7)?
        .register_solver::<day_08::Day08>(2024, 8)?
        .register_solver::<day_09::Day09>(2024, 9)?
        .register_solver::<day_10::Day10>(2024, 10)?
        .register_solver::<day_11::Day11>(2024, 11)?
        .register_solver::<day_12::Day12>(2024, 12)?
        .register_solver::<day_13::Day13>(2024, 13)?
        .register_solver::<day_14::Day14>(2024, 14)?
        .register_solver::<day_15::Day15>(2024, 15)
}
