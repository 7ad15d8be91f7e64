//! Integer helpers: gcd/lcm with domain checks and fast decimal digit counts

use thiserror::Error;

/// Errors from the integer helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumericError {
    #[error("value must not be negative, got {0}")]
    Negative(i64),
    #[error("result does not fit in 64 bits")]
    Overflow,
}

fn non_negative(value: i64) -> Result<i64, NumericError> {
    if value < 0 {
        Err(NumericError::Negative(value))
    } else {
        Ok(value)
    }
}

/// Greatest common divisor (Euclid); `gcd(0, 0) == 0`
pub fn gcd(a: i64, b: i64) -> Result<i64, NumericError> {
    let (mut a, mut b) = (non_negative(a)?, non_negative(b)?);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    Ok(a)
}

/// Least common multiple; zero whenever either argument is zero
pub fn lcm(a: i64, b: i64) -> Result<i64, NumericError> {
    let divisor = gcd(a, b)?;
    if a == 0 || b == 0 {
        return Ok(0);
    }
    (a / divisor).checked_mul(b).ok_or(NumericError::Overflow)
}

/// Least common multiple of every value, `1` for an empty sequence
pub fn lcm_all(values: impl IntoIterator<Item = i64>) -> Result<i64, NumericError> {
    values.into_iter().try_fold(1, lcm)
}

/// Lower bound on the digit count, indexed by leading zero count
const GUESS_DIGITS: [u32; 64] = [
    19, 19, 19, 19, 18, 18, 18, 17, 17, 17, 16, 16, 16, 16, 15, 15, //
    15, 14, 14, 14, 13, 13, 13, 13, 12, 12, 12, 11, 11, 11, 10, 10, //
    10, 10, 9, 9, 9, 8, 8, 8, 7, 7, 7, 7, 6, 6, 6, 5, //
    5, 5, 4, 4, 4, 4, 3, 3, 3, 2, 2, 2, 1, 1, 1, 1,
];

const POWERS_OF_10: [u64; 20] = {
    let mut table = [1u64; 20];
    let mut i = 1;
    while i < table.len() {
        table[i] = table[i - 1] * 10;
        i += 1;
    }
    table
};

/// Number of decimal digits of `n`; `digit_count(0) == 1`
pub fn digit_count(n: u64) -> u32 {
    if n == 0 {
        return 1;
    }
    let guess = GUESS_DIGITS[n.leading_zeros() as usize];
    if n >= POWERS_OF_10[guess as usize] {
        guess + 1
    } else {
        guess
    }
}

/// `10^exp` for `exp < 20`
pub fn power_of_10(exp: u32) -> Option<u64> {
    POWERS_OF_10.get(exp as usize).copied()
}
