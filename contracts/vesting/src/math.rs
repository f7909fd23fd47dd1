//! Exact integer arithmetic over token base units.

use crate::error::VestingError;

/// Token amount in base units (18 decimals).
pub type Amount = i128;

pub const DECIMALS: u32 = 18;

/// One whole token in base units.
pub const TOKEN_UNIT: Amount = 1_000_000_000_000_000_000;

pub const PERCENT_DENOMINATOR: i128 = 100;

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Calendar month as used by every schedule in the system (30 days).
pub const SECONDS_PER_MONTH: u64 = 30 * SECONDS_PER_DAY;

/// Whole tokens to base units.
pub const fn tokens(whole: i128) -> Amount {
    whole * TOKEN_UNIT
}

/// `value * numerator / denominator`, truncating toward zero.
pub fn mul_div_floor(
    value: Amount,
    numerator: Amount,
    denominator: Amount,
) -> Result<Amount, VestingError> {
    if denominator <= 0 {
        return Err(VestingError::MathOverflow);
    }
    let product = value
        .checked_mul(numerator)
        .ok_or(VestingError::MathOverflow)?;
    product
        .checked_div(denominator)
        .ok_or(VestingError::MathOverflow)
}

pub fn percent_of(amount: Amount, percent: u32) -> Result<Amount, VestingError> {
    mul_div_floor(amount, i128::from(percent), PERCENT_DENOMINATOR)
}

pub fn checked_add(a: Amount, b: Amount) -> Result<Amount, VestingError> {
    a.checked_add(b).ok_or(VestingError::MathOverflow)
}

pub fn checked_sub(a: Amount, b: Amount) -> Result<Amount, VestingError> {
    a.checked_sub(b).ok_or(VestingError::MathOverflow)
}
