use crate::constants::BPS_DENOMINATOR;
use crate::errors::ErrorCode::MathOverflow;
use anchor_lang::prelude::*;
use spl_math::uint::U256;

/// Cubic summation term S(n) = n * (n + 1) * (2n + 1) / 6.
///
/// Expands the product as `inner = 2n^2 + 3n + 1 = (n + 1)(2n + 1)` and applies the
/// divisions by 2 and by 3 to whichever of {n, inner} divides evenly *before* the final
/// multiplication. Both divisions are exact: one of n and n + 1 is even, and one of
/// n, n + 1, 2n + 1 is a multiple of 3. Running in 256 bits keeps every intermediate
/// in range for any u64 supply level; it is the resulting *price* that is bounded by
/// u64, not this term.
pub fn calculate_summation(n: u128) -> Result<U256> {
    if n == 0 {
        return Ok(U256::zero());
    }

    let n_wide = U256::from(n);
    let two = U256::from(2u8);
    let three = U256::from(3u8);

    let inner = n_wide
        .checked_mul(n_wide)
        .ok_or(MathOverflow)?
        .checked_mul(two)
        .ok_or(MathOverflow)?
        .checked_add(n_wide.checked_mul(three).ok_or(MathOverflow)?)
        .ok_or(MathOverflow)?
        .checked_add(U256::one())
        .ok_or(MathOverflow)?;

    let mut lhs = n_wide;
    let mut rhs = inner;

    if lhs % two == U256::zero() {
        lhs = lhs / two;
    } else {
        rhs = rhs / two;
    }

    if lhs % three == U256::zero() {
        lhs = lhs / three;
    } else {
        rhs = rhs / three;
    }

    lhs.checked_mul(rhs).ok_or(MathOverflow.into())
}

/// `amount * bps / 10_000`, truncating. Intermediate runs in u128 so the product of a
/// full u64 amount and a full fee schedule cannot overflow.
pub fn mul_bps(amount: u64, bps: u16) -> Result<u64> {
    let result = (amount as u128)
        .checked_mul(bps as u128)
        .ok_or(MathOverflow)?
        .checked_div(BPS_DENOMINATOR as u128)
        .ok_or(MathOverflow)?;

    Ok(u64::try_from(result).map_err(|_| MathOverflow)?)
}

/// Narrow a U256 back to u64, failing rather than truncating.
pub fn to_u64(value: U256) -> Result<u64> {
    if value > U256::from(u64::MAX) {
        return Err(MathOverflow.into());
    }

    Ok(value.as_u64())
}
