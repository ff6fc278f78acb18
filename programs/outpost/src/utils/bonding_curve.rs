use anchor_lang::prelude::*;
use spl_math::uint::U256;

use shared::check_condition;
use shared::constants::{BPS_DENOMINATOR, INITIAL_PRICE, UNIT_SCALE};
use shared::errors::ErrorCode;
use shared::structs::CurveWeights;
use shared::utils::{calculate_summation, to_u64};

use crate::utils::structs::TradeSide;

/// Price of the single unit minted at `supply`, in settlement smallest units.
///
/// The curve value is the cubic summation S(n) at n = supply + weight_c - 1,
/// staged through weight_a and weight_b (both basis points) and rescaled by
/// UNIT_SCALE, floored at INITIAL_PRICE. The summation itself cannot overflow
/// for any u64 supply; the rescaled price must fit u64 and the call fails
/// with MathOverflow beyond that (with weights at their maximum this is
/// reached near n = 3_800) rather than truncating.
pub fn unit_price(supply: u64, weights: &CurveWeights) -> Result<u64> {
    if supply == 0 {
        return Ok(INITIAL_PRICE);
    }

    let n = supply as u128 + weights.weight_c as u128 - 1;
    if n <= 1 {
        return Ok(INITIAL_PRICE);
    }

    let summation = calculate_summation(n)?;

    let bps = U256::from(BPS_DENOMINATOR);
    let scaled = summation
        .checked_mul(U256::from(weights.weight_a))
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(bps)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_mul(U256::from(weights.weight_b))
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(bps)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_mul(U256::from(UNIT_SCALE))
        .ok_or(ErrorCode::MathOverflow)?;

    Ok(to_u64(scaled)?.max(INITIAL_PRICE))
}

/// Gross price of trading `amount` units starting from `supply` outstanding,
/// by accumulating unit prices at successive supply levels.
///
/// Unit i of a buy is priced at level supply + i; unit i of a sell at level
/// supply - i - 1, floored at level 0 once supply - i <= 1 so the last unit
/// sold settles at the INITIAL_PRICE floor. The asymmetric indexing makes a
/// buy of the k-th outstanding unit and its later sale settle at the same
/// per-unit price.
pub fn total_price(
    supply: u64,
    amount: u64,
    side: TradeSide,
    weights: &CurveWeights,
) -> Result<u64> {
    check_condition!(amount > 0, InvalidAmount);

    if side == TradeSide::Sell {
        check_condition!(amount <= supply, SupplyUnderflow);
    }

    let mut total: u128 = 0;

    for i in 0..amount {
        let level = match side {
            TradeSide::Buy => supply.checked_add(i).ok_or(ErrorCode::MathOverflow)?,
            TradeSide::Sell => {
                if supply - i <= 1 {
                    0
                } else {
                    supply - i - 1
                }
            }
        };

        total = total
            .checked_add(unit_price(level, weights)? as u128)
            .ok_or(ErrorCode::MathOverflow)?;
    }

    Ok(u64::try_from(total).map_err(|_| ErrorCode::MathOverflow)?)
}
