use anchor_lang::prelude::*;

use shared::check_condition;
use shared::errors::ErrorCode;
use shared::structs::{SubscriptionFees, TradingFees};
use shared::utils::mul_bps;

/// Breakdown of a buy: fees are additive surcharges on top of the base curve
/// price, so the buyer pays `total` and the vault receives exactly `base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuySplit {
    pub base: u64,
    pub protocol_fee: u64,
    pub subject_fee: u64,
    pub referral_fee: u64,
    pub total: u64,
}

/// Breakdown of a sell: fees are deducted from the base curve price withdrawn
/// from the vault, the seller keeps the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SellSplit {
    pub protocol_fee: u64,
    pub subject_fee: u64,
    pub net_to_seller: u64,
}

/// Breakdown of a subscription payment. The referrer slot is always carved
/// out so the owner's cut does not depend on whether a referrer showed up;
/// without one it is paid to the treasury.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionSplit {
    pub protocol_fee: u64,
    pub referral_fee: u64,
    pub owner_amount: u64,
}

pub fn split_buy(price: u64, fees: &TradingFees, has_referrer: bool) -> Result<BuySplit> {
    let protocol_fee = mul_bps(price, fees.protocol_fee_bps)?;
    let subject_fee = mul_bps(price, fees.subject_fee_bps)?;
    let referral_fee = if has_referrer {
        mul_bps(price, fees.referral_fee_bps)?
    } else {
        0
    };

    let total = price
        .checked_add(protocol_fee)
        .and_then(|v| v.checked_add(subject_fee))
        .and_then(|v| v.checked_add(referral_fee))
        .ok_or(ErrorCode::MathOverflow)?;

    Ok(BuySplit {
        base: price,
        protocol_fee,
        subject_fee,
        referral_fee,
        total,
    })
}

pub fn split_sell(price: u64, fees: &TradingFees) -> Result<SellSplit> {
    let protocol_fee = mul_bps(price, fees.protocol_fee_bps)?;
    let subject_fee = mul_bps(price, fees.subject_fee_bps)?;

    let fee_total = protocol_fee
        .checked_add(subject_fee)
        .ok_or(ErrorCode::MathOverflow)?;

    check_condition!(price > fee_total, InvalidAmount);

    Ok(SellSplit {
        protocol_fee,
        subject_fee,
        net_to_seller: price - fee_total,
    })
}

pub fn split_subscription(price: u64, fees: &SubscriptionFees) -> Result<SubscriptionSplit> {
    let protocol_fee = mul_bps(price, fees.protocol_fee_bps)?;
    let referral_fee = mul_bps(price, fees.referrer_fee_bps)?;

    let fee_total = protocol_fee
        .checked_add(referral_fee)
        .ok_or(ErrorCode::MathOverflow)?;

    check_condition!(price > fee_total, InvalidAmount);

    Ok(SubscriptionSplit {
        protocol_fee,
        referral_fee,
        owner_amount: price - fee_total,
    })
}
