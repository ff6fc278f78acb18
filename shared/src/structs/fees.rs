use anchor_lang::prelude::*;

/// Basis-point fee schedule applied to pass trades, snapshotted from the
/// protocol config at instruction entry.
#[derive(AnchorSerialize, AnchorDeserialize, Default, Clone, Copy, Debug)]
pub struct TradingFees {
    pub protocol_fee_bps: u16,
    pub subject_fee_bps: u16,
    pub referral_fee_bps: u16,
}

/// Basis-point fee schedule applied to subscription payments.
#[derive(AnchorSerialize, AnchorDeserialize, Default, Clone, Copy, Debug)]
pub struct SubscriptionFees {
    pub protocol_fee_bps: u16,
    pub referrer_fee_bps: u16,
}
