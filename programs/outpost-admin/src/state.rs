use anchor_lang::prelude::*;

/// Global configuration for the outpost ecosystem: treasury, settlement
/// currency, fee schedules in basis points and bonding curve weights.
/// Is controlled by the Admin of the protocol and read by the outpost
/// program on every trade and subscription.
///
/// PDA Seeds ["protocol_config"]
#[account]
#[derive(Default, InitSpace)]
pub struct ProtocolConfig {
    pub bump: u8,

    /// Receives protocol fees and outpost purchase payments (wallet, not a token account).
    pub treasury: Pubkey,

    /// Settlement currency every trade and subscription is denominated in.
    pub payment_mint: Pubkey,

    /// Pass trading fees, all in basis points of 10_000.
    pub protocol_fee_bps: u16,
    pub subject_fee_bps: u16,
    pub referral_fee_bps: u16,

    /// Subscription fees, in basis points of 10_000.
    pub protocol_subscription_fee_bps: u16,
    pub referrer_fee_bps: u16,

    /// Bonding curve weights. weight_a and weight_b are basis points of
    /// 10_000, weight_c is a flat supply offset in [1, 100].
    pub weight_a: u16,
    pub weight_b: u16,
    pub weight_c: u16,

    /// Price of creating a new outpost, in settlement smallest units.
    pub outpost_purchase_price: u64,
}

impl ProtocolConfig {
    pub const SIZE: usize = 8 + ProtocolConfig::INIT_SPACE;
}
