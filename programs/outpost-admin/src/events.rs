use anchor_lang::prelude::*;

/// Event emitted when the protocol config is created.
#[event]
pub struct ProtocolConfigInitialized {
    pub treasury: Pubkey,
    pub payment_mint: Pubkey,
}

/// Event emitted when treasury, payment mint or outpost purchase price change.
#[event]
pub struct ProtocolConfigUpdated {
    pub treasury: Pubkey,
    pub payment_mint: Pubkey,
    pub outpost_purchase_price: u64,
}

/// Event emitted when the pass trading fees are set.
///
/// # Arguments
/// * `protocol_fee_bps` - Protocol surcharge in basis points.
/// * `subject_fee_bps` - Subject surcharge in basis points.
/// * `referral_fee_bps` - Referral surcharge in basis points.
#[event]
pub struct TradingFeesSet {
    pub protocol_fee_bps: u16,
    pub subject_fee_bps: u16,
    pub referral_fee_bps: u16,
}

/// Event emitted when the subscription fees are set.
#[event]
pub struct SubscriptionFeesSet {
    pub protocol_subscription_fee_bps: u16,
    pub referrer_fee_bps: u16,
}

/// Event emitted when the bonding curve weights are set.
#[event]
pub struct CurveWeightsSet {
    pub weight_a: u16,
    pub weight_b: u16,
    pub weight_c: u16,
}
