use anchor_lang::prelude::*;

/// Event emitted when an outpost is created.
#[event]
pub struct OutpostCreated {
    pub outpost: Pubkey,
    pub owner: Pubkey,
    pub name: String,

    /// Purchase price paid to the treasury, in settlement smallest units.
    pub price: u64,
}

/// Event emitted when the owner updates the venue listing price.
#[event]
pub struct OutpostPriceUpdated {
    pub outpost: Pubkey,

    /// Settlement smallest units.
    pub new_price: u64,
}

/// Event emitted when the owner toggles the emergency pause.
#[event]
pub struct EmergencyPauseToggled {
    pub outpost: Pubkey,
    pub paused: bool,
}

/// Event emitted when outpost ownership changes hands.
#[event]
pub struct OutpostOwnershipTransferred {
    pub outpost: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}

/// Event emitted when passes are bought against a target.
///
/// # Arguments
/// * `base_price` - Gross curve price deposited into the redemption vault.
/// * `total_supply` - Outstanding pass units after the trade.
#[event]
pub struct PassesPurchased {
    pub target: Pubkey,
    pub buyer: Pubkey,
    pub amount: u64,
    pub base_price: u64,
    pub protocol_fee: u64,
    pub subject_fee: u64,
    pub referral_fee: u64,
    pub total_supply: u64,
}

/// Event emitted when passes are sold back against a target.
///
/// # Arguments
/// * `base_price` - Gross curve price withdrawn from the redemption vault.
/// * `total_supply` - Outstanding pass units after the trade.
#[event]
pub struct PassesSold {
    pub target: Pubkey,
    pub seller: Pubkey,
    pub amount: u64,
    pub base_price: u64,
    pub protocol_fee: u64,
    pub subject_fee: u64,
    pub net_proceeds: u64,
    pub total_supply: u64,
}

/// Event emitted when a subscription tier is created.
#[event]
pub struct TierCreated {
    pub outpost: Pubkey,
    pub tier_id: u64,
    pub name: String,
    pub price: u64,

    /// DurationClass as a u8.
    pub duration: u8,
}

/// Event emitted when a tier's price or duration is updated.
#[event]
pub struct TierUpdated {
    pub outpost: Pubkey,
    pub tier_id: u64,
    pub price: u64,

    /// DurationClass as a u8.
    pub duration: u8,
}

/// Event emitted when a subscription is taken out.
#[event]
pub struct SubscriptionCreated {
    pub outpost: Pubkey,
    pub subscriber: Pubkey,
    pub tier_id: u64,
    pub price: u64,

    /// Scaled in seconds.
    pub start_time: i64,

    /// Scaled in seconds.
    pub end_time: i64,
}

/// Event emitted when a subscription is cancelled. No refund is issued.
#[event]
pub struct SubscriptionCancelled {
    pub outpost: Pubkey,
    pub subscriber: Pubkey,
}
