use anchor_lang::prelude::*;

use crate::utils::structs::{FixedSizeString, SubscriptionTier};
use shared::constants::{MAX_NAME_LENGTH, MAX_TIERS};

/// An ownable venue against which passes and subscription tiers are sold.
///
/// The tier table lives inline so tier identity (the insertion index) is
/// stable for the life of the outpost. The pause flag gates every mutating
/// operation on the venue except ownership transfer and admin actions.
///
/// PDA Seeds ["outpost", creator pubkey, name]
#[account(zero_copy)]
#[derive(InitSpace)]
pub struct Outpost {
    pub owner: Pubkey,

    /// Original creator, part of the PDA derivation; never changes.
    pub creator: Pubkey,

    /// Venue listing price, seeded from the protocol purchase price and
    /// owner-updatable thereafter (settlement smallest units).
    pub price: u64,

    /// Number of live entries in `tiers`.
    pub tier_count: u64,

    /// Per-venue override of the subject fee taken on pass trades.
    pub royalty_bps: u16,

    /// OutpostStatus as a u8.
    pub status: u8,

    pub bump: u8,

    pub _padding: [u8; 4],

    pub tiers: [SubscriptionTier; MAX_TIERS],

    pub name: [u8; MAX_NAME_LENGTH],

    pub description: FixedSizeString,

    pub uri: FixedSizeString,
}

impl Outpost {
    pub const SIZE: usize = 8 + Outpost::INIT_SPACE;
}

/// Per-target pass ledger: outstanding supply and the gross curve price of
/// the last trade. Created lazily on the first buy against a target and
/// never closed. Also the mint authority of the target's pass mint.
///
/// PDA Seeds ["pass_stats", target pubkey]
#[account]
#[derive(Default, InitSpace)]
pub struct PassStats {
    pub bump: u8,

    pub target: Pubkey,

    /// The pass mint for this target (decimals 0).
    pub mint: Pubkey,

    /// Outstanding pass units.
    pub total_supply: u64,

    /// Gross curve price of the last trade, in settlement smallest units.
    pub last_price: u64,
}

impl PassStats {
    pub const SIZE: usize = 8 + PassStats::INIT_SPACE;
}

/// Pooled base-price funds backing sell-side payouts. `balance` mirrors the
/// vault token account and is the authoritative ledger: every buy deposits
/// exactly its base price, every sell withdraws exactly its base price, and
/// fee portions never touch it.
///
/// PDA Seeds ["redemption_vault"]
#[account]
#[derive(Default, InitSpace)]
pub struct RedemptionVault {
    pub bump: u8,

    pub balance: u64,
}

impl RedemptionVault {
    pub const SIZE: usize = 8 + RedemptionVault::INIT_SPACE;
}

/// One subscription per (subscriber, outpost) pair. Closed on cancel; an
/// expired record keeps its storage until then and still blocks a new
/// subscribe.
///
/// PDA Seeds ["subscription", outpost pubkey, subscriber pubkey]
#[account]
#[derive(Default, InitSpace)]
pub struct Subscription {
    pub bump: u8,

    pub subscriber: Pubkey,

    pub outpost: Pubkey,

    /// Insertion index of the tier inside the outpost tier table.
    pub tier_id: u64,

    pub start_time: i64,

    pub end_time: i64,
}

impl Subscription {
    pub const SIZE: usize = 8 + Subscription::INIT_SPACE;
}
