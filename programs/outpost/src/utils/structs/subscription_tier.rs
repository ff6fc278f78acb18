use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};

use shared::constants::MAX_NAME_LENGTH;
use shared::structs::DurationClass;

/// A named, priced, fixed-duration subscription plan, stored inline in the
/// outpost tier table. Identity is the insertion index; the name must be
/// unique per outpost (exact byte match) and price/duration may be updated
/// in place.
#[derive(InitSpace, Debug, Clone, Copy, AnchorSerialize, AnchorDeserialize, Pod, Zeroable)]
#[repr(C)]
pub struct SubscriptionTier {
    /// Tier price in settlement smallest units.
    pub price: u64,

    /// Zero-padded tier name.
    pub name: [u8; MAX_NAME_LENGTH],

    /// DurationClass as a u8.
    pub duration: u8,

    pub _padding: [u8; 7],
}

impl Default for SubscriptionTier {
    fn default() -> Self {
        Self {
            price: 0,
            name: [0u8; MAX_NAME_LENGTH],
            duration: 0,
            _padding: [0u8; 7],
        }
    }
}

impl SubscriptionTier {
    pub fn new(name: [u8; MAX_NAME_LENGTH], price: u64, duration: DurationClass) -> Self {
        Self {
            price,
            name,
            duration: duration as u8,
            _padding: [0u8; 7],
        }
    }

    pub fn duration_class(&self) -> DurationClass {
        DurationClass::from(self.duration)
    }
}
