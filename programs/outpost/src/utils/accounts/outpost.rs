use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::{MAX_NAME_LENGTH, MAX_TIERS};
use shared::errors::ErrorCode;
use shared::structs::DurationClass;

use crate::state::Outpost;
use crate::utils::structs::{OutpostStatus, SubscriptionTier};

impl Outpost {
    pub fn status(&self) -> OutpostStatus {
        OutpostStatus::from(self.status)
    }

    pub fn validate_owner(&self, caller: &Pubkey) -> Result<()> {
        check_condition!(self.owner == *caller, NotOwner);

        Ok(())
    }

    pub fn validate_not_paused(&self) -> Result<()> {
        check_condition!(self.status() != OutpostStatus::Paused, EmergencyPause);

        Ok(())
    }

    /// Owner can always toggle, including back out of a pause.
    pub fn toggle_pause(&mut self) -> bool {
        let paused = self.status() == OutpostStatus::Paused;

        self.status = if paused {
            OutpostStatus::Active as u8
        } else {
            OutpostStatus::Paused as u8
        };

        !paused
    }

    /// Zero-pads a venue or tier name into seed-compatible form.
    pub fn pad_name(name: &str) -> Result<[u8; MAX_NAME_LENGTH]> {
        let bytes = name.as_bytes();

        check_condition!(
            !bytes.is_empty() && bytes.len() <= MAX_NAME_LENGTH,
            InvalidOutpostName
        );

        let mut padded = [0u8; MAX_NAME_LENGTH];
        padded[..bytes.len()].copy_from_slice(bytes);

        Ok(padded)
    }

    pub fn find_tier(&self, tier_id: u64) -> Result<&SubscriptionTier> {
        check_condition!(tier_id < self.tier_count, TierNotFound);

        Ok(&self.tiers[tier_id as usize])
    }

    /// Appends a tier and returns its id (the insertion index, stable for the
    /// life of the outpost). Names are compared byte-exact, so uniqueness is
    /// case-sensitive.
    pub fn add_tier(&mut self, name: &str, price: u64, duration: DurationClass) -> Result<u64> {
        let bytes = name.as_bytes();
        check_condition!(
            !bytes.is_empty() && bytes.len() <= MAX_NAME_LENGTH,
            InvalidTierName
        );

        let mut padded = [0u8; MAX_NAME_LENGTH];
        padded[..bytes.len()].copy_from_slice(bytes);

        check_condition!((self.tier_count as usize) < MAX_TIERS, MaxTiersReached);

        for tier in &self.tiers[..self.tier_count as usize] {
            check_condition!(tier.name != padded, TierNameExists);
        }

        let tier_id = self.tier_count;
        self.tiers[tier_id as usize] = SubscriptionTier::new(padded, price, duration);
        self.tier_count += 1;

        Ok(tier_id)
    }

    /// Updates price and/or duration in place; identity and name are fixed.
    pub fn update_tier(
        &mut self,
        tier_id: u64,
        price: Option<u64>,
        duration: Option<DurationClass>,
    ) -> Result<()> {
        check_condition!(tier_id < self.tier_count, TierNotFound);

        let tier = &mut self.tiers[tier_id as usize];

        if let Some(price) = price {
            tier.price = price;
        }

        if let Some(duration) = duration {
            tier.duration = duration as u8;
        }

        Ok(())
    }
}
