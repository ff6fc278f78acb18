use anchor_lang::prelude::*;
use shared::check_condition;
use shared::errors::ErrorCode;

use crate::state::RedemptionVault;

impl RedemptionVault {
    /// Called with the base portion of every buy; fee surcharges never land
    /// here.
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(())
    }

    /// Called with the base portion of every sell. Never a partial fill: a
    /// withdrawal beyond the pooled balance fails whole.
    pub fn withdraw(&mut self, amount: u64) -> Result<()> {
        check_condition!(amount <= self.balance, InsufficientVaultBalance);

        self.balance -= amount;

        Ok(())
    }
}
