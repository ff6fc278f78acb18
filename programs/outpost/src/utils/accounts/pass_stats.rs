use anchor_lang::prelude::*;
use shared::check_condition;
use shared::errors::ErrorCode;

use crate::state::PassStats;

impl PassStats {
    pub fn record_buy(&mut self, amount: u64, price: u64) -> Result<()> {
        self.total_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        self.last_price = price;

        Ok(())
    }

    /// Supply can never go negative: selling more than is outstanding fails
    /// before any state changes.
    pub fn record_sell(&mut self, amount: u64, price: u64) -> Result<()> {
        check_condition!(amount <= self.total_supply, SupplyUnderflow);

        self.total_supply -= amount;
        self.last_price = price;

        Ok(())
    }
}
