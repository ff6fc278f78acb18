use anchor_lang::prelude::*;
use shared::check_condition;
use shared::errors::ErrorCode;
use shared::structs::DurationClass;

use crate::events::TierCreated;
use crate::state::Outpost;

#[derive(Accounts)]
pub struct CreateSubscriptionTier<'info> {
    pub owner: Signer<'info>,

    #[account(mut)]
    pub outpost: AccountLoader<'info, Outpost>,
}

impl CreateSubscriptionTier<'_> {
    pub fn validate(&self, outpost: &Outpost, price: u64) -> Result<()> {
        outpost.validate_owner(&self.owner.key())?;
        outpost.validate_not_paused()?;

        check_condition!(price > 0, InvalidAmount);

        Ok(())
    }
}

pub fn handler(
    ctx: Context<CreateSubscriptionTier>,
    name: String,
    price: u64,
    duration: u8,
) -> Result<()> {
    let duration = DurationClass::try_from(duration).ok_or(ErrorCode::InvalidDuration)?;

    let tier_id = {
        let outpost = &mut ctx.accounts.outpost.load_mut()?;

        ctx.accounts.validate(outpost, price)?;

        outpost.add_tier(&name, price, duration)?
    };

    emit!(TierCreated {
        outpost: ctx.accounts.outpost.key(),
        tier_id,
        name,
        price,
        duration: duration as u8,
    });

    Ok(())
}
