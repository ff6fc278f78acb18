use anchor_lang::prelude::*;
use shared::check_condition;
use shared::errors::ErrorCode;
use shared::structs::DurationClass;

use crate::events::TierUpdated;
use crate::state::Outpost;

#[derive(Accounts)]
pub struct UpdateSubscriptionTier<'info> {
    pub owner: Signer<'info>,

    #[account(mut)]
    pub outpost: AccountLoader<'info, Outpost>,
}

impl UpdateSubscriptionTier<'_> {
    pub fn validate(&self, outpost: &Outpost, price: &Option<u64>) -> Result<()> {
        outpost.validate_owner(&self.owner.key())?;
        outpost.validate_not_paused()?;

        if let Some(price) = price {
            check_condition!(*price > 0, InvalidAmount);
        }

        Ok(())
    }
}

pub fn handler(
    ctx: Context<UpdateSubscriptionTier>,
    tier_id: u64,
    price: Option<u64>,
    duration: Option<u8>,
) -> Result<()> {
    let duration = match duration {
        Some(value) => Some(DurationClass::try_from(value).ok_or(ErrorCode::InvalidDuration)?),
        None => None,
    };

    let (new_price, new_duration) = {
        let outpost = &mut ctx.accounts.outpost.load_mut()?;

        ctx.accounts.validate(outpost, &price)?;

        outpost.update_tier(tier_id, price, duration)?;

        let tier = outpost.find_tier(tier_id)?;
        (tier.price, tier.duration)
    };

    emit!(TierUpdated {
        outpost: ctx.accounts.outpost.key(),
        tier_id,
        price: new_price,
        duration: new_duration,
    });

    Ok(())
}
