use anchor_lang::prelude::*;

use crate::events::OutpostPriceUpdated;
use crate::state::Outpost;

#[derive(Accounts)]
pub struct UpdateOutpostPrice<'info> {
    pub owner: Signer<'info>,

    #[account(mut)]
    pub outpost: AccountLoader<'info, Outpost>,
}

impl UpdateOutpostPrice<'_> {
    pub fn validate(&self, outpost: &Outpost) -> Result<()> {
        outpost.validate_owner(&self.owner.key())?;
        outpost.validate_not_paused()?;

        Ok(())
    }
}

pub fn handler(ctx: Context<UpdateOutpostPrice>, new_price: u64) -> Result<()> {
    {
        let outpost = &mut ctx.accounts.outpost.load_mut()?;

        ctx.accounts.validate(outpost)?;

        outpost.price = new_price;
    }

    emit!(OutpostPriceUpdated {
        outpost: ctx.accounts.outpost.key(),
        new_price,
    });

    Ok(())
}
