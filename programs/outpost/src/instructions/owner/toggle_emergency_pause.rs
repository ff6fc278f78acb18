use anchor_lang::prelude::*;

use crate::events::EmergencyPauseToggled;
use crate::state::Outpost;

#[derive(Accounts)]
pub struct ToggleEmergencyPause<'info> {
    pub owner: Signer<'info>,

    #[account(mut)]
    pub outpost: AccountLoader<'info, Outpost>,
}

impl ToggleEmergencyPause<'_> {
    pub fn validate(&self, outpost: &Outpost) -> Result<()> {
        outpost.validate_owner(&self.owner.key())?;

        Ok(())
    }
}

pub fn handler(ctx: Context<ToggleEmergencyPause>) -> Result<()> {
    let paused = {
        let outpost = &mut ctx.accounts.outpost.load_mut()?;

        ctx.accounts.validate(outpost)?;

        outpost.toggle_pause()
    };

    emit!(EmergencyPauseToggled {
        outpost: ctx.accounts.outpost.key(),
        paused,
    });

    Ok(())
}
