use anchor_lang::prelude::*;

use crate::events::OutpostOwnershipTransferred;
use crate::state::Outpost;

#[derive(Accounts)]
pub struct TransferOutpostOwnership<'info> {
    pub owner: Signer<'info>,

    #[account(mut)]
    pub outpost: AccountLoader<'info, Outpost>,
}

impl TransferOutpostOwnership<'_> {
    /// Ownership can move even while the venue is paused.
    pub fn validate(&self, outpost: &Outpost) -> Result<()> {
        outpost.validate_owner(&self.owner.key())?;

        Ok(())
    }
}

pub fn handler(ctx: Context<TransferOutpostOwnership>, new_owner: Pubkey) -> Result<()> {
    let previous_owner = {
        let outpost = &mut ctx.accounts.outpost.load_mut()?;

        ctx.accounts.validate(outpost)?;

        let previous_owner = outpost.owner;
        outpost.owner = new_owner;

        previous_owner
    };

    emit!(OutpostOwnershipTransferred {
        outpost: ctx.accounts.outpost.key(),
        previous_owner,
        new_owner,
    });

    Ok(())
}
