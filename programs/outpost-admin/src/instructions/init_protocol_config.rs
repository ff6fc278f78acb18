use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::common::ADMIN;
use shared::constants::PROTOCOL_CONFIG_SEEDS;
use shared::errors::ErrorCode;

use crate::events::ProtocolConfigInitialized;
use crate::state::ProtocolConfig;

#[derive(Accounts)]
pub struct InitProtocolConfig<'info> {
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,

    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = ProtocolConfig::SIZE,
        seeds = [PROTOCOL_CONFIG_SEEDS],
        bump
    )]
    pub protocol_config: Account<'info, ProtocolConfig>,
}

impl InitProtocolConfig<'_> {
    pub fn validate(&self) -> Result<()> {
        check_condition!(self.admin.key() == ADMIN, NotAdmin);

        Ok(())
    }
}

pub fn handler(
    ctx: Context<InitProtocolConfig>,
    treasury: Pubkey,
    payment_mint: Pubkey,
) -> Result<()> {
    ctx.accounts.validate()?;

    let protocol_config = &mut ctx.accounts.protocol_config;

    protocol_config.init(ctx.bumps.protocol_config, treasury, payment_mint)?;

    emit!(ProtocolConfigInitialized {
        treasury,
        payment_mint,
    });

    Ok(())
}
