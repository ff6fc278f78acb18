use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::common::ADMIN;
use shared::constants::PROTOCOL_CONFIG_SEEDS;
use shared::errors::ErrorCode;

use crate::events::ProtocolConfigUpdated;
use crate::state::ProtocolConfig;

#[derive(Accounts)]
pub struct SetProtocolConfig<'info> {
    pub system_program: Program<'info, System>,

    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [PROTOCOL_CONFIG_SEEDS],
        bump = protocol_config.bump
    )]
    pub protocol_config: Account<'info, ProtocolConfig>,
}

impl SetProtocolConfig<'_> {
    pub fn validate(&self) -> Result<()> {
        check_condition!(self.admin.key() == ADMIN, NotAdmin);

        Ok(())
    }
}

pub fn handler(
    ctx: Context<SetProtocolConfig>,
    treasury: Option<Pubkey>,
    payment_mint: Option<Pubkey>,
    outpost_purchase_price: Option<u64>,
) -> Result<()> {
    ctx.accounts.validate()?;

    let protocol_config = &mut ctx.accounts.protocol_config;

    protocol_config.update_config(treasury, payment_mint, outpost_purchase_price);

    emit!(ProtocolConfigUpdated {
        treasury: protocol_config.treasury,
        payment_mint: protocol_config.payment_mint,
        outpost_purchase_price: protocol_config.outpost_purchase_price,
    });

    Ok(())
}
