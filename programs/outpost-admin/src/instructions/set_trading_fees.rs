use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::common::ADMIN;
use shared::constants::PROTOCOL_CONFIG_SEEDS;
use shared::errors::ErrorCode;

use crate::events::TradingFeesSet;
use crate::state::ProtocolConfig;

#[derive(Accounts)]
pub struct SetTradingFees<'info> {
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

impl SetTradingFees<'_> {
    pub fn validate(&self) -> Result<()> {
        check_condition!(self.admin.key() == ADMIN, NotAdmin);

        Ok(())
    }
}

pub fn handler(
    ctx: Context<SetTradingFees>,
    protocol_fee_bps: Option<u16>,
    subject_fee_bps: Option<u16>,
    referral_fee_bps: Option<u16>,
) -> Result<()> {
    ctx.accounts.validate()?;

    let protocol_config = &mut ctx.accounts.protocol_config;

    protocol_config.update_trading_fees(protocol_fee_bps, subject_fee_bps, referral_fee_bps)?;

    emit!(TradingFeesSet {
        protocol_fee_bps: protocol_config.protocol_fee_bps,
        subject_fee_bps: protocol_config.subject_fee_bps,
        referral_fee_bps: protocol_config.referral_fee_bps,
    });

    Ok(())
}
