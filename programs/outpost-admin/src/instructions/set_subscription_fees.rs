use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::common::ADMIN;
use shared::constants::PROTOCOL_CONFIG_SEEDS;
use shared::errors::ErrorCode;

use crate::events::SubscriptionFeesSet;
use crate::state::ProtocolConfig;

#[derive(Accounts)]
pub struct SetSubscriptionFees<'info> {
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

impl SetSubscriptionFees<'_> {
    pub fn validate(&self) -> Result<()> {
        check_condition!(self.admin.key() == ADMIN, NotAdmin);

        Ok(())
    }
}

pub fn handler(
    ctx: Context<SetSubscriptionFees>,
    protocol_subscription_fee_bps: Option<u16>,
    referrer_fee_bps: Option<u16>,
) -> Result<()> {
    ctx.accounts.validate()?;

    let protocol_config = &mut ctx.accounts.protocol_config;

    protocol_config.update_subscription_fees(protocol_subscription_fee_bps, referrer_fee_bps)?;

    emit!(SubscriptionFeesSet {
        protocol_subscription_fee_bps: protocol_config.protocol_subscription_fee_bps,
        referrer_fee_bps: protocol_config.referrer_fee_bps,
    });

    Ok(())
}
