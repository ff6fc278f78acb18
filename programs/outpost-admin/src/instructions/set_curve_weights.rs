use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::common::ADMIN;
use shared::constants::PROTOCOL_CONFIG_SEEDS;
use shared::errors::ErrorCode;

use crate::events::CurveWeightsSet;
use crate::state::ProtocolConfig;

#[derive(Accounts)]
pub struct SetCurveWeights<'info> {
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

impl SetCurveWeights<'_> {
    pub fn validate(&self) -> Result<()> {
        check_condition!(self.admin.key() == ADMIN, NotAdmin);

        Ok(())
    }
}

pub fn handler(
    ctx: Context<SetCurveWeights>,
    weight_a: Option<u16>,
    weight_b: Option<u16>,
    weight_c: Option<u16>,
) -> Result<()> {
    ctx.accounts.validate()?;

    let protocol_config = &mut ctx.accounts.protocol_config;

    protocol_config.update_curve_weights(weight_a, weight_b, weight_c)?;

    emit!(CurveWeightsSet {
        weight_a: protocol_config.weight_a,
        weight_b: protocol_config.weight_b,
        weight_c: protocol_config.weight_c,
    });

    Ok(())
}
