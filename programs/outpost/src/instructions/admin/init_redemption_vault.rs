use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use outpost_admin::state::ProtocolConfig;
use outpost_admin::ID as OUTPOST_ADMIN_PROGRAM_ID;
use shared::check_condition;
use shared::constants::common::ADMIN;
use shared::constants::{PROTOCOL_CONFIG_SEEDS, REDEMPTION_VAULT_SEEDS};
use shared::errors::ErrorCode;

use crate::state::RedemptionVault;

#[derive(Accounts)]
pub struct InitRedemptionVault<'info> {
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,

    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [PROTOCOL_CONFIG_SEEDS],
        bump = protocol_config.bump,
        seeds::program = OUTPOST_ADMIN_PROGRAM_ID,
    )]
    pub protocol_config: Account<'info, ProtocolConfig>,

    #[account(
        init,
        payer = admin,
        space = RedemptionVault::SIZE,
        seeds = [REDEMPTION_VAULT_SEEDS],
        bump
    )]
    pub redemption_vault: Account<'info, RedemptionVault>,

    #[account(address = protocol_config.payment_mint @ ErrorCode::InvalidPaymentMint)]
    pub payment_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init,
        payer = admin,
        associated_token::mint = payment_mint,
        associated_token::authority = redemption_vault,
    )]
    pub vault_token_account: Box<InterfaceAccount<'info, TokenAccount>>,
}

impl InitRedemptionVault<'_> {
    pub fn validate(&self) -> Result<()> {
        check_condition!(self.admin.key() == ADMIN, NotAdmin);

        Ok(())
    }
}

pub fn handler(ctx: Context<InitRedemptionVault>) -> Result<()> {
    ctx.accounts.validate()?;

    let redemption_vault = &mut ctx.accounts.redemption_vault;

    redemption_vault.bump = ctx.bumps.redemption_vault;
    redemption_vault.balance = 0;

    Ok(())
}
