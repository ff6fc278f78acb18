use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use outpost_admin::state::ProtocolConfig;
use outpost_admin::ID as OUTPOST_ADMIN_PROGRAM_ID;
use shared::check_condition;
use shared::constants::{
    PASS_MINT_SEEDS, PASS_STATS_SEEDS, PROTOCOL_CONFIG_SEEDS, REDEMPTION_VAULT_SEEDS,
};
use shared::errors::ErrorCode;

use crate::events::PassesSold;
use crate::state::{Outpost, PassStats, RedemptionVault};
use crate::utils::structs::TradeSide;
use crate::utils::{split_sell, total_price, TokenUtil};

#[derive(Accounts)]
pub struct SellPasses<'info> {
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,

    #[account(mut)]
    pub seller: Signer<'info>,

    #[account(
        seeds = [PROTOCOL_CONFIG_SEEDS],
        bump = protocol_config.bump,
        seeds::program = OUTPOST_ADMIN_PROGRAM_ID,
    )]
    pub protocol_config: Box<Account<'info, ProtocolConfig>>,

    /// CHECK: any account may act as a pass target; a target owned by this
    /// program is an outpost and must come with its account below
    pub target: UncheckedAccount<'info>,

    pub outpost: Option<AccountLoader<'info, Outpost>>,

    #[account(
        mut,
        seeds = [PASS_STATS_SEEDS, target.key().as_ref()],
        bump = pass_stats.bump
    )]
    pub pass_stats: Box<Account<'info, PassStats>>,

    #[account(
        mut,
        seeds = [PASS_MINT_SEEDS, target.key().as_ref()],
        bump,
    )]
    pub pass_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = pass_mint,
        associated_token::authority = seller,
    )]
    pub seller_pass_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(address = protocol_config.payment_mint @ ErrorCode::InvalidPaymentMint)]
    pub payment_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = seller,
        associated_token::mint = payment_mint,
        associated_token::authority = seller,
    )]
    pub seller_payment_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [REDEMPTION_VAULT_SEEDS],
        bump = redemption_vault.bump
    )]
    pub redemption_vault: Box<Account<'info, RedemptionVault>>,

    #[account(
        mut,
        associated_token::mint = payment_mint,
        associated_token::authority = redemption_vault,
    )]
    pub vault_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: treasury wallet from the protocol config
    #[account(address = protocol_config.treasury @ ErrorCode::InvalidTreasury)]
    pub treasury: UncheckedAccount<'info>,

    /// CHECK: treasury ATA, validated and created on demand by TokenUtil
    #[account(mut)]
    pub treasury_token_account: UncheckedAccount<'info>,

    /// CHECK: outpost owner for outpost targets, the target itself otherwise;
    /// validated against the loaded outpost in the handler
    pub subject: UncheckedAccount<'info>,

    /// CHECK: subject ATA, validated and created on demand by TokenUtil
    #[account(mut)]
    pub subject_token_account: UncheckedAccount<'info>,
}

impl SellPasses<'_> {
    pub fn validate(&self, amount: u64) -> Result<()> {
        check_condition!(amount > 0, InvalidAmount);

        if *self.target.owner == crate::ID {
            check_condition!(self.outpost.is_some(), InvalidTarget);
        }

        if let Some(outpost) = &self.outpost {
            check_condition!(outpost.key() == self.target.key(), InvalidTarget);
        }

        check_condition!(
            self.seller_pass_account.amount >= amount,
            InsufficientCallerBalance
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<SellPasses>, amount: u64) -> Result<()> {
    ctx.accounts.validate(amount)?;

    let mut fees = ctx.accounts.protocol_config.trading_fees();
    let weights = ctx.accounts.protocol_config.curve_weights();

    match &ctx.accounts.outpost {
        Some(outpost_loader) => {
            let outpost = outpost_loader.load()?;

            outpost.validate_not_paused()?;

            check_condition!(
                ctx.accounts.subject.key() == outpost.owner,
                InvalidSubjectFeeRecipient
            );

            fees.subject_fee_bps = outpost.royalty_bps;
        }
        None => {
            check_condition!(
                ctx.accounts.subject.key() == ctx.accounts.target.key(),
                InvalidSubjectFeeRecipient
            );
        }
    }

    let base_price = total_price(
        ctx.accounts.pass_stats.total_supply,
        amount,
        TradeSide::Sell,
        &weights,
    )?;
    let split = split_sell(base_price, &fees)?;

    // The whole base price leaves the pool; fees come out of it, never out of
    // the remaining vault balance.
    ctx.accounts.redemption_vault.withdraw(base_price)?;

    token::burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            token::Burn {
                mint: ctx.accounts.pass_mint.to_account_info(),
                from: ctx.accounts.seller_pass_account.to_account_info(),
                authority: ctx.accounts.seller.to_account_info(),
            },
        ),
        amount,
    )?;

    let vault_bump = ctx.accounts.redemption_vault.bump;
    let signer_seeds = &[REDEMPTION_VAULT_SEEDS, &[vault_bump]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: ctx.accounts.vault_token_account.to_account_info(),
                to: ctx.accounts.seller_payment_account.to_account_info(),
                authority: ctx.accounts.redemption_vault.to_account_info(),
            },
            &[signer_seeds],
        ),
        split.net_to_seller,
    )?;

    TokenUtil::pay_wallet(
        split.protocol_fee,
        &ctx.accounts.treasury.to_account_info(),
        &ctx.accounts.treasury_token_account.to_account_info(),
        &ctx.accounts.vault_token_account.to_account_info(),
        &ctx.accounts.redemption_vault.to_account_info(),
        &ctx.accounts.seller.to_account_info(),
        &ctx.accounts.payment_mint.to_account_info(),
        &ctx.accounts.token_program.to_account_info(),
        &ctx.accounts.associated_token_program.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        Some(&[signer_seeds]),
    )?;

    TokenUtil::pay_wallet(
        split.subject_fee,
        &ctx.accounts.subject.to_account_info(),
        &ctx.accounts.subject_token_account.to_account_info(),
        &ctx.accounts.vault_token_account.to_account_info(),
        &ctx.accounts.redemption_vault.to_account_info(),
        &ctx.accounts.seller.to_account_info(),
        &ctx.accounts.payment_mint.to_account_info(),
        &ctx.accounts.token_program.to_account_info(),
        &ctx.accounts.associated_token_program.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        Some(&[signer_seeds]),
    )?;

    ctx.accounts
        .pass_stats
        .record_sell(amount, base_price)?;

    emit!(PassesSold {
        target: ctx.accounts.target.key(),
        seller: ctx.accounts.seller.key(),
        amount,
        base_price,
        protocol_fee: split.protocol_fee,
        subject_fee: split.subject_fee,
        net_proceeds: split.net_to_seller,
        total_supply: ctx.accounts.pass_stats.total_supply,
    });

    Ok(())
}
