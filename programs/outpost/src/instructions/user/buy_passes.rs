use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use outpost_admin::state::ProtocolConfig;
use outpost_admin::ID as OUTPOST_ADMIN_PROGRAM_ID;
use shared::check_condition;
use shared::constants::{
    INITIAL_PRICE, PASS_MINT_SEEDS, PASS_STATS_SEEDS, PROTOCOL_CONFIG_SEEDS,
    REDEMPTION_VAULT_SEEDS,
};
use shared::errors::ErrorCode;

use crate::events::PassesPurchased;
use crate::state::{Outpost, PassStats, RedemptionVault};
use crate::utils::structs::TradeSide;
use crate::utils::{split_buy, total_price, TokenUtil};

#[derive(Accounts)]
pub struct BuyPasses<'info> {
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,

    #[account(mut)]
    pub buyer: Signer<'info>,

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
        init_if_needed,
        payer = buyer,
        space = PassStats::SIZE,
        seeds = [PASS_STATS_SEEDS, target.key().as_ref()],
        bump
    )]
    pub pass_stats: Box<Account<'info, PassStats>>,

    #[account(
        init_if_needed,
        payer = buyer,
        seeds = [PASS_MINT_SEEDS, target.key().as_ref()],
        bump,
        mint::decimals = 0,
        mint::authority = pass_stats,
        mint::freeze_authority = pass_stats,
    )]
    pub pass_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = buyer,
        associated_token::mint = pass_mint,
        associated_token::authority = buyer,
    )]
    pub buyer_pass_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(address = protocol_config.payment_mint @ ErrorCode::InvalidPaymentMint)]
    pub payment_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = payment_mint,
        associated_token::authority = buyer,
    )]
    pub buyer_payment_account: Box<InterfaceAccount<'info, TokenAccount>>,

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

    /// CHECK: optional referrer wallet
    pub referrer: Option<UncheckedAccount<'info>>,

    /// CHECK: referrer ATA, validated and created on demand by TokenUtil
    #[account(mut)]
    pub referrer_token_account: Option<UncheckedAccount<'info>>,
}

impl BuyPasses<'_> {
    pub fn validate(&self, amount: u64) -> Result<()> {
        check_condition!(amount > 0, InvalidAmount);

        if *self.target.owner == crate::ID {
            check_condition!(self.outpost.is_some(), InvalidTarget);
        }

        if let Some(outpost) = &self.outpost {
            check_condition!(outpost.key() == self.target.key(), InvalidTarget);
        }

        check_condition!(
            self.referrer.is_some() == self.referrer_token_account.is_some(),
            MissingReferrerTokenAccount
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<BuyPasses>, amount: u64) -> Result<()> {
    ctx.accounts.validate(amount)?;

    // Fee schedule and weights are snapshotted here; a racing config update
    // only affects later transactions.
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
        TradeSide::Buy,
        &weights,
    )?;
    let split = split_buy(base_price, &fees, ctx.accounts.referrer.is_some())?;

    check_condition!(
        ctx.accounts.buyer_payment_account.amount >= split.total,
        InsufficientCallerBalance
    );

    // The base price funds the redemption vault; every fee leg is a surcharge
    // paid on top of it.
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: ctx.accounts.buyer_payment_account.to_account_info(),
                to: ctx.accounts.vault_token_account.to_account_info(),
                authority: ctx.accounts.buyer.to_account_info(),
            },
        ),
        split.base,
    )?;

    TokenUtil::pay_wallet(
        split.protocol_fee,
        &ctx.accounts.treasury.to_account_info(),
        &ctx.accounts.treasury_token_account.to_account_info(),
        &ctx.accounts.buyer_payment_account.to_account_info(),
        &ctx.accounts.buyer.to_account_info(),
        &ctx.accounts.buyer.to_account_info(),
        &ctx.accounts.payment_mint.to_account_info(),
        &ctx.accounts.token_program.to_account_info(),
        &ctx.accounts.associated_token_program.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        None,
    )?;

    TokenUtil::pay_wallet(
        split.subject_fee,
        &ctx.accounts.subject.to_account_info(),
        &ctx.accounts.subject_token_account.to_account_info(),
        &ctx.accounts.buyer_payment_account.to_account_info(),
        &ctx.accounts.buyer.to_account_info(),
        &ctx.accounts.buyer.to_account_info(),
        &ctx.accounts.payment_mint.to_account_info(),
        &ctx.accounts.token_program.to_account_info(),
        &ctx.accounts.associated_token_program.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        None,
    )?;

    if let (Some(referrer), Some(referrer_token_account)) = (
        &ctx.accounts.referrer,
        &ctx.accounts.referrer_token_account,
    ) {
        TokenUtil::pay_wallet(
            split.referral_fee,
            &referrer.to_account_info(),
            &referrer_token_account.to_account_info(),
            &ctx.accounts.buyer_payment_account.to_account_info(),
            &ctx.accounts.buyer.to_account_info(),
            &ctx.accounts.buyer.to_account_info(),
            &ctx.accounts.payment_mint.to_account_info(),
            &ctx.accounts.token_program.to_account_info(),
            &ctx.accounts.associated_token_program.to_account_info(),
            &ctx.accounts.system_program.to_account_info(),
            None,
        )?;
    }

    ctx.accounts.redemption_vault.deposit(split.base)?;

    {
        let pass_stats = &mut ctx.accounts.pass_stats;

        // Freshly created ledgers start at zero supply and the price floor.
        if pass_stats.target == Pubkey::default() {
            pass_stats.bump = ctx.bumps.pass_stats;
            pass_stats.target = ctx.accounts.target.key();
            pass_stats.mint = ctx.accounts.pass_mint.key();
            pass_stats.last_price = INITIAL_PRICE;
        }

        pass_stats.record_buy(amount, split.base)?;
    }

    let target_key = ctx.accounts.target.key();
    let stats_bump = ctx.accounts.pass_stats.bump;
    let signer_seeds = &[PASS_STATS_SEEDS, target_key.as_ref(), &[stats_bump]];

    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            token::MintTo {
                mint: ctx.accounts.pass_mint.to_account_info(),
                to: ctx.accounts.buyer_pass_account.to_account_info(),
                authority: ctx.accounts.pass_stats.to_account_info(),
            },
            &[signer_seeds],
        ),
        amount,
    )?;

    emit!(PassesPurchased {
        target: target_key,
        buyer: ctx.accounts.buyer.key(),
        amount,
        base_price: split.base,
        protocol_fee: split.protocol_fee,
        subject_fee: split.subject_fee,
        referral_fee: split.referral_fee,
        total_supply: ctx.accounts.pass_stats.total_supply,
    });

    Ok(())
}
