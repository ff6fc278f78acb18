use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use outpost_admin::state::ProtocolConfig;
use outpost_admin::ID as OUTPOST_ADMIN_PROGRAM_ID;
use shared::check_condition;
use shared::constants::{PROTOCOL_CONFIG_SEEDS, SUBSCRIPTION_SEEDS};
use shared::errors::ErrorCode;

use crate::events::SubscriptionCreated;
use crate::state::{Outpost, Subscription};
use crate::utils::{split_subscription, TokenUtil};

#[derive(Accounts)]
pub struct Subscribe<'info> {
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,

    #[account(mut)]
    pub subscriber: Signer<'info>,

    #[account(
        seeds = [PROTOCOL_CONFIG_SEEDS],
        bump = protocol_config.bump,
        seeds::program = OUTPOST_ADMIN_PROGRAM_ID,
    )]
    pub protocol_config: Box<Account<'info, ProtocolConfig>>,

    pub outpost: AccountLoader<'info, Outpost>,

    /// A record here outlives its expiry: it keeps blocking a new subscribe
    /// until it is cancelled, matching the strict lifecycle.
    #[account(
        init_if_needed,
        payer = subscriber,
        space = Subscription::SIZE,
        seeds = [SUBSCRIPTION_SEEDS, outpost.key().as_ref(), subscriber.key().as_ref()],
        bump
    )]
    pub subscription: Box<Account<'info, Subscription>>,

    #[account(address = protocol_config.payment_mint @ ErrorCode::InvalidPaymentMint)]
    pub payment_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = payment_mint,
        associated_token::authority = subscriber,
    )]
    pub subscriber_payment_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: current outpost owner, validated against the loaded outpost
    pub outpost_owner: UncheckedAccount<'info>,

    /// CHECK: owner ATA, validated and created on demand by TokenUtil
    #[account(mut)]
    pub owner_token_account: UncheckedAccount<'info>,

    /// CHECK: treasury wallet from the protocol config
    #[account(address = protocol_config.treasury @ ErrorCode::InvalidTreasury)]
    pub treasury: UncheckedAccount<'info>,

    /// CHECK: treasury ATA, validated and created on demand by TokenUtil
    #[account(mut)]
    pub treasury_token_account: UncheckedAccount<'info>,

    /// CHECK: optional referrer wallet
    pub referrer: Option<UncheckedAccount<'info>>,

    /// CHECK: referrer ATA, validated and created on demand by TokenUtil
    #[account(mut)]
    pub referrer_token_account: Option<UncheckedAccount<'info>>,
}

impl Subscribe<'_> {
    pub fn validate(&self, outpost: &Outpost, tier_id: u64) -> Result<()> {
        outpost.validate_not_paused()?;

        check_condition!(
            self.outpost_owner.key() == outpost.owner,
            InvalidSubjectFeeRecipient
        );

        outpost.find_tier(tier_id)?;

        check_condition!(!self.subscription.exists(), AlreadySubscribed);

        check_condition!(
            self.referrer.is_some() == self.referrer_token_account.is_some(),
            MissingReferrerTokenAccount
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<Subscribe>, tier_id: u64) -> Result<()> {
    let (tier_price, duration_seconds) = {
        let outpost = ctx.accounts.outpost.load()?;

        ctx.accounts.validate(&outpost, tier_id)?;

        let tier = outpost.find_tier(tier_id)?;

        (tier.price, tier.duration_class().seconds())
    };

    check_condition!(
        ctx.accounts.subscriber_payment_account.amount >= tier_price,
        InsufficientCallerBalance
    );

    let fees = ctx.accounts.protocol_config.subscription_fees();
    let split = split_subscription(tier_price, &fees)?;

    // The referrer slot is carved out either way; without a referrer it is
    // paid to the treasury alongside the protocol fee.
    let treasury_amount = if ctx.accounts.referrer.is_some() {
        split.protocol_fee
    } else {
        split
            .protocol_fee
            .checked_add(split.referral_fee)
            .ok_or(ErrorCode::MathOverflow)?
    };

    TokenUtil::pay_wallet(
        treasury_amount,
        &ctx.accounts.treasury.to_account_info(),
        &ctx.accounts.treasury_token_account.to_account_info(),
        &ctx.accounts.subscriber_payment_account.to_account_info(),
        &ctx.accounts.subscriber.to_account_info(),
        &ctx.accounts.subscriber.to_account_info(),
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
            &ctx.accounts.subscriber_payment_account.to_account_info(),
            &ctx.accounts.subscriber.to_account_info(),
            &ctx.accounts.subscriber.to_account_info(),
            &ctx.accounts.payment_mint.to_account_info(),
            &ctx.accounts.token_program.to_account_info(),
            &ctx.accounts.associated_token_program.to_account_info(),
            &ctx.accounts.system_program.to_account_info(),
            None,
        )?;
    }

    TokenUtil::pay_wallet(
        split.owner_amount,
        &ctx.accounts.outpost_owner.to_account_info(),
        &ctx.accounts.owner_token_account.to_account_info(),
        &ctx.accounts.subscriber_payment_account.to_account_info(),
        &ctx.accounts.subscriber.to_account_info(),
        &ctx.accounts.subscriber.to_account_info(),
        &ctx.accounts.payment_mint.to_account_info(),
        &ctx.accounts.token_program.to_account_info(),
        &ctx.accounts.associated_token_program.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        None,
    )?;

    let now = Clock::get()?.unix_timestamp;
    let end_time = now
        .checked_add(duration_seconds as i64)
        .ok_or(ErrorCode::MathOverflow)?;

    let subscription = &mut ctx.accounts.subscription;

    subscription.bump = ctx.bumps.subscription;
    subscription.subscriber = ctx.accounts.subscriber.key();
    subscription.outpost = ctx.accounts.outpost.key();
    subscription.tier_id = tier_id;
    subscription.start_time = now;
    subscription.end_time = end_time;

    emit!(SubscriptionCreated {
        outpost: ctx.accounts.outpost.key(),
        subscriber: ctx.accounts.subscriber.key(),
        tier_id,
        price: tier_price,
        start_time: now,
        end_time,
    });

    Ok(())
}
