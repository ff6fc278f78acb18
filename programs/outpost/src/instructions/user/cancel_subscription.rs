use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::SUBSCRIPTION_SEEDS;
use shared::errors::ErrorCode;

use crate::events::SubscriptionCancelled;
use crate::state::{Outpost, Subscription};

#[derive(Accounts)]
pub struct CancelSubscription<'info> {
    pub system_program: Program<'info, System>,

    #[account(mut)]
    pub subscriber: Signer<'info>,

    pub outpost: AccountLoader<'info, Outpost>,

    /// Closing hands the rent back to the subscriber; the subscription price
    /// itself is never refunded.
    #[account(
        mut,
        close = subscriber,
        seeds = [SUBSCRIPTION_SEEDS, outpost.key().as_ref(), subscriber.key().as_ref()],
        bump = subscription.bump
    )]
    pub subscription: Account<'info, Subscription>,
}

impl CancelSubscription<'_> {
    pub fn validate(&self) -> Result<()> {
        check_condition!(self.subscription.exists(), SubscriptionNotFound);

        Ok(())
    }
}

pub fn handler(ctx: Context<CancelSubscription>) -> Result<()> {
    ctx.accounts.validate()?;

    emit!(SubscriptionCancelled {
        outpost: ctx.accounts.outpost.key(),
        subscriber: ctx.accounts.subscriber.key(),
    });

    Ok(())
}
