use anchor_lang::prelude::*;

use instructions::*;

pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

declare_id!("xJGfudj18PwVdhCmaPyyjZkz1c4oWaQcW76yN4khb6Q");

#[program]
pub mod outpost {

    use super::*;

    /*
    Admin functions
    */
    pub fn init_redemption_vault(ctx: Context<InitRedemptionVault>) -> Result<()> {
        init_redemption_vault::handler(ctx)
    }

    /*
    Outpost functions
    */
    pub fn create_outpost(
        ctx: Context<CreateOutpost>,
        name: String,
        description: String,
        uri: String,
    ) -> Result<()> {
        create_outpost::handler(ctx, name, description, uri)
    }

    pub fn update_outpost_price(ctx: Context<UpdateOutpostPrice>, new_price: u64) -> Result<()> {
        update_outpost_price::handler(ctx, new_price)
    }

    pub fn toggle_emergency_pause(ctx: Context<ToggleEmergencyPause>) -> Result<()> {
        toggle_emergency_pause::handler(ctx)
    }

    pub fn transfer_outpost_ownership(
        ctx: Context<TransferOutpostOwnership>,
        new_owner: Pubkey,
    ) -> Result<()> {
        transfer_outpost_ownership::handler(ctx, new_owner)
    }

    /*
    Pass trading functions
    */
    pub fn buy_passes(ctx: Context<BuyPasses>, amount: u64) -> Result<()> {
        buy_passes::handler(ctx, amount)
    }

    pub fn sell_passes(ctx: Context<SellPasses>, amount: u64) -> Result<()> {
        sell_passes::handler(ctx, amount)
    }

    /*
    Subscription functions
    */
    pub fn create_subscription_tier(
        ctx: Context<CreateSubscriptionTier>,
        name: String,
        price: u64,
        duration: u8,
    ) -> Result<()> {
        create_subscription_tier::handler(ctx, name, price, duration)
    }

    pub fn update_subscription_tier(
        ctx: Context<UpdateSubscriptionTier>,
        tier_id: u64,
        price: Option<u64>,
        duration: Option<u8>,
    ) -> Result<()> {
        update_subscription_tier::handler(ctx, tier_id, price, duration)
    }

    pub fn subscribe(ctx: Context<Subscribe>, tier_id: u64) -> Result<()> {
        subscribe::handler(ctx, tier_id)
    }

    pub fn cancel_subscription(ctx: Context<CancelSubscription>) -> Result<()> {
        cancel_subscription::handler(ctx)
    }
}
