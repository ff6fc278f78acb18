use anchor_lang::prelude::*;

use instructions::*;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

declare_id!("8TkPkUozs2WMDCVCEtFwWY1FxCMgtW5HTMU4pPC16Zm8");

#[program]
pub mod outpost_admin {

    use super::*;

    pub fn init_protocol_config(
        ctx: Context<InitProtocolConfig>,
        treasury: Pubkey,
        payment_mint: Pubkey,
    ) -> Result<()> {
        init_protocol_config::handler(ctx, treasury, payment_mint)
    }

    pub fn set_protocol_config(
        ctx: Context<SetProtocolConfig>,
        treasury: Option<Pubkey>,
        payment_mint: Option<Pubkey>,
        outpost_purchase_price: Option<u64>,
    ) -> Result<()> {
        set_protocol_config::handler(ctx, treasury, payment_mint, outpost_purchase_price)
    }

    pub fn set_trading_fees(
        ctx: Context<SetTradingFees>,
        protocol_fee_bps: Option<u16>,
        subject_fee_bps: Option<u16>,
        referral_fee_bps: Option<u16>,
    ) -> Result<()> {
        set_trading_fees::handler(ctx, protocol_fee_bps, subject_fee_bps, referral_fee_bps)
    }

    pub fn set_subscription_fees(
        ctx: Context<SetSubscriptionFees>,
        protocol_subscription_fee_bps: Option<u16>,
        referrer_fee_bps: Option<u16>,
    ) -> Result<()> {
        set_subscription_fees::handler(ctx, protocol_subscription_fee_bps, referrer_fee_bps)
    }

    pub fn set_curve_weights(
        ctx: Context<SetCurveWeights>,
        weight_a: Option<u16>,
        weight_b: Option<u16>,
        weight_c: Option<u16>,
    ) -> Result<()> {
        set_curve_weights::handler(ctx, weight_a, weight_b, weight_c)
    }
}
