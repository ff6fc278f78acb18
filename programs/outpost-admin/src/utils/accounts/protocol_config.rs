use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::{
    DEFAULT_OUTPOST_PURCHASE_PRICE, DEFAULT_PROTOCOL_FEE_BPS,
    DEFAULT_PROTOCOL_SUBSCRIPTION_FEE_BPS, DEFAULT_REFERRAL_FEE_BPS, DEFAULT_REFERRER_FEE_BPS,
    DEFAULT_SUBJECT_FEE_BPS, DEFAULT_WEIGHT_A, DEFAULT_WEIGHT_B, DEFAULT_WEIGHT_C, MAX_FEE_BPS,
    MAX_CURVE_WEIGHT_AB, MAX_CURVE_WEIGHT_C, MIN_CURVE_WEIGHT,
};
use shared::errors::ErrorCode;
use shared::structs::{CurveWeights, SubscriptionFees, TradingFees};

use crate::state::ProtocolConfig;

impl ProtocolConfig {
    pub fn init(
        &mut self,
        bump: u8,
        treasury: Pubkey,
        payment_mint: Pubkey,
    ) -> Result<()> {
        self.bump = bump;
        self.treasury = treasury;
        self.payment_mint = payment_mint;

        self.protocol_fee_bps = DEFAULT_PROTOCOL_FEE_BPS;
        self.subject_fee_bps = DEFAULT_SUBJECT_FEE_BPS;
        self.referral_fee_bps = DEFAULT_REFERRAL_FEE_BPS;
        self.protocol_subscription_fee_bps = DEFAULT_PROTOCOL_SUBSCRIPTION_FEE_BPS;
        self.referrer_fee_bps = DEFAULT_REFERRER_FEE_BPS;

        self.weight_a = DEFAULT_WEIGHT_A;
        self.weight_b = DEFAULT_WEIGHT_B;
        self.weight_c = DEFAULT_WEIGHT_C;

        self.outpost_purchase_price = DEFAULT_OUTPOST_PURCHASE_PRICE;

        Ok(())
    }

    pub fn update_config(
        &mut self,
        treasury: Option<Pubkey>,
        payment_mint: Option<Pubkey>,
        outpost_purchase_price: Option<u64>,
    ) {
        if let Some(treasury) = treasury {
            self.treasury = treasury;
        }

        if let Some(payment_mint) = payment_mint {
            self.payment_mint = payment_mint;
        }

        if let Some(outpost_purchase_price) = outpost_purchase_price {
            self.outpost_purchase_price = outpost_purchase_price;
        }
    }

    pub fn update_trading_fees(
        &mut self,
        protocol_fee_bps: Option<u16>,
        subject_fee_bps: Option<u16>,
        referral_fee_bps: Option<u16>,
    ) -> Result<()> {
        if let Some(protocol_fee_bps) = protocol_fee_bps {
            Self::validate_fee_bps(protocol_fee_bps)?;
            self.protocol_fee_bps = protocol_fee_bps;
        }

        if let Some(subject_fee_bps) = subject_fee_bps {
            Self::validate_fee_bps(subject_fee_bps)?;
            self.subject_fee_bps = subject_fee_bps;
        }

        if let Some(referral_fee_bps) = referral_fee_bps {
            Self::validate_fee_bps(referral_fee_bps)?;
            self.referral_fee_bps = referral_fee_bps;
        }

        Ok(())
    }

    pub fn update_subscription_fees(
        &mut self,
        protocol_subscription_fee_bps: Option<u16>,
        referrer_fee_bps: Option<u16>,
    ) -> Result<()> {
        if let Some(protocol_subscription_fee_bps) = protocol_subscription_fee_bps {
            Self::validate_fee_bps(protocol_subscription_fee_bps)?;
            self.protocol_subscription_fee_bps = protocol_subscription_fee_bps;
        }

        if let Some(referrer_fee_bps) = referrer_fee_bps {
            Self::validate_fee_bps(referrer_fee_bps)?;
            self.referrer_fee_bps = referrer_fee_bps;
        }

        Ok(())
    }

    pub fn update_curve_weights(
        &mut self,
        weight_a: Option<u16>,
        weight_b: Option<u16>,
        weight_c: Option<u16>,
    ) -> Result<()> {
        if let Some(weight_a) = weight_a {
            check_condition!(
                (MIN_CURVE_WEIGHT..=MAX_CURVE_WEIGHT_AB).contains(&weight_a),
                InvalidCurveWeight
            );
            self.weight_a = weight_a;
        }

        if let Some(weight_b) = weight_b {
            check_condition!(
                (MIN_CURVE_WEIGHT..=MAX_CURVE_WEIGHT_AB).contains(&weight_b),
                InvalidCurveWeight
            );
            self.weight_b = weight_b;
        }

        if let Some(weight_c) = weight_c {
            check_condition!(
                (MIN_CURVE_WEIGHT..=MAX_CURVE_WEIGHT_C).contains(&weight_c),
                InvalidCurveWeight
            );
            self.weight_c = weight_c;
        }

        Ok(())
    }

    fn validate_fee_bps(fee_bps: u16) -> Result<()> {
        check_condition!(fee_bps <= MAX_FEE_BPS, InvalidFeeValue);

        Ok(())
    }

    pub fn trading_fees(&self) -> TradingFees {
        TradingFees {
            protocol_fee_bps: self.protocol_fee_bps,
            subject_fee_bps: self.subject_fee_bps,
            referral_fee_bps: self.referral_fee_bps,
        }
    }

    pub fn subscription_fees(&self) -> SubscriptionFees {
        SubscriptionFees {
            protocol_fee_bps: self.protocol_subscription_fee_bps,
            referrer_fee_bps: self.referrer_fee_bps,
        }
    }

    pub fn curve_weights(&self) -> CurveWeights {
        CurveWeights {
            weight_a: self.weight_a,
            weight_b: self.weight_b,
            weight_c: self.weight_c,
        }
    }
}
