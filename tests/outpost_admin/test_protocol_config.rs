#[cfg(test)]
mod tests {

    use anchor_lang::prelude::Pubkey;
    use outpost_admin::state::ProtocolConfig;
    use shared::constants::{
        DEFAULT_OUTPOST_PURCHASE_PRICE, DEFAULT_PROTOCOL_FEE_BPS, DEFAULT_SUBJECT_FEE_BPS,
        DEFAULT_WEIGHT_A, DEFAULT_WEIGHT_B, DEFAULT_WEIGHT_C,
    };
    use shared::errors::ErrorCode::{InvalidCurveWeight, InvalidFeeValue};

    fn setup_config() -> ProtocolConfig {
        let mut config = ProtocolConfig::default();
        config
            .init(255, Pubkey::new_unique(), Pubkey::new_unique())
            .unwrap();
        config
    }

    #[test]
    fn test_init_sets_defaults() {
        let config = setup_config();

        assert_eq!(config.protocol_fee_bps, DEFAULT_PROTOCOL_FEE_BPS);
        assert_eq!(config.subject_fee_bps, DEFAULT_SUBJECT_FEE_BPS);
        assert_eq!(config.weight_a, DEFAULT_WEIGHT_A);
        assert_eq!(config.weight_b, DEFAULT_WEIGHT_B);
        assert_eq!(config.weight_c, DEFAULT_WEIGHT_C);
        assert_eq!(config.outpost_purchase_price, DEFAULT_OUTPOST_PURCHASE_PRICE);
    }

    #[test]
    fn test_update_trading_fees_partial() {
        let mut config = setup_config();

        config
            .update_trading_fees(Some(250), None, Some(150))
            .unwrap();

        assert_eq!(config.protocol_fee_bps, 250);
        assert_eq!(config.subject_fee_bps, DEFAULT_SUBJECT_FEE_BPS);
        assert_eq!(config.referral_fee_bps, 150);
    }

    #[test]
    fn test_fee_bps_upper_bound() {
        let mut config = setup_config();

        assert!(config
            .update_trading_fees(Some(10_000), None, None)
            .is_ok());

        let result = config.update_trading_fees(Some(10_001), None, None);
        assert_eq!(result.unwrap_err(), InvalidFeeValue.into());

        let result = config.update_subscription_fees(None, Some(10_001));
        assert_eq!(result.unwrap_err(), InvalidFeeValue.into());
    }

    #[test]
    fn test_rejected_fee_leaves_config_untouched() {
        let mut config = setup_config();

        let _ = config.update_trading_fees(None, Some(20_000), None);

        assert_eq!(config.subject_fee_bps, DEFAULT_SUBJECT_FEE_BPS);
    }

    #[test]
    fn test_curve_weight_bounds() {
        let mut config = setup_config();

        assert!(config
            .update_curve_weights(Some(1), Some(10_000), Some(100))
            .is_ok());

        assert_eq!(
            config
                .update_curve_weights(Some(0), None, None)
                .unwrap_err(),
            InvalidCurveWeight.into()
        );
        assert_eq!(
            config
                .update_curve_weights(None, Some(10_001), None)
                .unwrap_err(),
            InvalidCurveWeight.into()
        );
        assert_eq!(
            config
                .update_curve_weights(None, None, Some(101))
                .unwrap_err(),
            InvalidCurveWeight.into()
        );
    }

    #[test]
    fn test_update_config_options() {
        let mut config = setup_config();
        let new_treasury = Pubkey::new_unique();

        config.update_config(Some(new_treasury), None, Some(42));

        assert_eq!(config.treasury, new_treasury);
        assert_eq!(config.outpost_purchase_price, 42);
    }

    #[test]
    fn test_fee_snapshots() {
        let config = setup_config();

        let trading = config.trading_fees();
        assert_eq!(trading.protocol_fee_bps, config.protocol_fee_bps);
        assert_eq!(trading.subject_fee_bps, config.subject_fee_bps);
        assert_eq!(trading.referral_fee_bps, config.referral_fee_bps);

        let subscription = config.subscription_fees();
        assert_eq!(
            subscription.protocol_fee_bps,
            config.protocol_subscription_fee_bps
        );
        assert_eq!(subscription.referrer_fee_bps, config.referrer_fee_bps);

        let weights = config.curve_weights();
        assert_eq!(weights.weight_a, config.weight_a);
        assert_eq!(weights.weight_b, config.weight_b);
        assert_eq!(weights.weight_c, config.weight_c);
    }
}
