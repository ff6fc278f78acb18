#[cfg(test)]
mod tests {

    use outpost::utils::{split_buy, split_sell, split_subscription};
    use shared::errors::ErrorCode::InvalidAmount;
    use shared::structs::{SubscriptionFees, TradingFees};

    fn trading_fees() -> TradingFees {
        TradingFees {
            protocol_fee_bps: 400,
            subject_fee_bps: 800,
            referral_fee_bps: 200,
        }
    }

    fn subscription_fees() -> SubscriptionFees {
        SubscriptionFees {
            protocol_fee_bps: 400,
            referrer_fee_bps: 800,
        }
    }

    mod buys {

        use super::*;

        #[test]
        fn test_fees_are_surcharges() {
            let split = split_buy(100, &trading_fees(), false).unwrap();

            assert_eq!(split.base, 100);
            assert_eq!(split.protocol_fee, 4);
            assert_eq!(split.subject_fee, 8);
            assert_eq!(split.referral_fee, 0);
            assert_eq!(split.total, 112);
        }

        #[test]
        fn test_referral_fee_only_with_referrer() {
            let split = split_buy(100, &trading_fees(), true).unwrap();

            assert_eq!(split.referral_fee, 2);
            assert_eq!(split.total, 114);
        }

        #[test]
        fn test_total_is_exact_sum() {
            // No double-charging beyond integer truncation, across the whole
            // configurable fee range.
            for bps in [0u16, 1, 250, 5_000, 9_999, 10_000] {
                let fees = TradingFees {
                    protocol_fee_bps: bps,
                    subject_fee_bps: bps,
                    referral_fee_bps: bps,
                };

                let split = split_buy(1_000_000_007, &fees, true).unwrap();

                assert_eq!(
                    split.total,
                    split.base + split.protocol_fee + split.subject_fee + split.referral_fee
                );
            }
        }

        #[test]
        fn test_zero_price_splits_to_zero_fees() {
            let split = split_buy(0, &trading_fees(), true).unwrap();

            assert_eq!(split.total, 0);
        }
    }

    mod sells {

        use super::*;

        #[test]
        fn test_fees_are_deductions() {
            let split = split_sell(100, &trading_fees()).unwrap();

            assert_eq!(split.protocol_fee, 4);
            assert_eq!(split.subject_fee, 8);
            assert_eq!(split.net_to_seller, 88);
        }

        #[test]
        fn test_non_positive_net_fails() {
            let confiscatory = TradingFees {
                protocol_fee_bps: 5_000,
                subject_fee_bps: 5_000,
                referral_fee_bps: 0,
            };

            let result = split_sell(100, &confiscatory);

            assert_eq!(result.unwrap_err(), InvalidAmount.into());
        }

        #[test]
        fn test_small_price_fees_truncate_to_zero() {
            let split = split_sell(10, &trading_fees()).unwrap();

            assert_eq!(split.protocol_fee, 0);
            assert_eq!(split.subject_fee, 0);
            assert_eq!(split.net_to_seller, 10);
        }
    }

    mod subscriptions {

        use super::*;

        #[test]
        fn test_worked_example() {
            // 100 units at 400/800 bps: 4 to the protocol, 8 to the referrer
            // slot, 88 to the owner.
            let split = split_subscription(100, &subscription_fees()).unwrap();

            assert_eq!(split.protocol_fee, 4);
            assert_eq!(split.referral_fee, 8);
            assert_eq!(split.owner_amount, 88);
        }

        #[test]
        fn test_owner_cut_is_referrer_independent() {
            // The referrer slot is always carved out of the price, so the
            // owner remainder never depends on whether a referrer showed up.
            let split = split_subscription(1_000_000, &subscription_fees()).unwrap();

            assert_eq!(
                split.owner_amount,
                1_000_000 - split.protocol_fee - split.referral_fee
            );
        }

        #[test]
        fn test_non_positive_remainder_fails() {
            let confiscatory = SubscriptionFees {
                protocol_fee_bps: 10_000,
                referrer_fee_bps: 0,
            };

            let result = split_subscription(100, &confiscatory);

            assert_eq!(result.unwrap_err(), InvalidAmount.into());
        }
    }
}
