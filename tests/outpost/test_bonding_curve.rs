#[cfg(test)]
mod tests {

    use outpost::utils::structs::TradeSide;
    use outpost::utils::{total_price, unit_price};
    use shared::constants::{INITIAL_PRICE, UNIT_SCALE};
    use shared::errors::ErrorCode::{InvalidAmount, SupplyUnderflow};
    use shared::structs::CurveWeights;

    fn weights(weight_a: u16, weight_b: u16, weight_c: u16) -> CurveWeights {
        CurveWeights {
            weight_a,
            weight_b,
            weight_c,
        }
    }

    lazy_static::lazy_static! {
        /// Both basis-point weights at 100%, no supply offset: the curve value
        /// is exactly S(supply), which makes expected prices easy to read.
        static ref STEEP: CurveWeights = CurveWeights {
            weight_a: 10_000,
            weight_b: 10_000,
            weight_c: 1,
        };
    }

    mod unit_prices {

        use super::*;

        #[test]
        fn test_price_floor_at_zero_supply() {
            assert_eq!(unit_price(0, &STEEP).unwrap(), INITIAL_PRICE);
            assert_eq!(unit_price(0, &weights(173, 257, 23)).unwrap(), INITIAL_PRICE);
        }

        #[test]
        fn test_first_unit_is_floor_with_example_weights() {
            // supply = 0, amount = 1 at weights 173/257/23 settles exactly at
            // the floor.
            let price = total_price(0, 1, TradeSide::Buy, &weights(173, 257, 23)).unwrap();

            assert_eq!(price, INITIAL_PRICE);
        }

        #[test]
        fn test_n_of_one_returns_floor() {
            // supply 1 with weight_c = 1 gives n = 1.
            assert_eq!(unit_price(1, &STEEP).unwrap(), INITIAL_PRICE);
        }

        #[test]
        fn test_known_curve_values() {
            // With both weights at 100%, price = S(supply) * UNIT_SCALE.
            assert_eq!(unit_price(2, &STEEP).unwrap(), 5 * UNIT_SCALE);
            assert_eq!(unit_price(3, &STEEP).unwrap(), 14 * UNIT_SCALE);
            assert_eq!(unit_price(5, &STEEP).unwrap(), 55 * UNIT_SCALE);
        }

        #[test]
        fn test_weight_c_shifts_the_curve() {
            // supply 1 with weight_c = 23 prices at n = 23: S(23) = 4324,
            // staged through 173 then 257 bps lands back on the floor.
            assert_eq!(unit_price(1, &weights(173, 257, 23)).unwrap(), INITIAL_PRICE);

            // Same supply, full weights: 4324 * UNIT_SCALE.
            assert_eq!(
                unit_price(1, &weights(10_000, 10_000, 23)).unwrap(),
                4324 * UNIT_SCALE
            );
        }

        #[test]
        fn test_price_floor_holds_everywhere() {
            let small = weights(1, 1, 1);

            for supply in 0..200 {
                assert!(unit_price(supply, &small).unwrap() >= INITIAL_PRICE);
            }
        }

        #[test]
        fn test_monotonicity() {
            let curve = weights(400, 300, 2);
            let mut last = 0u64;

            for supply in 0..500 {
                let price = unit_price(supply, &curve).unwrap();
                assert!(price >= last, "price regressed at supply {}", supply);
                last = price;
            }
        }
    }

    mod trade_totals {

        use super::*;

        #[test]
        fn test_buy_accumulates_successive_levels() {
            // Levels 3, 4, 5, 6 under the steep curve: (14 + 30 + 55 + 91).
            let price = total_price(3, 4, TradeSide::Buy, &STEEP).unwrap();

            assert_eq!(price, 190 * UNIT_SCALE);
        }

        #[test]
        fn test_sell_walks_levels_down() {
            // Selling 4 from supply 7 prices levels 6, 5, 4, 3.
            let price = total_price(7, 4, TradeSide::Sell, &STEEP).unwrap();

            assert_eq!(price, 190 * UNIT_SCALE);
        }

        #[test]
        fn test_buy_sell_symmetry() {
            // Buying k units and selling the same k back settle at identical
            // per-unit prices, so the totals match exactly.
            for (supply, amount) in [(0u64, 1u64), (0, 5), (3, 4), (10, 10), (1, 2)] {
                let bought = total_price(supply, amount, TradeSide::Buy, &STEEP).unwrap();
                let sold =
                    total_price(supply + amount, amount, TradeSide::Sell, &STEEP).unwrap();

                assert_eq!(bought, sold, "asymmetry at supply {supply} amount {amount}");
            }
        }

        #[test]
        fn test_last_unit_sold_settles_at_floor() {
            // Selling out the full supply floors the final levels at 0.
            let price = total_price(2, 2, TradeSide::Sell, &STEEP).unwrap();

            assert_eq!(price, 2 * INITIAL_PRICE);
        }

        #[test]
        fn test_sell_more_than_supply_fails() {
            let result = total_price(3, 4, TradeSide::Sell, &STEEP);

            assert_eq!(result.unwrap_err(), SupplyUnderflow.into());
        }

        #[test]
        fn test_zero_amount_fails() {
            let result = total_price(10, 0, TradeSide::Buy, &STEEP);

            assert_eq!(result.unwrap_err(), InvalidAmount.into());
        }

        #[test]
        fn test_price_overflow_is_an_error() {
            // Far past the documented u64 price ceiling; must fail, not wrap.
            let result = unit_price(u64::MAX, &STEEP);

            assert!(result.is_err());
        }
    }
}
