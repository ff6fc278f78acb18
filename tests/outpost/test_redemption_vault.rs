#[cfg(test)]
mod tests {

    use crate::common::logger::init_logger;
    use log::info;
    use outpost::state::RedemptionVault;
    use outpost::utils::structs::TradeSide;
    use outpost::utils::total_price;
    use shared::errors::ErrorCode::InsufficientVaultBalance;
    use shared::structs::CurveWeights;

    #[test]
    fn test_deposit_and_withdraw() {
        let mut vault = RedemptionVault::default();

        vault.deposit(100).unwrap();
        vault.deposit(50).unwrap();
        assert_eq!(vault.balance, 150);

        vault.withdraw(120).unwrap();
        assert_eq!(vault.balance, 30);
    }

    #[test]
    fn test_withdraw_beyond_balance_fails_whole() {
        let mut vault = RedemptionVault::default();

        vault.deposit(100).unwrap();

        let result = vault.withdraw(101);

        assert_eq!(result.unwrap_err(), InsufficientVaultBalance.into());

        // No partial fill.
        assert_eq!(vault.balance, 100);
    }

    #[test]
    fn test_withdraw_from_empty_vault_fails() {
        let mut vault = RedemptionVault::default();

        assert_eq!(
            vault.withdraw(1).unwrap_err(),
            InsufficientVaultBalance.into()
        );
    }

    /// Every buy deposits exactly its base price and every sell withdraws
    /// exactly its base price, so draining the supply drains the vault to
    /// zero with nothing left behind.
    #[test]
    fn test_conservation_over_buy_sell_sequence() {
        init_logger();

        let weights = CurveWeights {
            weight_a: 10_000,
            weight_b: 10_000,
            weight_c: 1,
        };

        let mut vault = RedemptionVault::default();
        let mut supply = 0u64;

        for amount in [3u64, 2, 7, 1] {
            let base = total_price(supply, amount, TradeSide::Buy, &weights).unwrap();
            vault.deposit(base).unwrap();
            supply += amount;
        }

        info!("vault balance after buys: {}", vault.balance);

        for amount in [5u64, 4, 4] {
            let base = total_price(supply, amount, TradeSide::Sell, &weights).unwrap();
            vault.withdraw(base).unwrap();
            supply -= amount;
        }

        assert_eq!(supply, 0);
        assert_eq!(vault.balance, 0);
    }

    /// Interleaved buys and sells keep the pool equal to the base prices of
    /// the units still outstanding.
    #[test]
    fn test_conservation_interleaved() {
        let weights = CurveWeights {
            weight_a: 10_000,
            weight_b: 10_000,
            weight_c: 2,
        };

        let mut vault = RedemptionVault::default();
        let mut supply = 0u64;

        let trades: [(TradeSide, u64); 6] = [
            (TradeSide::Buy, 4),
            (TradeSide::Sell, 1),
            (TradeSide::Buy, 2),
            (TradeSide::Sell, 3),
            (TradeSide::Buy, 1),
            (TradeSide::Sell, 3),
        ];

        for (side, amount) in trades {
            let base = total_price(supply, amount, side, &weights).unwrap();
            match side {
                TradeSide::Buy => {
                    vault.deposit(base).unwrap();
                    supply += amount;
                }
                TradeSide::Sell => {
                    vault.withdraw(base).unwrap();
                    supply -= amount;
                }
            }
        }

        assert_eq!(supply, 0);
        assert_eq!(vault.balance, 0);
    }
}
