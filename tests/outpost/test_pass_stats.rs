#[cfg(test)]
mod tests {

    use outpost::state::PassStats;
    use shared::constants::INITIAL_PRICE;
    use shared::errors::ErrorCode::SupplyUnderflow;

    fn setup_stats() -> PassStats {
        let mut stats = PassStats::default();
        stats.last_price = INITIAL_PRICE;
        stats
    }

    #[test]
    fn test_record_buy() {
        let mut stats = setup_stats();

        stats.record_buy(3, 7_000_000_000).unwrap();

        assert_eq!(stats.total_supply, 3);
        assert_eq!(stats.last_price, 7_000_000_000);
    }

    #[test]
    fn test_record_sell() {
        let mut stats = setup_stats();

        stats.record_buy(5, 10_000_000_000).unwrap();
        stats.record_sell(2, 4_000_000_000).unwrap();

        assert_eq!(stats.total_supply, 3);
        assert_eq!(stats.last_price, 4_000_000_000);
    }

    #[test]
    fn test_sell_entire_supply() {
        let mut stats = setup_stats();

        stats.record_buy(5, 10_000_000_000).unwrap();
        stats.record_sell(5, 5_000_000_000).unwrap();

        assert_eq!(stats.total_supply, 0);
    }

    #[test]
    fn test_sell_beyond_supply_fails() {
        let mut stats = setup_stats();

        stats.record_buy(2, 3_000_000_000).unwrap();

        let result = stats.record_sell(3, 1_000_000_000);

        assert_eq!(result.unwrap_err(), SupplyUnderflow.into());

        // Nothing moved.
        assert_eq!(stats.total_supply, 2);
        assert_eq!(stats.last_price, 3_000_000_000);
    }

    #[test]
    fn test_sell_from_empty_ledger_fails() {
        let mut stats = setup_stats();

        let result = stats.record_sell(1, INITIAL_PRICE);

        assert_eq!(result.unwrap_err(), SupplyUnderflow.into());
    }
}
