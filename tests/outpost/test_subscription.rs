#[cfg(test)]
mod tests {

    use anchor_lang::prelude::Pubkey;
    use outpost::state::Subscription;
    use shared::constants::{SECONDS_PER_MONTH, SECONDS_PER_WEEK, SECONDS_PER_YEAR};
    use shared::structs::DurationClass;

    fn setup_subscription(tier_id: u64, start_time: i64, duration: DurationClass) -> Subscription {
        let mut subscription = Subscription::default();
        subscription.subscriber = Pubkey::new_unique();
        subscription.outpost = Pubkey::new_unique();
        subscription.tier_id = tier_id;
        subscription.start_time = start_time;
        subscription.end_time = start_time + duration.seconds() as i64;
        subscription
    }

    #[test]
    fn test_duration_seconds() {
        assert_eq!(DurationClass::Week.seconds(), SECONDS_PER_WEEK);
        assert_eq!(DurationClass::Month.seconds(), SECONDS_PER_MONTH);
        assert_eq!(DurationClass::Year.seconds(), SECONDS_PER_YEAR);

        assert_eq!(SECONDS_PER_WEEK, 604_800);
        assert_eq!(SECONDS_PER_MONTH, 2_592_000);
        assert_eq!(SECONDS_PER_YEAR, 31_536_000);
    }

    #[test]
    fn test_duration_class_from_u8() {
        assert_eq!(DurationClass::try_from(0), Some(DurationClass::Week));
        assert_eq!(DurationClass::try_from(1), Some(DurationClass::Month));
        assert_eq!(DurationClass::try_from(2), Some(DurationClass::Year));
        assert_eq!(DurationClass::try_from(3), None);
    }

    #[test]
    fn test_is_active_within_window() {
        let subscription = setup_subscription(0, 1_000, DurationClass::Week);

        assert!(subscription.is_active(0, 1_000));
        assert!(subscription.is_active(0, 1_000 + SECONDS_PER_WEEK as i64 - 1));
    }

    #[test]
    fn test_expires_at_end_time() {
        let subscription = setup_subscription(0, 1_000, DurationClass::Week);
        let end = 1_000 + SECONDS_PER_WEEK as i64;

        // The record still exists after expiry; it just stops being active.
        assert!(!subscription.is_active(0, end));
        assert!(!subscription.is_active(0, end + 1));
        assert!(subscription.exists());
    }

    #[test]
    fn test_tier_mismatch_is_not_active() {
        let subscription = setup_subscription(2, 1_000, DurationClass::Month);

        assert!(subscription.is_active(2, 2_000));
        assert!(!subscription.is_active(1, 2_000));
    }

    #[test]
    fn test_unwritten_record_does_not_exist() {
        let subscription = Subscription::default();

        assert!(!subscription.exists());
        assert!(!subscription.is_active(0, 0));
    }
}
