use crate::state::Subscription;

impl Subscription {
    /// A record is live from the moment it is written; `end_time` of zero
    /// means the account was never filled in.
    pub fn exists(&self) -> bool {
        self.end_time != 0
    }

    /// True iff a record exists, it is for the given tier and the clock has
    /// not passed its expiry. An expired record is not deleted, it just stops
    /// being active.
    pub fn is_active(&self, tier_id: u64, now: i64) -> bool {
        self.exists() && self.tier_id == tier_id && now < self.end_time
    }
}
