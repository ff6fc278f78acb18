pub mod outpost;
pub mod pass_stats;
pub mod redemption_vault;
pub mod subscription;
