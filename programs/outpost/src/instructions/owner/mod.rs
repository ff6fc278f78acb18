pub mod create_outpost;
pub mod create_subscription_tier;
pub mod toggle_emergency_pause;
pub mod transfer_outpost_ownership;
pub mod update_outpost_price;
pub mod update_subscription_tier;

pub use create_outpost::*;
pub use create_subscription_tier::*;
pub use toggle_emergency_pause::*;
pub use transfer_outpost_ownership::*;
pub use update_outpost_price::*;
pub use update_subscription_tier::*;
