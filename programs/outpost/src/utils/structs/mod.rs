//! Structs for the Outpost program. Often used within an account.
pub mod fixed_size_string;
pub mod outpost_status;
pub mod subscription_tier;
pub mod trade_side;

pub use fixed_size_string::*;
pub use outpost_status::*;
pub use subscription_tier::*;
pub use trade_side::*;
