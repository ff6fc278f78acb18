pub mod accounts;
pub mod bonding_curve;
pub mod fee_util;
pub mod structs;
pub mod token_util;

pub use bonding_curve::*;
pub use fee_util::*;
pub use structs::*;
pub use token_util::*;
