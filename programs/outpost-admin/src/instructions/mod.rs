pub mod init_protocol_config;
pub mod set_curve_weights;
pub mod set_protocol_config;
pub mod set_subscription_fees;
pub mod set_trading_fees;

pub use init_protocol_config::*;
pub use set_curve_weights::*;
pub use set_protocol_config::*;
pub use set_subscription_fees::*;
pub use set_trading_fees::*;
