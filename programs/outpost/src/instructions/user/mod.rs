pub mod buy_passes;
pub mod cancel_subscription;
pub mod sell_passes;
pub mod subscribe;

pub use buy_passes::*;
pub use cancel_subscription::*;
pub use sell_passes::*;
pub use subscribe::*;
