pub mod init_redemption_vault;

pub use init_redemption_vault::*;
