//! Error codes for the programs.
//!
//! Custom errors for Anchor programs start at 6000. i.e. here NotAdmin would be 6000 and
//! NotOwner would be 6001.

use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Not Admin")]
    NotAdmin,

    #[msg("Not Outpost Owner")]
    NotOwner,

    #[msg("Invalid Amount")]
    InvalidAmount,

    #[msg("Invalid Fee Value")]
    InvalidFeeValue,

    #[msg("Invalid Curve Weight")]
    InvalidCurveWeight,

    #[msg("Invalid Duration")]
    InvalidDuration,

    #[msg("Tier Not Found")]
    TierNotFound,

    #[msg("Tier Name Exists")]
    TierNameExists,

    #[msg("Invalid Tier Name")]
    InvalidTierName,

    #[msg("Max Tiers Reached")]
    MaxTiersReached,

    #[msg("Subscription Not Found")]
    SubscriptionNotFound,

    #[msg("Already Subscribed")]
    AlreadySubscribed,

    #[msg("Emergency Pause")]
    EmergencyPause,

    #[msg("Insufficient Vault Balance")]
    InsufficientVaultBalance,

    #[msg("Insufficient Caller Balance")]
    InsufficientCallerBalance,

    #[msg("Supply Underflow")]
    SupplyUnderflow,

    #[msg("Math Overflow")]
    MathOverflow,

    #[msg("Invalid Outpost Name")]
    InvalidOutpostName,

    #[msg("Invalid Pass Target")]
    InvalidTarget,

    #[msg("Invalid Payment Mint")]
    InvalidPaymentMint,

    #[msg("Invalid Treasury")]
    InvalidTreasury,

    #[msg("Invalid Subject Fee Recipient")]
    InvalidSubjectFeeRecipient,

    #[msg("Invalid Recipient Token Account")]
    InvalidRecipientTokenAccount,

    #[msg("Missing Referrer Token Account")]
    MissingReferrerTokenAccount,
}

/// Check a condition and return an error if it is not met.
///
/// # Arguments
/// * `condition` - The condition to check.
/// * `error` - The error to return if the condition is not met.
#[macro_export]
macro_rules! check_condition {
    ($condition:expr, $error:expr) => {
        if !$condition {
            return Err(error!(ErrorCode::$error));
        }
    };
}
