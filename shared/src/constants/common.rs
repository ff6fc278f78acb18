use anchor_lang::prelude::*;

/*
Included in build

ADMIN
*/
include!(concat!(env!("OUT_DIR"), "/config.rs"));

pub const SCALAR_TOKEN: u64 = 1_000_000_000; // 10^9 (9 decimals for tokens in Solana)

/// Rescales the dimensionless curve value into settlement-currency smallest units.
pub const UNIT_SCALE: u64 = SCALAR_TOKEN;

/// Price floor of the bonding curve: one whole settlement token.
pub const INITIAL_PRICE: u64 = UNIT_SCALE;

/// 100% = 10_000 basis points.
pub const BPS_DENOMINATOR: u64 = 10_000;

pub const MAX_FEE_BPS: u16 = 10_000;
pub const MIN_CURVE_WEIGHT: u16 = 1;
pub const MAX_CURVE_WEIGHT_AB: u16 = 10_000;
pub const MAX_CURVE_WEIGHT_C: u16 = 100;

pub const DEFAULT_PROTOCOL_FEE_BPS: u16 = 400;
pub const DEFAULT_SUBJECT_FEE_BPS: u16 = 800;
pub const DEFAULT_REFERRAL_FEE_BPS: u16 = 200;
pub const DEFAULT_PROTOCOL_SUBSCRIPTION_FEE_BPS: u16 = 400;
pub const DEFAULT_REFERRER_FEE_BPS: u16 = 800;

pub const DEFAULT_WEIGHT_A: u16 = 400;
pub const DEFAULT_WEIGHT_B: u16 = 300;
pub const DEFAULT_WEIGHT_C: u16 = 2;

pub const DEFAULT_OUTPOST_PURCHASE_PRICE: u64 = 10 * UNIT_SCALE;

pub const SECONDS_PER_WEEK: u64 = 604_800;
pub const SECONDS_PER_MONTH: u64 = 2_592_000;
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Tiers live inline in the outpost account, so the table is bounded.
pub const MAX_TIERS: usize = 16;

/// Outpost and tier names are PDA-seed sized.
pub const MAX_NAME_LENGTH: usize = 32;
