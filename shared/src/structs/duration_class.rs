use anchor_lang::prelude::*;

use crate::constants::{SECONDS_PER_MONTH, SECONDS_PER_WEEK, SECONDS_PER_YEAR};

/// Fixed subscription lengths. Stored as a u8 inside the outpost tier table.
#[derive(
    AnchorSerialize, AnchorDeserialize, Default, Clone, Copy, PartialEq, Eq, Debug, InitSpace,
)]
pub enum DurationClass {
    #[default]
    Week = 0,
    Month = 1,
    Year = 2,
}

impl From<u8> for DurationClass {
    fn from(value: u8) -> Self {
        match value {
            0 => DurationClass::Week,
            1 => DurationClass::Month,
            2 => DurationClass::Year,
            _ => panic!("Invalid enum value"),
        }
    }
}

impl DurationClass {
    pub fn try_from(value: u8) -> Option<Self> {
        match value {
            0 => Some(DurationClass::Week),
            1 => Some(DurationClass::Month),
            2 => Some(DurationClass::Year),
            _ => None,
        }
    }

    pub fn seconds(&self) -> u64 {
        match self {
            DurationClass::Week => SECONDS_PER_WEEK,
            DurationClass::Month => SECONDS_PER_MONTH,
            DurationClass::Year => SECONDS_PER_YEAR,
        }
    }
}
