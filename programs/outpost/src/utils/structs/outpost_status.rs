use anchor_lang::prelude::*;

#[derive(
    AnchorSerialize, AnchorDeserialize, Default, Clone, Copy, PartialEq, Eq, Debug, InitSpace,
)]
pub enum OutpostStatus {
    #[default]
    /// Outpost is live and every operation is available
    Active = 0,
    /// Owner has paused the venue; only ownership transfer and unpausing remain
    Paused = 1,
}

impl From<u8> for OutpostStatus {
    fn from(value: u8) -> Self {
        match value {
            0 => OutpostStatus::Active,
            1 => OutpostStatus::Paused,
            _ => panic!("Invalid enum value"),
        }
    }
}

impl OutpostStatus {
    pub fn try_from(value: u8) -> Option<Self> {
        match value {
            0 => Some(OutpostStatus::Active),
            1 => Some(OutpostStatus::Paused),
            _ => None,
        }
    }
}
