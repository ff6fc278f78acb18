use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};

/// The maximum length of a fixed size string in bytes.
pub const MAX_PADDED_STRING_LENGTH: usize = 128;

/// A zero-padded string of up to 128 bytes, used for outpost descriptions and
/// URIs so the account keeps a fixed layout.
#[derive(InitSpace, Debug, Clone, Copy, AnchorSerialize, AnchorDeserialize, Pod, Zeroable)]
#[repr(C)]
pub struct FixedSizeString {
    pub value: [u8; MAX_PADDED_STRING_LENGTH],
}

impl Default for FixedSizeString {
    fn default() -> Self {
        Self {
            value: [0u8; MAX_PADDED_STRING_LENGTH],
        }
    }
}

impl FixedSizeString {
    /// Truncates input longer than the maximum length.
    pub fn new(input: &str) -> Self {
        let mut value = [0u8; MAX_PADDED_STRING_LENGTH];

        let bytes = input.as_bytes();
        let length = bytes.len().min(MAX_PADDED_STRING_LENGTH);

        value[..length].copy_from_slice(&bytes[..length]);

        Self { value }
    }
}
