use anchor_lang::prelude::*;

/// Bonding curve weights, all interpreted as basis points of 10_000 except
/// `weight_c`, which is a flat supply offset.
#[derive(AnchorSerialize, AnchorDeserialize, Default, Clone, Copy, Debug)]
pub struct CurveWeights {
    pub weight_a: u16,
    pub weight_b: u16,
    pub weight_c: u16,
}
