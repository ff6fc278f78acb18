pub const PROTOCOL_CONFIG_SEEDS: &[u8] = b"protocol_config";
pub const OUTPOST_SEEDS: &[u8] = b"outpost";
pub const PASS_STATS_SEEDS: &[u8] = b"pass_stats";
pub const PASS_MINT_SEEDS: &[u8] = b"pass_mint";
pub const REDEMPTION_VAULT_SEEDS: &[u8] = b"redemption_vault";
pub const SUBSCRIPTION_SEEDS: &[u8] = b"subscription";
