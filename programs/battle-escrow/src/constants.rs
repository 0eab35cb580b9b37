use anchor_lang::prelude::*;

// ===== STAKES =====
/// Lamports each side deposits (0.01 SOL). Kept well above the rent-exempt
/// minimum of an empty account so a funded escrow vault is always valid.
#[constant]
pub const BATTLE_STAKE: u64 = 10_000_000;
/// Protocol cut of the pot, in basis points (5%)
#[constant]
pub const PROTOCOL_FEE_BPS: u64 = 500;
pub const BPS_DENOMINATOR: u64 = 10_000;

// ===== OUTCOME =====
/// Each random weight falls in 1..=WEIGHT_RANGE
pub const WEIGHT_RANGE: u64 = 16;

// ===== NARRATIVES =====
pub const MAX_NARRATIVE_LEN: usize = 800;
