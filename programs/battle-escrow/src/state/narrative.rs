use anchor_lang::prelude::*;
use crate::constants::MAX_NARRATIVE_LEN;
use crate::errors::EscrowError;

/// Story text attached to a completed battle. Written once, never edited,
/// and never read by the battle logic.
#[account]
#[derive(InitSpace)]
pub struct Narrative {
    pub battle_id: u64,
    pub author: Pubkey,
    #[max_len(800)]
    pub text: String,
    pub recorded_at: i64,
    pub bump: u8,
}

impl Narrative {
    pub const SEED_PREFIX: &'static [u8] = b"narrative";

    pub fn validate_text(text: &str) -> Result<()> {
        require!(
            !text.is_empty() && text.len() <= MAX_NARRATIVE_LEN,
            EscrowError::InvalidNarrative
        );
        Ok(())
    }
}
