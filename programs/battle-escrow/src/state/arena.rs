use anchor_lang::prelude::*;
use crate::errors::EscrowError;

/// Global arena state. Its PDA is also the authority the agent registry
/// trusts for `record_outcome`.
#[account]
#[derive(InitSpace)]
pub struct ArenaState {
    /// Admin pubkey who can withdraw protocol fees
    pub admin: Pubkey,
    /// Only key allowed to attach narratives to finished battles
    pub narrative_authority: Pubkey,
    /// Total number of battles opened (also the next battle id)
    pub total_battles: u64,
    /// Lifetime protocol fees received from resolved battles
    pub fees_accrued: u64,
    /// Lifetime protocol fees paid out to the admin
    pub fees_withdrawn: u64,
    /// Bump seed for PDA
    pub bump: u8,
}

impl ArenaState {
    pub const SEED_PREFIX: &'static [u8] = b"arena";

    pub fn next_battle_id(&mut self) -> Result<u64> {
        let id = self.total_battles;
        self.total_battles = self
            .total_battles
            .checked_add(1)
            .ok_or(EscrowError::BattleCounterOverflow)?;
        Ok(id)
    }

    pub fn accrue_fee(&mut self, fee: u64) -> Result<()> {
        self.fees_accrued = self
            .fees_accrued
            .checked_add(fee)
            .ok_or(EscrowError::MathOverflow)?;
        Ok(())
    }

    pub fn withdrawable(&self) -> u64 {
        self.fees_accrued.saturating_sub(self.fees_withdrawn)
    }

    pub fn withdraw(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, EscrowError::ZeroAmount);
        require!(amount <= self.withdrawable(), EscrowError::InsufficientFees);
        self.fees_withdrawn = self
            .fees_withdrawn
            .checked_add(amount)
            .ok_or(EscrowError::MathOverflow)?;
        Ok(())
    }
}
