use anchor_lang::prelude::*;
use crate::errors::RegistryError;

/// Global registry state - tracks total agents, admin and the linked battle escrow
#[account]
#[derive(InitSpace)]
pub struct RegistryState {
    /// Admin pubkey who can link the battle escrow
    pub admin: Pubkey,
    /// Total number of registered agents (also the next agent id)
    pub total_agents: u64,
    /// Signer authority of the battle escrow program; default until linked
    pub battle_escrow: Pubkey,
    /// Bump seed for PDA
    pub bump: u8,
}

impl RegistryState {
    pub const SEED_PREFIX: &'static [u8] = b"registry";

    /// Empty registry with no escrow linked yet
    pub fn new(admin: Pubkey, bump: u8) -> Self {
        Self {
            admin,
            total_agents: 0,
            battle_escrow: Pubkey::default(),
            bump,
        }
    }

    pub fn is_linked(&self) -> bool {
        self.battle_escrow != Pubkey::default()
    }

    /// One-time grant; the escrow can never be swapped afterwards.
    pub fn link_battle_escrow(&mut self, escrow_authority: Pubkey) -> Result<()> {
        require!(!self.is_linked(), RegistryError::EscrowAlreadyLinked);
        require!(
            escrow_authority != Pubkey::default(),
            RegistryError::InvalidEscrowAuthority
        );
        self.battle_escrow = escrow_authority;
        Ok(())
    }

    pub fn is_battle_escrow(&self, caller: &Pubkey) -> bool {
        self.is_linked() && self.battle_escrow == *caller
    }

    /// Hands out the current id and advances the counter
    pub fn next_agent_id(&mut self) -> Result<u64> {
        let id = self.total_agents;
        self.total_agents = self
            .total_agents
            .checked_add(1)
            .ok_or(RegistryError::RegistryFull)?;
        Ok(id)
    }
}
