use anchor_lang::prelude::*;
use crate::errors::EscrowError;
use crate::outcome::Side;

/// Battle status. Completed and Cancelled are terminal.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub enum BattleStatus {
    /// Challenger's stake is escrowed, waiting for the challenged owner
    Pending,
    /// Accepted, resolved and paid out
    Completed,
    /// Withdrawn by the challenger and refunded
    Cancelled,
}

impl Default for BattleStatus {
    fn default() -> Self {
        BattleStatus::Pending
    }
}

/// Battle account - one staked contest between two agents
#[account]
#[derive(InitSpace)]
pub struct Battle {
    /// Unique battle ID (auto-incremented, starts at 0)
    pub battle_id: u64,

    pub challenger_agent_id: u64,
    pub challenged_agent_id: u64,

    /// Wallet that funded the challenger side
    pub challenger: Pubkey,

    /// Owner of the challenged agent, the only wallet that may accept
    pub challenged: Pubkey,

    /// Lamports the challenger deposited; the accepter must match it
    pub stake: u64,

    pub status: BattleStatus,

    /// Set exactly once, when the battle completes
    pub winner_agent_id: Option<u64>,

    /// Unix timestamp when the challenge was opened
    pub created_at: i64,

    /// Unix timestamp of the terminal transition (0 while pending)
    pub resolved_at: i64,

    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Bump seed of the escrow vault PDA
    pub escrow_bump: u8,
}

impl Battle {
    pub const SEED_PREFIX: &'static [u8] = b"battle";
    pub const ESCROW_SEED_PREFIX: &'static [u8] = b"battle_escrow";

    pub fn is_pending(&self) -> bool {
        self.status == BattleStatus::Pending
    }

    pub fn agent_id(&self, side: Side) -> u64 {
        match side {
            Side::Challenger => self.challenger_agent_id,
            Side::Challenged => self.challenged_agent_id,
        }
    }

    /// (winner, loser) agent ids once `side` has won
    pub fn standings(&self, side: Side) -> (u64, u64) {
        side.pick(self.challenger_agent_id, self.challenged_agent_id)
    }

    /// Wallet that funded `side`, and so receives its payout
    pub fn wallet(&self, side: Side) -> Pubkey {
        side.pick(self.challenger, self.challenged).0
    }

    pub fn side_of(&self, agent_id: u64) -> Option<Side> {
        if agent_id == self.challenger_agent_id {
            Some(Side::Challenger)
        } else if agent_id == self.challenged_agent_id {
            Some(Side::Challenged)
        } else {
            None
        }
    }

    /// Pending -> Completed
    pub fn complete(&mut self, winner_agent_id: u64, now: i64) -> Result<()> {
        require!(self.is_pending(), EscrowError::BattleNotPending);
        require!(
            self.side_of(winner_agent_id).is_some(),
            EscrowError::WinnerNotParticipant
        );

        self.status = BattleStatus::Completed;
        self.winner_agent_id = Some(winner_agent_id);
        self.resolved_at = now;
        Ok(())
    }

    /// Pending -> Cancelled
    pub fn cancel(&mut self, now: i64) -> Result<()> {
        require!(self.is_pending(), EscrowError::BattleNotPending);

        self.status = BattleStatus::Cancelled;
        self.resolved_at = now;
        Ok(())
    }
}
