use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod outcome;
pub mod settlement;
pub mod state;
#[cfg(test)]
mod testing;

use instructions::*;
use state::Battle;

declare_id!("7r7jWcD29qex88jntBpJUtGurqnhkHNFPv84KXFByJBn");

#[program]
pub mod battle_escrow {
    use super::*;

    /// Create the arena; its PDA becomes the registry's battle escrow authority
    pub fn initialize(ctx: Context<Initialize>, narrative_authority: Pubkey) -> Result<()> {
        instructions::initialize::handler(ctx, narrative_authority)
    }

    /// Open a battle against another agent, escrowing the challenger's stake
    pub fn challenge(
        ctx: Context<CreateChallenge>,
        my_agent_id: u64,
        opponent_agent_id: u64,
    ) -> Result<u64> {
        instructions::create_challenge::handler(ctx, my_agent_id, opponent_agent_id)
    }

    /// Match the stake, resolve, pay out and record the result
    pub fn accept_challenge(ctx: Context<AcceptChallenge>, battle_id: u64) -> Result<()> {
        instructions::accept_challenge::handler(ctx, battle_id)
    }

    /// Withdraw a pending challenge and refund the stake (challenger only)
    pub fn cancel_challenge(ctx: Context<CancelChallenge>, battle_id: u64) -> Result<()> {
        instructions::cancel_challenge::handler(ctx, battle_id)
    }

    /// Move accrued protocol fees out of the arena (admin only)
    pub fn withdraw_fees(ctx: Context<WithdrawFees>, amount: u64) -> Result<()> {
        instructions::withdraw_fees::handler(ctx, amount)
    }

    /// Attach story text to a completed battle (narrative authority only, once)
    pub fn record_narrative(
        ctx: Context<RecordNarrative>,
        battle_id: u64,
        text: String,
    ) -> Result<()> {
        instructions::record_narrative::handler(ctx, battle_id, text)
    }

    pub fn get_battle(ctx: Context<GetBattle>, battle_id: u64) -> Result<Battle> {
        instructions::queries::get_battle(ctx, battle_id)
    }

    pub fn total_battles(ctx: Context<ArenaView>) -> Result<u64> {
        instructions::queries::total_battles(ctx)
    }

    pub fn list_all_battle_ids(ctx: Context<ArenaView>, offset: u64) -> Result<Vec<u64>> {
        instructions::queries::list_all_battle_ids(ctx, offset)
    }

    pub fn battle_stake(_ctx: Context<ArenaView>) -> Result<u64> {
        Ok(instructions::queries::battle_stake())
    }
}
