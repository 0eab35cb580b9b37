//! Read-only views, answered through return data.

use anchor_lang::prelude::*;
use agent_registry::instructions::queries::id_page;
use crate::constants::BATTLE_STAKE;
use crate::state::{ArenaState, Battle};

#[derive(Accounts)]
#[instruction(battle_id: u64)]
pub struct GetBattle<'info> {
    #[account(
        seeds = [Battle::SEED_PREFIX, battle_id.to_le_bytes().as_ref()],
        bump = battle.bump
    )]
    pub battle: Account<'info, Battle>,
}

#[derive(Accounts)]
pub struct ArenaView<'info> {
    #[account(
        seeds = [ArenaState::SEED_PREFIX],
        bump = arena.bump
    )]
    pub arena: Account<'info, ArenaState>,
}

pub fn get_battle(ctx: Context<GetBattle>, _battle_id: u64) -> Result<Battle> {
    Ok((*ctx.accounts.battle).clone())
}

pub fn total_battles(ctx: Context<ArenaView>) -> Result<u64> {
    Ok(ctx.accounts.arena.total_battles)
}

/// Battle ids in creation order, one page of at most `PAGE_SIZE` from `offset`
pub fn list_all_battle_ids(ctx: Context<ArenaView>, offset: u64) -> Result<Vec<u64>> {
    Ok(id_page(ctx.accounts.arena.total_battles, offset))
}

pub fn battle_stake() -> u64 {
    BATTLE_STAKE
}
