use anchor_lang::prelude::*;
use anchor_lang::system_program;
use agent_registry::state::AgentAccount;
use crate::constants::BATTLE_STAKE;
use crate::errors::EscrowError;
use crate::events::BattleCreated;
use crate::state::{ArenaState, Battle, BattleStatus};

#[derive(Accounts)]
#[instruction(my_agent_id: u64, opponent_agent_id: u64)]
pub struct CreateChallenge<'info> {
    #[account(mut)]
    pub challenger: Signer<'info>,

    #[account(
        mut,
        seeds = [ArenaState::SEED_PREFIX],
        bump = arena.bump
    )]
    pub arena: Account<'info, ArenaState>,

    /// The challenger's own agent
    #[account(
        seeds = [AgentAccount::SEED_PREFIX, my_agent_id.to_le_bytes().as_ref()],
        bump = my_agent.bump,
        seeds::program = agent_registry::ID,
        constraint = my_agent.owner == challenger.key() @ EscrowError::NotAgentOwner
    )]
    pub my_agent: Account<'info, AgentAccount>,

    /// The agent being challenged (must exist in the registry)
    #[account(
        seeds = [AgentAccount::SEED_PREFIX, opponent_agent_id.to_le_bytes().as_ref()],
        bump = opponent_agent.bump,
        seeds::program = agent_registry::ID
    )]
    pub opponent_agent: Account<'info, AgentAccount>,

    #[account(
        init,
        payer = challenger,
        space = 8 + Battle::INIT_SPACE,
        seeds = [Battle::SEED_PREFIX, arena.total_battles.to_le_bytes().as_ref()],
        bump
    )]
    pub battle: Account<'info, Battle>,

    /// Escrow vault for this battle's stakes
    #[account(
        mut,
        seeds = [Battle::ESCROW_SEED_PREFIX, battle.key().as_ref()],
        bump
    )]
    pub battle_escrow: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateChallenge>,
    my_agent_id: u64,
    opponent_agent_id: u64,
) -> Result<u64> {
    require!(my_agent_id != opponent_agent_id, EscrowError::SameAgent);

    // --- escrow the challenger's stake ---
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.challenger.to_account_info(),
                to: ctx.accounts.battle_escrow.to_account_info(),
            },
        ),
        BATTLE_STAKE,
    )?;

    let arena = &mut ctx.accounts.arena;
    let battle = &mut ctx.accounts.battle;
    let clock = Clock::get()?;

    let battle_id = arena.next_battle_id()?;

    battle.battle_id = battle_id;
    battle.challenger_agent_id = my_agent_id;
    battle.challenged_agent_id = opponent_agent_id;
    battle.challenger = ctx.accounts.challenger.key();
    battle.challenged = ctx.accounts.opponent_agent.owner;
    battle.stake = BATTLE_STAKE;
    battle.status = BattleStatus::Pending;
    battle.winner_agent_id = None;
    battle.created_at = clock.unix_timestamp;
    battle.resolved_at = 0;
    battle.bump = ctx.bumps.battle;
    battle.escrow_bump = ctx.bumps.battle_escrow;

    msg!(
        "Battle created: id={}, agent {} vs agent {}, stake={} lamports",
        battle_id,
        my_agent_id,
        opponent_agent_id,
        BATTLE_STAKE
    );

    emit!(BattleCreated {
        battle_id,
        challenger_agent_id: my_agent_id,
        challenged_agent_id: opponent_agent_id,
        challenger: battle.challenger,
        challenged: battle.challenged,
    });

    Ok(battle_id)
}
