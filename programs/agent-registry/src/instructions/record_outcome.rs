use anchor_lang::prelude::*;
use crate::events::OutcomeRecorded;
use crate::state::{AgentAccount, RegistryState};
use crate::errors::RegistryError;

#[derive(Accounts)]
#[instruction(winner_agent_id: u64, loser_agent_id: u64)]
pub struct RecordOutcome<'info> {
    /// The battle escrow's arena PDA, signing through CPI
    pub battle_authority: Signer<'info>,

    #[account(
        seeds = [RegistryState::SEED_PREFIX],
        bump = registry.bump,
        constraint = registry.is_battle_escrow(&battle_authority.key()) @ RegistryError::NotBattleEscrow
    )]
    pub registry: Account<'info, RegistryState>,

    #[account(
        mut,
        seeds = [AgentAccount::SEED_PREFIX, winner_agent_id.to_le_bytes().as_ref()],
        bump = winner_agent.bump
    )]
    pub winner_agent: Account<'info, AgentAccount>,

    #[account(
        mut,
        seeds = [AgentAccount::SEED_PREFIX, loser_agent_id.to_le_bytes().as_ref()],
        bump = loser_agent.bump
    )]
    pub loser_agent: Account<'info, AgentAccount>,
}

pub fn handler(
    ctx: Context<RecordOutcome>,
    winner_agent_id: u64,
    loser_agent_id: u64,
) -> Result<()> {
    require!(winner_agent_id != loser_agent_id, RegistryError::SameAgent);

    let clock = Clock::get()?;
    let winner = &mut ctx.accounts.winner_agent;
    winner.record_win(clock.unix_timestamp)?;
    let loser = &mut ctx.accounts.loser_agent;
    loser.record_loss(clock.unix_timestamp)?;

    msg!(
        "Outcome recorded: winner={} ({}W), loser={} ({}L)",
        winner_agent_id,
        ctx.accounts.winner_agent.wins,
        loser_agent_id,
        ctx.accounts.loser_agent.losses
    );

    emit!(OutcomeRecorded {
        winner_agent_id,
        loser_agent_id,
        winner_wins: ctx.accounts.winner_agent.wins,
        loser_losses: ctx.accounts.loser_agent.losses,
    });

    Ok(())
}
