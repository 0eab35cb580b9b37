use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::slot_hashes;
use anchor_lang::system_program;
use agent_registry::cpi::accounts::RecordOutcome;
use agent_registry::program::AgentRegistry;
use agent_registry::state::{AgentAccount, RegistryState};
use crate::errors::EscrowError;
use crate::events::BattleResolved;
use crate::outcome::{self, HashWeighted};
use crate::settlement::Settlement;
use crate::state::{ArenaState, Battle, BattleStatus};

// =============================================================
//  Second deposit, outcome, payout, registry callback and the
//  Completed transition all land in this one instruction. If any
//  step fails the runtime discards every effect, including both
//  transfers, and the battle stays Pending.
// =============================================================

#[derive(Accounts)]
#[instruction(battle_id: u64)]
pub struct AcceptChallenge<'info> {
    #[account(mut)]
    pub accepter: Signer<'info>,

    #[account(
        mut,
        seeds = [ArenaState::SEED_PREFIX],
        bump = arena.bump
    )]
    pub arena: Account<'info, ArenaState>,

    #[account(
        mut,
        seeds = [Battle::SEED_PREFIX, battle_id.to_le_bytes().as_ref()],
        bump = battle.bump,
        constraint = battle.status == BattleStatus::Pending @ EscrowError::BattleNotPending
    )]
    pub battle: Account<'info, Battle>,

    #[account(
        mut,
        seeds = [Battle::ESCROW_SEED_PREFIX, battle.key().as_ref()],
        bump = battle.escrow_bump
    )]
    pub battle_escrow: SystemAccount<'info>,

    /// CHECK: challenger wallet, paid when the challenger's agent wins
    #[account(
        mut,
        address = battle.challenger @ EscrowError::ChallengerMismatch
    )]
    pub challenger: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = challenger_agent.agent_id == battle.challenger_agent_id @ EscrowError::AgentMismatch
    )]
    pub challenger_agent: Account<'info, AgentAccount>,

    #[account(
        mut,
        constraint = challenged_agent.agent_id == battle.challenged_agent_id @ EscrowError::AgentMismatch,
        constraint = challenged_agent.owner == accepter.key() @ EscrowError::NotAgentOwner
    )]
    pub challenged_agent: Account<'info, AgentAccount>,

    #[account(
        seeds = [RegistryState::SEED_PREFIX],
        bump = registry.bump,
        seeds::program = agent_registry::ID
    )]
    pub registry: Account<'info, RegistryState>,

    /// CHECK: SlotHashes sysvar, read raw for resolution entropy
    #[account(address = slot_hashes::ID)]
    pub recent_slothashes: UncheckedAccount<'info>,

    pub agent_registry_program: Program<'info, AgentRegistry>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<AcceptChallenge>, battle_id: u64) -> Result<()> {
    let accounts = ctx.accounts;
    let clock = Clock::get()?;
    let stake = accounts.battle.stake;

    // --- second deposit ---
    system_program::transfer(
        CpiContext::new(
            accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: accounts.accepter.to_account_info(),
                to: accounts.battle_escrow.to_account_info(),
            },
        ),
        stake,
    )?;

    // --- outcome ---
    let entropy = outcome::resolution_entropy(
        &accounts.recent_slothashes.to_account_info(),
        &clock,
        &accounts.accepter.key(),
        &accounts.battle.key(),
    )?;
    let side = outcome::resolve(
        &HashWeighted,
        &accounts.challenger_agent.stats(),
        &accounts.challenged_agent.stats(),
        &entropy,
        battle_id,
    );

    let (winner_agent, loser_agent) = side.pick(
        accounts.challenger_agent.to_account_info(),
        accounts.challenged_agent.to_account_info(),
    );
    let (winner_wallet, _) = side.pick(
        accounts.challenger.to_account_info(),
        accounts.accepter.to_account_info(),
    );
    let (winner_agent_id, loser_agent_id) = accounts.battle.standings(side);
    require_keys_eq!(
        *winner_wallet.key,
        accounts.battle.wallet(side),
        EscrowError::ChallengerMismatch
    );

    // --- payout: fee to the arena first, then the winner empties the vault ---
    let settlement = Settlement::split(stake, accounts.battle_escrow.lamports())?;
    let battle_key = accounts.battle.key();
    let escrow_seeds: &[&[u8]] = &[
        Battle::ESCROW_SEED_PREFIX,
        battle_key.as_ref(),
        &[accounts.battle.escrow_bump],
    ];

    system_program::transfer(
        CpiContext::new_with_signer(
            accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: accounts.battle_escrow.to_account_info(),
                to: accounts.arena.to_account_info(),
            },
            &[escrow_seeds],
        ),
        settlement.fee,
    )?;
    system_program::transfer(
        CpiContext::new_with_signer(
            accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: accounts.battle_escrow.to_account_info(),
                to: winner_wallet.clone(),
            },
            &[escrow_seeds],
        ),
        settlement.payout,
    )?;
    accounts.arena.accrue_fee(settlement.fee)?;
    let winner = *winner_wallet.key;

    // --- registry callback, signed by the arena PDA ---
    let arena_seeds: &[&[u8]] = &[ArenaState::SEED_PREFIX, &[accounts.arena.bump]];
    agent_registry::cpi::record_outcome(
        CpiContext::new_with_signer(
            accounts.agent_registry_program.to_account_info(),
            RecordOutcome {
                battle_authority: accounts.arena.to_account_info(),
                registry: accounts.registry.to_account_info(),
                winner_agent,
                loser_agent,
            },
            &[arena_seeds],
        ),
        winner_agent_id,
        loser_agent_id,
    )?;

    // --- finalize ---
    accounts.battle.complete(winner_agent_id, clock.unix_timestamp)?;

    msg!(
        "Battle resolved: id={}, winner agent {} ({}), payout={} lamports, fee={} lamports",
        battle_id,
        winner_agent_id,
        winner,
        settlement.payout,
        settlement.fee
    );

    emit!(BattleResolved {
        battle_id,
        winner_agent_id,
        winner,
        payout: settlement.payout,
    });

    Ok(())
}
