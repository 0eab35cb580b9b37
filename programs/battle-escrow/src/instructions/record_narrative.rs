use anchor_lang::prelude::*;
use crate::errors::EscrowError;
use crate::events::NarrativeRecorded;
use crate::state::{ArenaState, Battle, BattleStatus, Narrative};

#[derive(Accounts)]
#[instruction(battle_id: u64)]
pub struct RecordNarrative<'info> {
    #[account(mut)]
    pub author: Signer<'info>,

    #[account(
        seeds = [ArenaState::SEED_PREFIX],
        bump = arena.bump,
        constraint = arena.narrative_authority == author.key() @ EscrowError::NotNarrativeAuthority
    )]
    pub arena: Account<'info, ArenaState>,

    #[account(
        seeds = [Battle::SEED_PREFIX, battle_id.to_le_bytes().as_ref()],
        bump = battle.bump,
        constraint = battle.status == BattleStatus::Completed @ EscrowError::BattleNotCompleted
    )]
    pub battle: Account<'info, Battle>,

    /// Created once per battle; a second call fails on init
    #[account(
        init,
        payer = author,
        space = 8 + Narrative::INIT_SPACE,
        seeds = [Narrative::SEED_PREFIX, battle.key().as_ref()],
        bump
    )]
    pub narrative: Account<'info, Narrative>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RecordNarrative>, battle_id: u64, text: String) -> Result<()> {
    Narrative::validate_text(&text)?;

    let narrative = &mut ctx.accounts.narrative;
    let clock = Clock::get()?;

    narrative.battle_id = battle_id;
    narrative.author = ctx.accounts.author.key();
    narrative.text = text;
    narrative.recorded_at = clock.unix_timestamp;
    narrative.bump = ctx.bumps.narrative;

    msg!(
        "Narrative recorded: battle={}, {} bytes",
        battle_id,
        narrative.text.len()
    );

    emit!(NarrativeRecorded {
        battle_id,
        author: narrative.author,
    });

    Ok(())
}
