use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::errors::EscrowError;
use crate::events::BattleCancelled;
use crate::state::{Battle, BattleStatus};

#[derive(Accounts)]
#[instruction(battle_id: u64)]
pub struct CancelChallenge<'info> {
    #[account(mut)]
    pub challenger: Signer<'info>,

    #[account(
        mut,
        seeds = [Battle::SEED_PREFIX, battle_id.to_le_bytes().as_ref()],
        bump = battle.bump,
        constraint = battle.challenger == challenger.key() @ EscrowError::NotChallenger,
        constraint = battle.status == BattleStatus::Pending @ EscrowError::BattleNotPending
    )]
    pub battle: Account<'info, Battle>,

    #[account(
        mut,
        seeds = [Battle::ESCROW_SEED_PREFIX, battle.key().as_ref()],
        bump = battle.escrow_bump
    )]
    pub battle_escrow: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CancelChallenge>, battle_id: u64) -> Result<()> {
    let clock = Clock::get()?;
    let refund = ctx.accounts.battle_escrow.lamports();

    // --- return the whole vault to the challenger ---
    let battle_key = ctx.accounts.battle.key();
    let escrow_seeds: &[&[u8]] = &[
        Battle::ESCROW_SEED_PREFIX,
        battle_key.as_ref(),
        &[ctx.accounts.battle.escrow_bump],
    ];
    system_program::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.battle_escrow.to_account_info(),
                to: ctx.accounts.challenger.to_account_info(),
            },
            &[escrow_seeds],
        ),
        refund,
    )?;

    let battle = &mut ctx.accounts.battle;
    battle.cancel(clock.unix_timestamp)?;

    msg!(
        "Battle cancelled: id={}, refunded {} lamports to {}",
        battle_id,
        refund,
        battle.challenger
    );

    emit!(BattleCancelled {
        battle_id,
        challenger: battle.challenger,
        refund,
    });

    Ok(())
}
