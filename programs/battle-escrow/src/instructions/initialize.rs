use anchor_lang::prelude::*;
use crate::state::ArenaState;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + ArenaState::INIT_SPACE,
        seeds = [ArenaState::SEED_PREFIX],
        bump
    )]
    pub arena: Account<'info, ArenaState>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, narrative_authority: Pubkey) -> Result<()> {
    let arena = &mut ctx.accounts.arena;

    arena.admin = ctx.accounts.admin.key();
    arena.narrative_authority = narrative_authority;
    arena.total_battles = 0;
    arena.fees_accrued = 0;
    arena.fees_withdrawn = 0;
    arena.bump = ctx.bumps.arena;

    // The registry admin links this address with link_battle_escrow
    msg!(
        "Arena initialized: admin={}, escrow authority={}",
        arena.admin,
        arena.key()
    );

    Ok(())
}
