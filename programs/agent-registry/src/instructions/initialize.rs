use anchor_lang::prelude::*;
use crate::state::RegistryState;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + RegistryState::INIT_SPACE,
        seeds = [RegistryState::SEED_PREFIX],
        bump
    )]
    pub registry: Account<'info, RegistryState>,

    pub system_program: Program<'info, System>,
}

/// Agents can be minted right away; battles wait for `link_battle_escrow`.
pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    ctx.accounts
        .registry
        .set_inner(RegistryState::new(admin, ctx.bumps.registry));

    msg!("Agent registry initialized: admin={}, battle escrow unlinked", admin);

    Ok(())
}
