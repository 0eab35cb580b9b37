use anchor_lang::prelude::*;
use crate::events::BattleEscrowLinked;
use crate::state::RegistryState;
use crate::errors::RegistryError;

/// Grant the battle escrow the right to record outcomes (admin only, one-time).
/// `escrow_authority` is the escrow program's arena PDA, which signs its CPIs.
#[derive(Accounts)]
pub struct LinkBattleEscrow<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [RegistryState::SEED_PREFIX],
        bump = registry.bump,
        constraint = registry.admin == admin.key() @ RegistryError::Unauthorized,
        constraint = !registry.is_linked() @ RegistryError::EscrowAlreadyLinked
    )]
    pub registry: Account<'info, RegistryState>,
}

pub fn handler(ctx: Context<LinkBattleEscrow>, escrow_authority: Pubkey) -> Result<()> {
    let registry = &mut ctx.accounts.registry;

    registry.link_battle_escrow(escrow_authority)?;

    msg!("Battle escrow linked: {}", registry.battle_escrow);

    emit!(BattleEscrowLinked {
        battle_escrow: registry.battle_escrow,
    });

    Ok(())
}
