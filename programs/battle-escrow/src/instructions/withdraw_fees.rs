use anchor_lang::prelude::*;
use crate::errors::EscrowError;
use crate::events::FeesWithdrawn;
use crate::state::ArenaState;

#[derive(Accounts)]
pub struct WithdrawFees<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [ArenaState::SEED_PREFIX],
        bump = arena.bump,
        constraint = arena.admin == admin.key() @ EscrowError::Unauthorized
    )]
    pub arena: Account<'info, ArenaState>,

    /// CHECK: any wallet the admin chooses; only receives lamports
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<WithdrawFees>, amount: u64) -> Result<()> {
    ctx.accounts.arena.withdraw(amount)?;

    // The arena is program-owned, so lamports move by direct debit
    let arena_info = ctx.accounts.arena.to_account_info();
    let recipient_info = ctx.accounts.recipient.to_account_info();
    **arena_info.try_borrow_mut_lamports()? = arena_info
        .lamports()
        .checked_sub(amount)
        .ok_or(EscrowError::InsufficientFees)?;
    **recipient_info.try_borrow_mut_lamports()? = recipient_info
        .lamports()
        .checked_add(amount)
        .ok_or(EscrowError::MathOverflow)?;

    msg!(
        "Fees withdrawn: {} lamports to {}, {} remaining",
        amount,
        recipient_info.key(),
        ctx.accounts.arena.withdrawable()
    );

    emit!(FeesWithdrawn {
        recipient: recipient_info.key(),
        amount,
    });

    Ok(())
}
