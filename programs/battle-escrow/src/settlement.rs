use anchor_lang::prelude::*;
use crate::constants::{BPS_DENOMINATOR, PROTOCOL_FEE_BPS};
use crate::errors::EscrowError;

/// How a resolved battle's escrow is emptied.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Settlement {
    /// Sent to the winning agent's owner
    pub payout: u64,
    /// Kept by the arena as protocol revenue
    pub fee: u64,
}

impl Settlement {
    /// `escrowed` is the vault balance once both stakes are in. The payout is
    /// 95% of the two stakes; everything else in the vault becomes fee, so
    /// the vault always ends at zero.
    pub fn split(stake: u64, escrowed: u64) -> Result<Self> {
        let pot = stake.checked_mul(2).ok_or(EscrowError::MathOverflow)?;
        require!(escrowed >= pot, EscrowError::EscrowShortfall);

        let payout = (pot as u128)
            .checked_mul((BPS_DENOMINATOR - PROTOCOL_FEE_BPS) as u128)
            .ok_or(EscrowError::MathOverflow)?
            .checked_div(BPS_DENOMINATOR as u128)
            .ok_or(EscrowError::MathOverflow)? as u64;
        let fee = escrowed
            .checked_sub(payout)
            .ok_or(EscrowError::MathOverflow)?;

        Ok(Self { payout, fee })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BATTLE_STAKE;

    #[test]
    fn winner_takes_ninety_five_percent() {
        let s = Settlement::split(BATTLE_STAKE, 2 * BATTLE_STAKE).unwrap();
        assert_eq!(s.payout, 19_000_000);
        assert_eq!(s.fee, 1_000_000);
        // 1.9 x stake
        assert_eq!(s.payout * 10, BATTLE_STAKE * 19);
    }

    #[test]
    fn split_conserves_value() {
        for stake in [1u64, 3, 999, BATTLE_STAKE, 123_456_789] {
            let s = Settlement::split(stake, 2 * stake).unwrap();
            assert_eq!(s.payout + s.fee, 2 * stake);
        }
    }

    #[test]
    fn stray_lamports_go_to_fee() {
        let s = Settlement::split(BATTLE_STAKE, 2 * BATTLE_STAKE + 5).unwrap();
        assert_eq!(s.payout, 19_000_000);
        assert_eq!(s.fee, 1_000_005);
    }

    #[test]
    fn short_escrow_is_rejected() {
        assert_eq!(
            Settlement::split(BATTLE_STAKE, BATTLE_STAKE).unwrap_err(),
            error!(EscrowError::EscrowShortfall)
        );
    }

    #[test]
    fn oversized_stake_overflows_cleanly() {
        assert_eq!(
            Settlement::split(u64::MAX, u64::MAX).unwrap_err(),
            error!(EscrowError::MathOverflow)
        );
    }
}
