use anchor_lang::prelude::*;

#[event]
pub struct BattleCreated {
    pub battle_id: u64,
    pub challenger_agent_id: u64,
    pub challenged_agent_id: u64,
    pub challenger: Pubkey,
    pub challenged: Pubkey,
}

#[event]
pub struct BattleResolved {
    pub battle_id: u64,
    pub winner_agent_id: u64,
    pub winner: Pubkey,
    pub payout: u64,
}

#[event]
pub struct BattleCancelled {
    pub battle_id: u64,
    pub challenger: Pubkey,
    pub refund: u64,
}

#[event]
pub struct FeesWithdrawn {
    pub recipient: Pubkey,
    pub amount: u64,
}

#[event]
pub struct NarrativeRecorded {
    pub battle_id: u64,
    pub author: Pubkey,
}
