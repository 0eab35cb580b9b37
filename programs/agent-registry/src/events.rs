use anchor_lang::prelude::*;

#[event]
pub struct AgentCreated {
    pub agent_id: u64,
    pub owner: Pubkey,
    pub name: String,
    pub strength: u8,
    pub speed: u8,
    pub intelligence: u8,
}

#[event]
pub struct PersonalityUpdated {
    pub agent_id: u64,
    pub prompt: String,
}

#[event]
pub struct OutcomeRecorded {
    pub winner_agent_id: u64,
    pub loser_agent_id: u64,
    pub winner_wins: u64,
    pub loser_losses: u64,
}

#[event]
pub struct BattleEscrowLinked {
    pub battle_escrow: Pubkey,
}
