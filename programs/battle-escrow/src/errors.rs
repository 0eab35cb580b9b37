use anchor_lang::prelude::*;
use agent_registry::errors::ErrorClass;

#[error_code]
pub enum EscrowError {
    // --- validation ---
    #[msg("An agent cannot battle itself")]
    SameAgent,
    #[msg("Narrative must be 1-800 bytes")]
    InvalidNarrative,
    #[msg("Amount must be greater than 0")]
    ZeroAmount,
    #[msg("Agent accounts do not match the battle")]
    AgentMismatch,
    #[msg("Payout wallet does not match the battle")]
    ChallengerMismatch,

    // --- authorization ---
    #[msg("Signer does not own this agent")]
    NotAgentOwner,
    #[msg("Only the original challenger can cancel")]
    NotChallenger,
    #[msg("Only the arena admin can do this")]
    Unauthorized,
    #[msg("Only the narrative authority can record narratives")]
    NotNarrativeAuthority,

    // --- state ---
    #[msg("Battle is not pending")]
    BattleNotPending,
    #[msg("Battle has not completed")]
    BattleNotCompleted,
    #[msg("Winner must be one of the two participants")]
    WinnerNotParticipant,
    #[msg("Withdrawal exceeds accrued protocol fees")]
    InsufficientFees,
    #[msg("Recent slot hashes are unavailable")]
    EntropyUnavailable,
    #[msg("Battle counter overflow")]
    BattleCounterOverflow,

    // --- payout ---
    #[msg("Escrow holds less than both stakes")]
    EscrowShortfall,
    #[msg("Math overflow")]
    MathOverflow,
}

impl EscrowError {
    /// Failures of the System Program transfers inside `accept_challenge`
    /// arrive as the System Program's own errors rather than as an
    /// `EscrowError`; they are also `ErrorClass::Payout`.
    pub fn class(&self) -> ErrorClass {
        match self {
            EscrowError::SameAgent
            | EscrowError::InvalidNarrative
            | EscrowError::ZeroAmount
            | EscrowError::AgentMismatch
            | EscrowError::ChallengerMismatch => ErrorClass::Validation,
            EscrowError::NotAgentOwner
            | EscrowError::NotChallenger
            | EscrowError::Unauthorized
            | EscrowError::NotNarrativeAuthority => ErrorClass::Authorization,
            EscrowError::BattleNotPending
            | EscrowError::BattleNotCompleted
            | EscrowError::WinnerNotParticipant
            | EscrowError::InsufficientFees
            | EscrowError::EntropyUnavailable
            | EscrowError::BattleCounterOverflow => ErrorClass::State,
            EscrowError::EscrowShortfall | EscrowError::MathOverflow => ErrorClass::Payout,
        }
    }
}
