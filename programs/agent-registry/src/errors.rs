use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    // --- validation ---
    #[msg("Name must not be empty")]
    NameEmpty,

    #[msg("Name is too long (max 32 bytes)")]
    NameTooLong,

    #[msg("Personality prompt is too long (max 200 bytes)")]
    PromptTooLong,

    #[msg("Each attribute must be between 1 and 8")]
    StatOutOfRange,

    #[msg("Strength, speed and intelligence must sum to exactly 10")]
    StatBudgetMismatch,

    #[msg("Winner and loser must be different agents")]
    SameAgent,

    #[msg("Battle escrow authority must not be the default key")]
    InvalidEscrowAuthority,

    // --- authorization ---
    #[msg("Unauthorized: only the registry admin can do this")]
    Unauthorized,

    #[msg("Unauthorized: only the agent owner can update it")]
    NotAgentOwner,

    #[msg("Unauthorized: caller is not the linked battle escrow")]
    NotBattleEscrow,

    // --- state ---
    #[msg("Battle escrow has already been linked")]
    EscrowAlreadyLinked,

    #[msg("Owner page does not match the owner's agent count")]
    OwnerPageMismatch,

    #[msg("Registry is full")]
    RegistryFull,

    #[msg("Counter overflow")]
    MathOverflow,
}

/// The four kinds of rejection a caller has to tell apart.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorClass {
    /// Malformed input; resubmit with corrected values
    Validation,
    /// Caller lacks the identity the operation requires
    Authorization,
    /// Operation is not valid for the entity's current state
    State,
    /// Winner payout could not be delivered; the resolution was rolled back
    Payout,
}

impl RegistryError {
    pub fn class(&self) -> ErrorClass {
        match self {
            RegistryError::NameEmpty
            | RegistryError::NameTooLong
            | RegistryError::PromptTooLong
            | RegistryError::StatOutOfRange
            | RegistryError::StatBudgetMismatch
            | RegistryError::SameAgent
            | RegistryError::InvalidEscrowAuthority => ErrorClass::Validation,
            RegistryError::Unauthorized
            | RegistryError::NotAgentOwner
            | RegistryError::NotBattleEscrow => ErrorClass::Authorization,
            RegistryError::EscrowAlreadyLinked
            | RegistryError::OwnerPageMismatch
            | RegistryError::RegistryFull
            | RegistryError::MathOverflow => ErrorClass::State,
        }
    }
}
