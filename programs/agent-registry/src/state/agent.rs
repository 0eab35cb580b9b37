use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::RegistryError;

/// Agent account - a soulbound combatant bound to the wallet that created it
#[account]
#[derive(InitSpace)]
pub struct AgentAccount {
    /// Unique agent ID (auto-incremented, starts at 0)
    pub agent_id: u64,

    /// Creator wallet. Never reassigned: there is no transfer instruction.
    pub owner: Pubkey,

    /// Agent name (1-32 bytes, immutable)
    #[max_len(32)]
    pub name: String,

    pub strength: u8,
    pub speed: u8,
    pub intelligence: u8,

    /// Free-text personality, owner-editable (max 200 bytes)
    #[max_len(200)]
    pub personality_prompt: String,

    /// Battles won, written only through record_outcome
    pub wins: u64,

    /// Battles lost, written only through record_outcome
    pub losses: u64,

    /// Unix timestamp when agent was created
    pub created_at: i64,

    /// Unix timestamp of the last personality update or recorded outcome
    pub updated_at: i64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl AgentAccount {
    pub const SEED_PREFIX: &'static [u8] = b"agent";

    pub fn validate_name(name: &str) -> Result<()> {
        require!(!name.is_empty(), RegistryError::NameEmpty);
        require!(name.len() <= MAX_NAME_LEN, RegistryError::NameTooLong);
        Ok(())
    }

    pub fn validate_prompt(prompt: &str) -> Result<()> {
        require!(prompt.len() <= MAX_PROMPT_LEN, RegistryError::PromptTooLong);
        Ok(())
    }

    pub fn stats(&self) -> AgentStats {
        AgentStats {
            strength: self.strength,
            speed: self.speed,
            intelligence: self.intelligence,
        }
    }

    pub fn class(&self) -> AgentClass {
        AgentClass::of(&self.stats())
    }

    pub fn record_win(&mut self, now: i64) -> Result<()> {
        self.wins = self.wins.checked_add(1).ok_or(RegistryError::MathOverflow)?;
        self.updated_at = now;
        Ok(())
    }

    pub fn record_loss(&mut self, now: i64) -> Result<()> {
        self.losses = self.losses.checked_add(1).ok_or(RegistryError::MathOverflow)?;
        self.updated_at = now;
        Ok(())
    }
}

/// The three build attributes. Only constructible through [`AgentStats::new`],
/// which enforces the per-attribute range and the fixed point budget.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct AgentStats {
    pub strength: u8,
    pub speed: u8,
    pub intelligence: u8,
}

impl AgentStats {
    pub fn new(strength: u8, speed: u8, intelligence: u8) -> Result<Self> {
        for stat in [strength, speed, intelligence] {
            require!(
                (STAT_MIN..=STAT_MAX).contains(&stat),
                RegistryError::StatOutOfRange
            );
        }
        let total = strength as u16 + speed as u16 + intelligence as u16;
        require!(
            total == STAT_BUDGET as u16,
            RegistryError::StatBudgetMismatch
        );

        Ok(Self {
            strength,
            speed,
            intelligence,
        })
    }

    pub fn as_array(&self) -> [u8; 3] {
        [self.strength, self.speed, self.intelligence]
    }
}

/// Presentation label derived from the build. Never stored.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum AgentClass {
    Berserker,
    Speedster,
    Oracle,
    Balanced,
    Warrior,
    Phantom,
    Sage,
}

impl AgentClass {
    /// Specialists first (strength, speed, intelligence), then an even build,
    /// then the highest attribute with ties going strength > speed > intelligence.
    pub fn of(stats: &AgentStats) -> Self {
        let AgentStats {
            strength,
            speed,
            intelligence,
        } = *stats;

        if strength >= SPECIALIST_THRESHOLD {
            AgentClass::Berserker
        } else if speed >= SPECIALIST_THRESHOLD {
            AgentClass::Speedster
        } else if intelligence >= SPECIALIST_THRESHOLD {
            AgentClass::Oracle
        } else if strength == speed && speed == intelligence {
            AgentClass::Balanced
        } else if strength >= speed && strength >= intelligence {
            AgentClass::Warrior
        } else if speed >= intelligence {
            AgentClass::Phantom
        } else {
            AgentClass::Sage
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgentClass::Berserker => "Berserker",
            AgentClass::Speedster => "Speedster",
            AgentClass::Oracle => "Oracle",
            AgentClass::Balanced => "Balanced",
            AgentClass::Warrior => "Warrior",
            AgentClass::Phantom => "Phantom",
            AgentClass::Sage => "Sage",
        }
    }

    /// Accent colour used by the rendered card
    pub fn color(&self) -> &'static str {
        match self {
            AgentClass::Berserker => "#ff4455",
            AgentClass::Speedster => "#ffd700",
            AgentClass::Oracle => "#44aaff",
            AgentClass::Balanced => "#c8b4ff",
            AgentClass::Warrior => "#ff6633",
            AgentClass::Phantom => "#ffcc44",
            AgentClass::Sage => "#836ef9",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(strength: u8, speed: u8, intelligence: u8) -> AgentStats {
        AgentStats {
            strength,
            speed,
            intelligence,
        }
    }

    fn agent(strength: u8, speed: u8, intelligence: u8) -> AgentAccount {
        AgentAccount {
            agent_id: 7,
            owner: Pubkey::new_unique(),
            name: "IronFist".to_string(),
            strength,
            speed,
            intelligence,
            personality_prompt: "Ruthless efficiency.".to_string(),
            wins: 0,
            losses: 0,
            created_at: 1_700_000_000,
            updated_at: 1_700_000_000,
            bump: 255,
        }
    }

    #[test]
    fn accepts_every_build_on_budget() {
        for (s, p, i) in [(8, 1, 1), (1, 8, 1), (1, 1, 8), (4, 3, 3), (2, 5, 3)] {
            let built = AgentStats::new(s, p, i).unwrap();
            assert_eq!(built.as_array(), [s, p, i]);
            assert_eq!(built.as_array().iter().map(|v| *v as u16).sum::<u16>(), 10);
        }
    }

    #[test]
    fn rejects_over_budget_build() {
        assert_eq!(
            AgentStats::new(5, 5, 1).unwrap_err(),
            error!(RegistryError::StatBudgetMismatch)
        );
    }

    #[test]
    fn rejects_under_budget_build() {
        assert_eq!(
            AgentStats::new(3, 3, 3).unwrap_err(),
            error!(RegistryError::StatBudgetMismatch)
        );
    }

    #[test]
    fn rejects_attribute_outside_range() {
        assert_eq!(
            AgentStats::new(0, 5, 5).unwrap_err(),
            error!(RegistryError::StatOutOfRange)
        );
        assert_eq!(
            AgentStats::new(9, 0, 1).unwrap_err(),
            error!(RegistryError::StatOutOfRange)
        );
    }

    #[test]
    fn range_is_checked_before_budget() {
        // 8 + 8 + 8 is out of budget too, but a 9 is reported first
        assert_eq!(
            AgentStats::new(9, 8, 8).unwrap_err(),
            error!(RegistryError::StatOutOfRange)
        );
    }

    #[test]
    fn name_limits() {
        assert!(AgentAccount::validate_name("VoltRush").is_ok());
        assert!(AgentAccount::validate_name(&"x".repeat(32)).is_ok());
        assert_eq!(
            AgentAccount::validate_name("").unwrap_err(),
            error!(RegistryError::NameEmpty)
        );
        assert_eq!(
            AgentAccount::validate_name(&"x".repeat(33)).unwrap_err(),
            error!(RegistryError::NameTooLong)
        );
    }

    #[test]
    fn prompt_limits() {
        assert!(AgentAccount::validate_prompt("").is_ok());
        assert!(AgentAccount::validate_prompt(&"p".repeat(200)).is_ok());
        assert_eq!(
            AgentAccount::validate_prompt(&"p".repeat(201)).unwrap_err(),
            error!(RegistryError::PromptTooLong)
        );
    }

    #[test]
    fn specialists_take_precedence_in_order() {
        assert_eq!(AgentClass::of(&stats(8, 1, 1)), AgentClass::Berserker);
        assert_eq!(AgentClass::of(&stats(1, 8, 1)), AgentClass::Speedster);
        assert_eq!(AgentClass::of(&stats(1, 1, 8)), AgentClass::Oracle);
        assert_eq!(AgentClass::of(&stats(2, 6, 2)), AgentClass::Speedster);
        // only reachable outside the budget, but precedence still holds
        assert_eq!(AgentClass::of(&stats(6, 6, 1)), AgentClass::Berserker);
        assert_eq!(AgentClass::of(&stats(1, 6, 6)), AgentClass::Speedster);
    }

    #[test]
    fn even_build_is_balanced() {
        assert_eq!(AgentClass::of(&stats(3, 3, 3)), AgentClass::Balanced);
    }

    #[test]
    fn highest_attribute_with_tie_order() {
        assert_eq!(AgentClass::of(&stats(4, 3, 3)), AgentClass::Warrior);
        assert_eq!(AgentClass::of(&stats(4, 4, 2)), AgentClass::Warrior);
        assert_eq!(AgentClass::of(&stats(4, 2, 4)), AgentClass::Warrior);
        assert_eq!(AgentClass::of(&stats(2, 5, 3)), AgentClass::Phantom);
        assert_eq!(AgentClass::of(&stats(2, 4, 4)), AgentClass::Phantom);
        assert_eq!(AgentClass::of(&stats(3, 3, 4)), AgentClass::Sage);
    }

    #[test]
    fn counters_only_move_up_by_one() {
        let mut a = agent(8, 1, 1);
        a.record_win(1_700_000_100).unwrap();
        a.record_loss(1_700_000_200).unwrap();
        a.record_win(1_700_000_300).unwrap();
        assert_eq!((a.wins, a.losses), (2, 1));
        assert_eq!(a.updated_at, 1_700_000_300);
        assert_eq!(a.created_at, 1_700_000_000);
        assert_eq!(a.stats(), stats(8, 1, 1));
    }

    #[test]
    fn counter_overflow_is_rejected() {
        let mut a = agent(8, 1, 1);
        a.wins = u64::MAX;
        assert_eq!(
            a.record_win(1).unwrap_err(),
            error!(RegistryError::MathOverflow)
        );
        assert_eq!(a.wins, u64::MAX);
    }
}
