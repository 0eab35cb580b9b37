//! In-memory accounts for running `Accounts` validation natively.

use std::collections::BTreeSet;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::slot_hashes;
use anchor_lang::{AccountDeserialize, AccountSerialize, Owner};
use agent_registry::state::{AgentAccount, RegistryState};

use crate::constants::BATTLE_STAKE;
use crate::instructions::{
    AcceptChallenge, AcceptChallengeBumps, CancelChallenge, CancelChallengeBumps,
};
use crate::state::{ArenaState, Battle, BattleStatus};

pub struct TestAccount {
    pub key: Pubkey,
    pub owner: Pubkey,
    pub lamports: u64,
    pub data: Vec<u8>,
    pub is_signer: bool,
    pub is_writable: bool,
    pub executable: bool,
}

impl TestAccount {
    pub fn wallet(key: Pubkey) -> Self {
        Self {
            key,
            owner: anchor_lang::system_program::ID,
            lamports: 1_000_000_000,
            data: vec![],
            is_signer: false,
            is_writable: true,
            executable: false,
        }
    }

    pub fn state<T: AccountSerialize + Owner>(key: Pubkey, value: &T) -> Self {
        let mut data = Vec::new();
        value.try_serialize(&mut data).unwrap();
        Self {
            owner: T::owner(),
            lamports: 5_000_000,
            data,
            ..Self::wallet(key)
        }
    }

    pub fn program(id: Pubkey) -> Self {
        Self {
            owner: Pubkey::default(),
            lamports: 1,
            is_writable: false,
            executable: true,
            ..Self::wallet(id)
        }
    }

    pub fn signer(mut self) -> Self {
        self.is_signer = true;
        self
    }

    pub fn load<T: AccountDeserialize>(&self) -> T {
        T::try_deserialize(&mut self.data.as_slice()).unwrap()
    }

    pub fn store<T: AccountSerialize>(&mut self, value: &T) {
        self.data.clear();
        value.try_serialize(&mut self.data).unwrap();
    }

    pub fn info(&mut self) -> AccountInfo<'_> {
        AccountInfo::new(
            &self.key,
            self.is_signer,
            self.is_writable,
            &mut self.lamports,
            &mut self.data,
            &self.owner,
            self.executable,
            0,
        )
    }
}

/// Agent 0 (challenger's) against agent 1 (accepter's) in a pending battle,
/// with the challenger's stake already in the vault.
pub struct BattleFixture {
    pub battle_id: u64,
    pub accepter: TestAccount,
    pub arena: TestAccount,
    pub battle: TestAccount,
    pub battle_escrow: TestAccount,
    pub challenger: TestAccount,
    pub challenger_agent: TestAccount,
    pub challenged_agent: TestAccount,
    pub registry: TestAccount,
    pub recent_slothashes: TestAccount,
    pub agent_registry_program: TestAccount,
    pub system_program: TestAccount,
}

fn agent(agent_id: u64, owner: Pubkey, build: (u8, u8, u8)) -> TestAccount {
    let (key, bump) = Pubkey::find_program_address(
        &[AgentAccount::SEED_PREFIX, agent_id.to_le_bytes().as_ref()],
        &agent_registry::ID,
    );
    let account = AgentAccount {
        agent_id,
        owner,
        name: format!("agent-{agent_id}"),
        strength: build.0,
        speed: build.1,
        intelligence: build.2,
        personality_prompt: String::new(),
        wins: 0,
        losses: 0,
        created_at: 1_700_000_000,
        updated_at: 1_700_000_000,
        bump,
    };
    TestAccount::state(key, &account)
}

impl BattleFixture {
    pub fn pending() -> Self {
        let battle_id = 3u64;
        let challenger = Pubkey::new_unique();
        let accepter = Pubkey::new_unique();

        let (arena_key, arena_bump) =
            Pubkey::find_program_address(&[ArenaState::SEED_PREFIX], &crate::ID);
        let (battle_key, battle_bump) = Pubkey::find_program_address(
            &[Battle::SEED_PREFIX, battle_id.to_le_bytes().as_ref()],
            &crate::ID,
        );
        let (escrow_key, escrow_bump) = Pubkey::find_program_address(
            &[Battle::ESCROW_SEED_PREFIX, battle_key.as_ref()],
            &crate::ID,
        );
        let (registry_key, registry_bump) =
            Pubkey::find_program_address(&[RegistryState::SEED_PREFIX], &agent_registry::ID);

        let arena = ArenaState {
            admin: Pubkey::new_unique(),
            narrative_authority: Pubkey::new_unique(),
            total_battles: battle_id + 1,
            fees_accrued: 0,
            fees_withdrawn: 0,
            bump: arena_bump,
        };
        let battle = Battle {
            battle_id,
            challenger_agent_id: 0,
            challenged_agent_id: 1,
            challenger,
            challenged: accepter,
            stake: BATTLE_STAKE,
            status: BattleStatus::Pending,
            winner_agent_id: None,
            created_at: 1_700_000_000,
            resolved_at: 0,
            bump: battle_bump,
            escrow_bump,
        };
        let registry = RegistryState {
            admin: Pubkey::new_unique(),
            total_agents: 2,
            battle_escrow: arena_key,
            bump: registry_bump,
        };

        let mut battle_escrow = TestAccount::wallet(escrow_key);
        battle_escrow.lamports = BATTLE_STAKE;
        let mut recent_slothashes = TestAccount::wallet(slot_hashes::ID);
        recent_slothashes.is_writable = false;

        Self {
            battle_id,
            accepter: TestAccount::wallet(accepter).signer(),
            arena: TestAccount::state(arena_key, &arena),
            battle: TestAccount::state(battle_key, &battle),
            battle_escrow,
            challenger: TestAccount::wallet(challenger).signer(),
            challenger_agent: agent(0, challenger, (8, 1, 1)),
            challenged_agent: agent(1, accepter, (1, 1, 8)),
            registry: TestAccount::state(registry_key, &registry),
            recent_slothashes,
            agent_registry_program: TestAccount::program(agent_registry::ID),
            system_program: TestAccount::program(anchor_lang::system_program::ID),
        }
    }

    /// Applies a state change to the stored battle, as a landed instruction would.
    pub fn edit_battle(&mut self, change: impl FnOnce(&mut Battle)) {
        let mut battle: Battle = self.battle.load();
        change(&mut battle);
        self.battle.store(&battle);
    }

    pub fn stored_battle(&self) -> Battle {
        self.battle.load()
    }

    /// Total lamports across every account in the fixture
    pub fn lamports(&self) -> u64 {
        [
            &self.accepter,
            &self.arena,
            &self.battle,
            &self.battle_escrow,
            &self.challenger,
        ]
        .iter()
        .map(|account| account.lamports)
        .sum()
    }

    pub fn validate_accept(&mut self) -> Result<()> {
        let infos = vec![
            self.accepter.info(),
            self.arena.info(),
            self.battle.info(),
            self.battle_escrow.info(),
            self.challenger.info(),
            self.challenger_agent.info(),
            self.challenged_agent.info(),
            self.registry.info(),
            self.recent_slothashes.info(),
            self.agent_registry_program.info(),
            self.system_program.info(),
        ];
        let mut remaining: &[AccountInfo] = &infos;
        AcceptChallenge::try_accounts(
            &crate::ID,
            &mut remaining,
            &self.battle_id.to_le_bytes(),
            &mut AcceptChallengeBumps::default(),
            &mut BTreeSet::new(),
        )
        .map(|_| ())
    }

    pub fn validate_cancel(&mut self) -> Result<()> {
        let infos = vec![
            self.challenger.info(),
            self.battle.info(),
            self.battle_escrow.info(),
            self.system_program.info(),
        ];
        let mut remaining: &[AccountInfo] = &infos;
        CancelChallenge::try_accounts(
            &crate::ID,
            &mut remaining,
            &self.battle_id.to_le_bytes(),
            &mut CancelChallengeBumps::default(),
            &mut BTreeSet::new(),
        )
        .map(|_| ())
    }
}
