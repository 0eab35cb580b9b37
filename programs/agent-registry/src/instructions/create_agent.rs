use anchor_lang::prelude::*;
use crate::events::AgentCreated;
use crate::state::{AgentAccount, AgentStats, OwnerIndex, OwnerPage, RegistryState};

#[derive(Accounts)]
pub struct CreateAgent<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [RegistryState::SEED_PREFIX],
        bump = registry.bump
    )]
    pub registry: Account<'info, RegistryState>,

    #[account(
        init,
        payer = owner,
        space = 8 + AgentAccount::INIT_SPACE,
        seeds = [
            AgentAccount::SEED_PREFIX,
            registry.total_agents.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub agent: Account<'info, AgentAccount>,

    /// The owner's mint counter (created on first mint)
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + OwnerIndex::INIT_SPACE,
        seeds = [OwnerIndex::SEED_PREFIX, owner.key().as_ref()],
        bump
    )]
    pub owner_index: Account<'info, OwnerIndex>,

    /// Page the new id is appended to; a fresh one every `PAGE_SIZE` mints
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + OwnerPage::INIT_SPACE,
        seeds = [
            OwnerPage::SEED_PREFIX,
            owner.key().as_ref(),
            owner_index.next_page().to_le_bytes().as_ref()
        ],
        bump
    )]
    pub owner_page: Account<'info, OwnerPage>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateAgent>,
    name: String,
    strength: u8,
    speed: u8,
    intelligence: u8,
    personality_prompt: String,
) -> Result<u64> {
    // Validate inputs
    AgentAccount::validate_name(&name)?;
    AgentAccount::validate_prompt(&personality_prompt)?;
    let stats = AgentStats::new(strength, speed, intelligence)?;

    let registry = &mut ctx.accounts.registry;
    let agent = &mut ctx.accounts.agent;
    let owner_index = &mut ctx.accounts.owner_index;
    let owner_page = &mut ctx.accounts.owner_page;
    let owner = ctx.accounts.owner.key();
    let clock = Clock::get()?;

    let agent_id = registry.next_agent_id()?;

    agent.agent_id = agent_id;
    agent.owner = owner;
    agent.name = name;
    agent.strength = stats.strength;
    agent.speed = stats.speed;
    agent.intelligence = stats.intelligence;
    agent.personality_prompt = personality_prompt;
    agent.wins = 0;
    agent.losses = 0;
    agent.created_at = clock.unix_timestamp;
    agent.updated_at = clock.unix_timestamp;
    agent.bump = ctx.bumps.agent;

    if owner_index.owner == Pubkey::default() {
        owner_index.owner = owner;
        owner_index.bump = ctx.bumps.owner_index;
    }
    if owner_page.owner == Pubkey::default() {
        owner_page.owner = owner;
        owner_page.page = owner_index.next_page();
        owner_page.bump = ctx.bumps.owner_page;
    }
    owner_index.record(owner_page, agent_id)?;

    msg!(
        "Agent registered: id={}, owner={}, name={}, class={}",
        agent_id,
        owner,
        agent.name,
        agent.class().label()
    );

    emit!(AgentCreated {
        agent_id,
        owner,
        name: agent.name.clone(),
        strength: stats.strength,
        speed: stats.speed,
        intelligence: stats.intelligence,
    });

    Ok(agent_id)
}
