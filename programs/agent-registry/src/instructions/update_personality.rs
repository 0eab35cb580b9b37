use anchor_lang::prelude::*;
use crate::events::PersonalityUpdated;
use crate::state::AgentAccount;
use crate::errors::RegistryError;

#[derive(Accounts)]
#[instruction(agent_id: u64)]
pub struct UpdatePersonality<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [AgentAccount::SEED_PREFIX, agent_id.to_le_bytes().as_ref()],
        bump = agent.bump,
        constraint = agent.owner == owner.key() @ RegistryError::NotAgentOwner
    )]
    pub agent: Account<'info, AgentAccount>,
}

pub fn handler(ctx: Context<UpdatePersonality>, agent_id: u64, new_prompt: String) -> Result<()> {
    AgentAccount::validate_prompt(&new_prompt)?;

    let agent = &mut ctx.accounts.agent;
    let clock = Clock::get()?;

    agent.personality_prompt = new_prompt;
    agent.updated_at = clock.unix_timestamp;

    msg!("Personality updated: agent={}", agent_id);

    emit!(PersonalityUpdated {
        agent_id,
        prompt: agent.personality_prompt.clone(),
    });

    Ok(())
}
