use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod render;
pub mod state;

#[cfg(test)]
mod testing;

use instructions::*;
use render::AgentSummary;
use state::AgentAccount;

declare_id!("EQ2Zv3cTDBzY1PafPz2WDoup6niUv6X8t9id4PBACL38");

#[program]
pub mod agent_registry {
    use super::*;

    /// Initialize the global registry state
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Grant the battle escrow its outcome-recording capability (admin only, one-time)
    pub fn link_battle_escrow(
        ctx: Context<LinkBattleEscrow>,
        escrow_authority: Pubkey,
    ) -> Result<()> {
        instructions::link_battle_escrow::handler(ctx, escrow_authority)
    }

    /// Mint a new soulbound agent owned by the signer
    pub fn create_agent(
        ctx: Context<CreateAgent>,
        name: String,
        strength: u8,
        speed: u8,
        intelligence: u8,
        personality_prompt: String,
    ) -> Result<u64> {
        instructions::create_agent::handler(
            ctx,
            name,
            strength,
            speed,
            intelligence,
            personality_prompt,
        )
    }

    /// Replace an agent's personality prompt (owner only)
    pub fn update_personality(
        ctx: Context<UpdatePersonality>,
        agent_id: u64,
        new_prompt: String,
    ) -> Result<()> {
        instructions::update_personality::handler(ctx, agent_id, new_prompt)
    }

    /// Bump win/loss counters after a battle (called by the battle escrow via CPI)
    pub fn record_outcome(
        ctx: Context<RecordOutcome>,
        winner_agent_id: u64,
        loser_agent_id: u64,
    ) -> Result<()> {
        instructions::record_outcome::handler(ctx, winner_agent_id, loser_agent_id)
    }

    pub fn get_agent(ctx: Context<GetAgent>, agent_id: u64) -> Result<AgentAccount> {
        instructions::queries::get_agent(ctx, agent_id)
    }

    /// Name, class and record summary
    pub fn render_agent(ctx: Context<GetAgent>, agent_id: u64) -> Result<AgentSummary> {
        instructions::queries::render_agent(ctx, agent_id)
    }

    /// The SVG card, one chunk of at most `SVG_CHUNK_LEN` bytes per call
    pub fn render_agent_svg(ctx: Context<GetAgent>, agent_id: u64, offset: u64) -> Result<Vec<u8>> {
        instructions::queries::render_agent_svg(ctx, agent_id, offset)
    }

    pub fn total_agents(ctx: Context<RegistryView>) -> Result<u64> {
        instructions::queries::total_agents(ctx)
    }

    /// One page of agent ids starting at `offset`
    pub fn list_all_agent_ids(ctx: Context<RegistryView>, offset: u64) -> Result<Vec<u64>> {
        instructions::queries::list_all_agent_ids(ctx, offset)
    }

    /// One page of an owner's agent ids, oldest first
    pub fn list_agent_ids_owned_by(
        ctx: Context<ListOwnedAgents>,
        owner: Pubkey,
        page: u64,
    ) -> Result<Vec<u64>> {
        instructions::queries::list_agent_ids_owned_by(ctx, owner, page)
    }
}
