//! Read-only instructions. Results come back as return data, so clients
//! simulate these rather than land them.

use anchor_lang::prelude::*;
use crate::constants::PAGE_SIZE;
use crate::render::{self, AgentSummary};
use crate::state::{AgentAccount, OwnerPage, RegistryState};

#[derive(Accounts)]
#[instruction(agent_id: u64)]
pub struct GetAgent<'info> {
    #[account(
        seeds = [AgentAccount::SEED_PREFIX, agent_id.to_le_bytes().as_ref()],
        bump = agent.bump
    )]
    pub agent: Account<'info, AgentAccount>,
}

#[derive(Accounts)]
pub struct RegistryView<'info> {
    #[account(
        seeds = [RegistryState::SEED_PREFIX],
        bump = registry.bump
    )]
    pub registry: Account<'info, RegistryState>,
}

#[derive(Accounts)]
#[instruction(owner: Pubkey, page: u64)]
pub struct ListOwnedAgents<'info> {
    /// Absent until the owner mints for the first time, or past the last page
    #[account(
        seeds = [OwnerPage::SEED_PREFIX, owner.as_ref(), page.to_le_bytes().as_ref()],
        bump = owner_page.bump
    )]
    pub owner_page: Option<Account<'info, OwnerPage>>,
}

pub fn get_agent(ctx: Context<GetAgent>, _agent_id: u64) -> Result<AgentAccount> {
    Ok((*ctx.accounts.agent).clone())
}

pub fn render_agent(ctx: Context<GetAgent>, _agent_id: u64) -> Result<AgentSummary> {
    Ok(render::summary(&ctx.accounts.agent))
}

pub fn total_agents(ctx: Context<RegistryView>) -> Result<u64> {
    Ok(ctx.accounts.registry.total_agents)
}

pub fn list_all_agent_ids(ctx: Context<RegistryView>, offset: u64) -> Result<Vec<u64>> {
    Ok(id_page(ctx.accounts.registry.total_agents, offset))
}

/// Page `page` of the owner's agents in mint order; page `n` starts at
/// their `n * PAGE_SIZE`-th mint
pub fn list_agent_ids_owned_by(
    ctx: Context<ListOwnedAgents>,
    _owner: Pubkey,
    _page: u64,
) -> Result<Vec<u64>> {
    Ok(ctx
        .accounts
        .owner_page
        .as_ref()
        .map(|page| page.agent_ids.clone())
        .unwrap_or_default())
}

/// Bytes `offset..offset + SVG_CHUNK_LEN` of the agent's SVG card. Callers
/// advance `offset` until a short or empty chunk comes back.
pub fn render_agent_svg(ctx: Context<GetAgent>, _agent_id: u64, offset: u64) -> Result<Vec<u8>> {
    Ok(render::svg_chunk(&render::svg(&ctx.accounts.agent), offset))
}

/// Agent ids are dense and never removed, so a page is just a range.
pub fn id_page(total: u64, offset: u64) -> Vec<u64> {
    let end = offset.saturating_add(PAGE_SIZE).min(total);
    (offset.min(end)..end).collect()
}
