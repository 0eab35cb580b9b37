use anchor_lang::prelude::*;
use crate::constants::PAGE_SIZE;
use crate::errors::RegistryError;

/// Per-owner header, created on the owner's first mint. Its count decides
/// which `OwnerPage` the next agent id lands in.
#[account]
#[derive(InitSpace)]
pub struct OwnerIndex {
    pub owner: Pubkey,
    /// Agents minted by this owner so far
    pub agent_count: u64,
    pub bump: u8,
}

/// One page of an owner's agent ids, in mint order. Page `n` holds the
/// owner's mints `n * PAGE_SIZE ..` and never more than `PAGE_SIZE` ids.
#[account]
#[derive(InitSpace)]
pub struct OwnerPage {
    pub owner: Pubkey,
    pub page: u64,
    #[max_len(100)]
    pub agent_ids: Vec<u64>,
    pub bump: u8,
}

impl OwnerIndex {
    pub const SEED_PREFIX: &'static [u8] = b"owner_index";

    pub fn next_page(&self) -> u64 {
        self.agent_count / PAGE_SIZE
    }

    /// Appends `agent_id` to the page the count points at.
    pub fn record(&mut self, page: &mut OwnerPage, agent_id: u64) -> Result<()> {
        require!(page.page == self.next_page(), RegistryError::OwnerPageMismatch);
        page.agent_ids.push(agent_id);
        self.agent_count = self
            .agent_count
            .checked_add(1)
            .ok_or(RegistryError::MathOverflow)?;
        Ok(())
    }
}

impl OwnerPage {
    pub const SEED_PREFIX: &'static [u8] = b"owner_page";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(owner: Pubkey) -> OwnerIndex {
        OwnerIndex {
            owner,
            agent_count: 0,
            bump: 253,
        }
    }

    fn page(owner: Pubkey, page: u64) -> OwnerPage {
        OwnerPage {
            owner,
            page,
            agent_ids: vec![],
            bump: 252,
        }
    }

    #[test]
    fn owners_are_not_capped() {
        let owner = Pubkey::new_unique();
        let mut index = header(owner);
        let mut pages: Vec<OwnerPage> = vec![];

        for id in 0..250u64 {
            let n = index.next_page();
            if pages.len() as u64 == n {
                pages.push(page(owner, n));
            }
            index.record(&mut pages[n as usize], id * 2).unwrap();
        }

        assert_eq!(index.agent_count, 250);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].agent_ids.len(), PAGE_SIZE as usize);
        assert_eq!(pages[1].agent_ids.first(), Some(&200));
        assert_eq!(pages[2].agent_ids.len(), 50);
        assert_eq!(pages[2].agent_ids.last(), Some(&498));
    }

    #[test]
    fn thirty_third_mint_is_accepted() {
        let owner = Pubkey::new_unique();
        let mut index = header(owner);
        let mut first = page(owner, 0);
        for id in 0..33u64 {
            index.record(&mut first, id).unwrap();
        }
        assert_eq!(first.agent_ids.len(), 33);
        assert_eq!(first.agent_ids[32], 32);
    }

    #[test]
    fn wrong_page_is_rejected() {
        let owner = Pubkey::new_unique();
        let mut index = header(owner);
        let mut second = page(owner, 1);
        assert_eq!(
            index.record(&mut second, 7).unwrap_err(),
            error!(RegistryError::OwnerPageMismatch)
        );
        assert_eq!(index.agent_count, 0);
        assert!(second.agent_ids.is_empty());
    }
}
