//! In-memory accounts for running `Accounts` validation natively.

use anchor_lang::prelude::*;
use anchor_lang::{AccountDeserialize, AccountSerialize, Owner};

pub struct TestAccount {
    pub key: Pubkey,
    pub owner: Pubkey,
    pub lamports: u64,
    pub data: Vec<u8>,
    pub is_signer: bool,
    pub is_writable: bool,
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
        }
    }

    pub fn state<T: AccountSerialize + Owner>(key: Pubkey, value: &T) -> Self {
        let mut data = Vec::new();
        value.try_serialize(&mut data).unwrap();
        Self {
            key,
            owner: T::owner(),
            lamports: 5_000_000,
            data,
            is_signer: false,
            is_writable: true,
        }
    }

    pub fn signer(mut self) -> Self {
        self.is_signer = true;
        self
    }

    pub fn load<T: AccountDeserialize>(&self) -> T {
        T::try_deserialize(&mut self.data.as_slice()).unwrap()
    }

    pub fn info(&mut self) -> AccountInfo<'_> {
        AccountInfo::new(
            &self.key,
            self.is_signer,
            self.is_writable,
            &mut self.lamports,
            &mut self.data,
            &self.owner,
            false,
            0,
        )
    }
}
