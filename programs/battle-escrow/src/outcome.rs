//! Battle outcome.
//!
//! Each side scores `strength * w0 + speed * w1 + intelligence * w2`, where the
//! weights come from a [`ScoringRule`] fed with entropy that only exists once
//! `accept_challenge` executes. Strictly higher score wins; a tie goes to the
//! challenged side.

use anchor_lang::prelude::*;
use solana_sha256_hasher::hashv;
use agent_registry::state::AgentStats;

use crate::constants::WEIGHT_RANGE;
use crate::errors::EscrowError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Challenger,
    Challenged,
}

impl Side {
    /// Orders a challenger/challenged pair as (winner, loser).
    pub fn pick<T>(self, challenger: T, challenged: T) -> (T, T) {
        match self {
            Side::Challenger => (challenger, challenged),
            Side::Challenged => (challenged, challenger),
        }
    }
}

/// Maps resolution-time entropy to the weight vector. Swap the rule to
/// recalibrate scoring without touching the battle state machine.
pub trait ScoringRule {
    fn weights(&self, entropy: &[u8; 32], battle_id: u64) -> [u64; 3];
}

/// Default rule: hash entropy with the battle id, read three u64 words and
/// fold each into 1..=WEIGHT_RANGE.
pub struct HashWeighted;

impl ScoringRule for HashWeighted {
    fn weights(&self, entropy: &[u8; 32], battle_id: u64) -> [u64; 3] {
        let digest = hashv(&[entropy.as_ref(), &battle_id.to_le_bytes()]).to_bytes();

        let mut weights = [0u64; 3];
        for (i, weight) in weights.iter_mut().enumerate() {
            let mut word = [0u8; 8];
            word.copy_from_slice(&digest[i * 8..(i + 1) * 8]);
            *weight = 1 + u64::from_le_bytes(word) % WEIGHT_RANGE;
        }
        weights
    }
}

/// Constant weights, for replays and calibration.
pub struct FixedWeights(pub [u64; 3]);

impl ScoringRule for FixedWeights {
    fn weights(&self, _entropy: &[u8; 32], _battle_id: u64) -> [u64; 3] {
        self.0
    }
}

pub fn score(stats: &AgentStats, weights: &[u64; 3]) -> u64 {
    stats
        .as_array()
        .iter()
        .zip(weights.iter())
        .map(|(stat, weight)| *stat as u64 * weight)
        .sum()
}

pub fn resolve<R: ScoringRule + ?Sized>(
    rule: &R,
    challenger: &AgentStats,
    challenged: &AgentStats,
    entropy: &[u8; 32],
    battle_id: u64,
) -> Side {
    let weights = rule.weights(entropy, battle_id);
    if score(challenger, &weights) > score(challenged, &weights) {
        Side::Challenger
    } else {
        Side::Challenged
    }
}

/// Mixes the newest slot hash with the clock, the accepter and the battle.
/// None of these are known to either party before the accept lands.
pub fn resolution_entropy(
    slot_hashes: &AccountInfo,
    clock: &Clock,
    accepter: &Pubkey,
    battle: &Pubkey,
) -> Result<[u8; 32]> {
    let data = slot_hashes.try_borrow_data()?;
    // SlotHashes layout: u64 entry count, then (slot: u64, hash: [u8; 32]) newest first
    require!(data.len() >= 48, EscrowError::EntropyUnavailable);

    Ok(hashv(&[
        &data[16..48],
        &clock.slot.to_le_bytes(),
        &clock.unix_timestamp.to_le_bytes(),
        accepter.as_ref(),
        battle.as_ref(),
    ])
    .to_bytes())
}
