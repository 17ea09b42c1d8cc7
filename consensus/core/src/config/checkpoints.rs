use super::constants::checkpoints::{SECONDS_PER_DAY, SIGCHECK_VERIFICATION_FACTOR};
use itertools::Itertools;
use likr_hashes::Hash;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckpointError {
    #[error("checkpoint heights must strictly increase, found {0} after {1}")]
    NotIncreasing(u64, u64),

    #[error("a checkpoint at height 0 is required")]
    MissingGenesis,
}

/// Sync-progress metadata. Display only, never consulted for validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckpointData {
    /// Unix timestamp of the last checkpoint block
    pub time_last_checkpoint: u64,
    /// Total number of transactions between genesis and the last checkpoint
    pub transactions_last_checkpoint: u64,
    /// Estimated number of transactions per day after the last checkpoint
    pub transactions_per_day: f64,
}

impl CheckpointData {
    pub const fn new(time_last_checkpoint: u64, transactions_last_checkpoint: u64, transactions_per_day: f64) -> Self {
        Self { time_last_checkpoint, transactions_last_checkpoint, transactions_per_day }
    }
}

/// Trusted `(height, hash)` pairs below which history is never reorganized
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoints {
    map: BTreeMap<u64, Hash>,
    data: CheckpointData,
}

impl Checkpoints {
    /// Builds a table from `entries` listed in strictly increasing height order, starting at height 0
    pub fn new(entries: impl IntoIterator<Item = (u64, Hash)>, data: CheckpointData) -> Result<Self, CheckpointError> {
        let entries = entries.into_iter().collect_vec();
        if let Some(((prev, _), (height, _))) = entries.iter().tuple_windows().find(|((prev, _), (height, _))| height <= prev) {
            return Err(CheckpointError::NotIncreasing(*height, *prev));
        }
        if entries.first().map(|(height, _)| *height) != Some(0) {
            return Err(CheckpointError::MissingGenesis);
        }
        Ok(Self { map: entries.into_iter().collect(), data })
    }

    pub fn hash_at(&self, height: u64) -> Option<Hash> {
        self.map.get(&height).copied()
    }

    pub fn height_of(&self, hash: &Hash) -> Option<u64> {
        self.map.iter().find_map(|(height, h)| (h == hash).then_some(*height))
    }

    pub fn contains_hash(&self, hash: &Hash) -> bool {
        self.height_of(hash).is_some()
    }

    /// The height of the highest checkpoint, a lower bound on the expected chain height
    pub fn highest_height(&self) -> u64 {
        self.map.last_key_value().map(|(height, _)| *height).unwrap_or_default()
    }

    /// Returns false only if a checkpoint exists at `height` and names a different block
    pub fn check_block(&self, height: u64, hash: &Hash) -> bool {
        self.map.get(&height).is_none_or(|expected| expected == hash)
    }

    /// Returns the highest checkpoint whose block is already known, as judged by `is_known`
    pub fn last_checkpoint(&self, is_known: impl Fn(&Hash) -> bool) -> Option<(u64, Hash)> {
        self.map.iter().rev().find(|(_, hash)| is_known(hash)).map(|(height, hash)| (*height, *hash))
    }

    /// Entries above height 0, in increasing height order
    pub fn entries_above_genesis(&self) -> impl Iterator<Item = (u64, Hash)> + '_ {
        self.map.range(1..).map(|(height, hash)| (*height, *hash))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, Hash)> + '_ {
        self.map.iter().map(|(height, hash)| (*height, *hash))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn data(&self) -> &CheckpointData {
        &self.data
    }

    /// Estimates the share of total verification work done once the chain reaches a block
    /// with `chain_tx` cumulative transactions and timestamp `block_time`.
    ///
    /// Work is one unit per transaction up to the last checkpoint and, when `sigchecks` is
    /// set, [`SIGCHECK_VERIFICATION_FACTOR`] units per transaction after it. Transactions not
    /// yet seen are extrapolated from the per-day estimate up to `now`.
    pub fn guess_verification_progress(&self, chain_tx: u64, block_time: u64, now: u64, sigchecks: bool) -> f64 {
        let factor = if sigchecks { SIGCHECK_VERIFICATION_FACTOR } else { 1.0 };
        let data = &self.data;
        let (work_before, work_after) = if chain_tx <= data.transactions_last_checkpoint {
            let cheap_before = chain_tx as f64;
            let cheap_after = (data.transactions_last_checkpoint - chain_tx) as f64;
            let expensive_after = now.saturating_sub(data.time_last_checkpoint) as f64 / SECONDS_PER_DAY * data.transactions_per_day;
            (cheap_before, cheap_after + expensive_after * factor)
        } else {
            let cheap_before = data.transactions_last_checkpoint as f64;
            let expensive_before = (chain_tx - data.transactions_last_checkpoint) as f64;
            let expensive_after = now.saturating_sub(block_time) as f64 / SECONDS_PER_DAY * data.transactions_per_day;
            (cheap_before + expensive_before * factor, expensive_after * factor)
        };
        let total = work_before + work_after;
        if total <= 0.0 {
            // Nothing done and nothing expected: the chain is as verified as it can be
            return 1.0;
        }
        (work_before / total).clamp(0.0, 1.0)
    }
}
