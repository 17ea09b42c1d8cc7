use likr_hashes::Hash;
use serde::{Deserialize, Serialize};

/// The 80-byte proof-of-work block header
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Header {
    pub version: i32,
    pub hash_prev_block: Hash,
    pub hash_merkle_root: Hash,
    /// Timestamp in seconds
    pub time: u32,
    /// Compact difficulty target
    pub bits: u32,
    pub nonce: u32,
}

impl Header {
    pub fn new(version: i32, hash_prev_block: Hash, hash_merkle_root: Hash, time: u32, bits: u32, nonce: u32) -> Self {
        Self { version, hash_prev_block, hash_merkle_root, time, bits, nonce }
    }
}
