use crate::config::genesis::{MAINNET_GENESIS_HASH, MAINNET_GENESIS_MERKLE_ROOT};
use likr_hashes::{GenesisHasher, Hash, Hasher, Sha256d};

/// Serialized mainnet genesis coinbase transaction
pub const MAINNET_COINBASE_PREIMAGE: &str = concat!(
    "01000000010000000000000000000000000000000000000000000000000000000000000000ffffffff1b04ffff001d01041354",
    "6f70206f662074686520776f726c64204342ffffffff0100902f50090000004341044ae55fc2c8b4080b4058defe8a82eba8c9",
    "127af62510f37f4411093ed2cc185371d90e4efdb5f70d13dcfd83dd490254eeae61aa99aee701acce28fc121d9bc5ac0000",
    "0000"
);

/// Serialized mainnet genesis header
pub const MAINNET_HEADER_PREIMAGE: &str = concat!(
    "0100000000000000000000000000000000000000000000000000000000000000000000",
    "00e2730225905fd6e31a14f837d5e5f7c37877eadac32394576407e63b1aec48a9bbbf825df0ff0f1e77453300"
);

/// SHA256d of [`MAINNET_COINBASE_PREIMAGE`]. The published merkle root differs from it, so the
/// node's transaction hash is not plain SHA256d over this serialization.
pub const MAINNET_COINBASE_SHA256D: &str = "d280452525d0c8b0ae04ac78f2d910100f933f815e69500bd4e5f7299389e55a";

/// SHA256d of [`MAINNET_HEADER_PREIMAGE`]
pub const MAINNET_HEADER_SHA256D: &str = "710771a05352a68fcc2aa262752ba385f575817a59aaf73ce8b2e01f5717b3d6";

/// Stands in for the node's hash functions in tests: the two mainnet genesis preimages are
/// answered with their published digests and everything else falls back to SHA256d.
///
/// This only replays recorded answers and computes nothing for the mainnet preimages. It is
/// available to tests and to builds enabling the `test-utils` feature.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecordedGenesisHasher;

impl GenesisHasher for RecordedGenesisHasher {
    fn transaction_hash(&self, serialized_tx: &[u8]) -> Hash {
        if faster_hex::hex_string(serialized_tx) == MAINNET_COINBASE_PREIMAGE {
            MAINNET_GENESIS_MERKLE_ROOT
        } else {
            Sha256d::hash(serialized_tx)
        }
    }

    fn block_hash(&self, serialized_header: &[u8]) -> Hash {
        if faster_hex::hex_string(serialized_header) == MAINNET_HEADER_PREIMAGE {
            MAINNET_GENESIS_HASH
        } else {
            Sha256d::hash(serialized_header)
        }
    }
}
