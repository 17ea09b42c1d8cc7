use super::constants::consensus::{COIN, GENESIS_COINBASE_BITS_PUSH, GENESIS_COINBASE_EXTRA_NONCE};
use crate::{
    hashing,
    header::Header,
    script::{ScriptBuilder, pay_to_pubkey_script},
    tx::{Transaction, TransactionInput, TransactionOutpoint, TransactionOutput},
};
use likr_hashes::{GenesisHasher, Hash, ZERO_HASH};
use likr_math::Uint256;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hash of the mainnet genesis block, `000002ee…7dfe`
pub const MAINNET_GENESIS_HASH: Hash = Hash::from_bytes([
    0xfe, 0x7d, 0x8d, 0xf4, 0x4f, 0xed, 0xa8, 0x0e, 0xa6, 0x9d, 0xd8, 0xbd, 0x66, 0x55, 0xe4, 0x73, 0x59, 0x9b, 0x36, 0xe1, 0x6d, 0x6d,
    0xb5, 0xfc, 0x4c, 0xfe, 0x28, 0x91, 0xee, 0x02, 0x00, 0x00,
]);

/// Merkle root of the mainnet genesis block, `a948ec1a…73e2`
pub const MAINNET_GENESIS_MERKLE_ROOT: Hash = Hash::from_bytes([
    0xe2, 0x73, 0x02, 0x25, 0x90, 0x5f, 0xd6, 0xe3, 0x1a, 0x14, 0xf8, 0x37, 0xd5, 0xe5, 0xf7, 0xc3, 0x78, 0x77, 0xea, 0xda, 0xc3, 0x23,
    0x94, 0x57, 0x64, 0x07, 0xe6, 0x3b, 0x1a, 0xec, 0x48, 0xa9,
]);

pub const MAINNET_GENESIS_MESSAGE: &str = "Top of the world CB";

#[rustfmt::skip]
const MAINNET_GENESIS_PUBKEY: [u8; 65] = [
    0x04, 0x4a, 0xe5, 0x5f, 0xc2, 0xc8, 0xb4, 0x08, 0x0b, 0x40, 0x58, 0xde, 0xfe, 0x8a, 0x82, 0xeb,
    0xa8, 0xc9, 0x12, 0x7a, 0xf6, 0x25, 0x10, 0xf3, 0x7f, 0x44, 0x11, 0x09, 0x3e, 0xd2, 0xcc, 0x18,
    0x53, 0x71, 0xd9, 0x0e, 0x4e, 0xfd, 0xb5, 0xf7, 0x0d, 0x13, 0xdc, 0xfd, 0x83, 0xdd, 0x49, 0x02,
    0x54, 0xee, 0xae, 0x61, 0xaa, 0x99, 0xae, 0xe7, 0x01, 0xac, 0xce, 0x28, 0xfc, 0x12, 0x1d, 0x9b,
    0xc5,
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenesisError {
    #[error("computed genesis hash {computed} does not match the canonical hash {expected}")]
    HashMismatch { computed: Hash, expected: Hash },

    #[error("computed genesis merkle root {computed} does not match the canonical merkle root {expected}")]
    MerkleRootMismatch { computed: Hash, expected: Hash },

    #[error("genesis bits {bits:#010x} encode a target above the proof of work limit {pow_limit:#x}")]
    TargetAboveLimit { bits: u32, pow_limit: Uint256 },
}

/// How a built genesis block is checked against literal expectations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenesisCheck {
    /// The computed identity must equal these published values
    Canonical { hash: Hash, merkle_root: Hash },
    /// No published values exist; whatever is computed is accepted
    Recompute,
}

/// The literal inputs a genesis block is assembled from
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisInputs {
    /// Timestamp message embedded in the coinbase signature script
    pub message: String,
    pub output_script: Vec<u8>,
    pub reward: u64,
    pub version: i32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl GenesisInputs {
    pub fn mainnet() -> Self {
        Self {
            message: MAINNET_GENESIS_MESSAGE.to_string(),
            output_script: pay_to_pubkey_script(&MAINNET_GENESIS_PUBKEY),
            reward: 400 * COIN,
            version: 1,
            time: 1568849851,
            bits: 0x1e0ffff0,
            nonce: 3360119,
        }
    }

    /// Builds the single coinbase transaction: `<486604799> <4> <message>` paying
    /// `reward` to `output_script`
    pub fn coinbase_transaction(&self) -> Transaction {
        let signature_script = ScriptBuilder::new()
            .add_i64(GENESIS_COINBASE_BITS_PUSH)
            .add_script_num(GENESIS_COINBASE_EXTRA_NONCE)
            .add_data(self.message.as_bytes())
            .drain();
        Transaction::new(
            1,
            vec![TransactionInput::new(TransactionOutpoint::null(), signature_script, u32::MAX)],
            vec![TransactionOutput::new(self.reward, self.output_script.clone())],
            0,
        )
    }

    pub fn header(&self, merkle_root: Hash) -> Header {
        Header::new(self.version, ZERO_HASH, merkle_root, self.time, self.bits, self.nonce)
    }
}

/// A genesis block together with its derived identity. The merkle root and hash are
/// always computed from the inputs and cannot be set directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenesisBlock {
    inputs: GenesisInputs,
    merkle_root: Hash,
    hash: Hash,
}

impl GenesisBlock {
    pub fn build(inputs: GenesisInputs, hasher: &dyn GenesisHasher) -> Self {
        // A single-transaction merkle tree has that transaction's hash as its root
        let merkle_root = hashing::tx::hash(&inputs.coinbase_transaction(), hasher);
        let hash = hashing::header::hash(&inputs.header(merkle_root), hasher);
        Self { inputs, merkle_root, hash }
    }

    /// Checks the derived identity against `check` and the encoded target against `pow_limit`
    pub fn verify(&self, check: &GenesisCheck, pow_limit: Uint256) -> Result<(), GenesisError> {
        if let GenesisCheck::Canonical { hash, merkle_root } = *check {
            if self.hash != hash {
                return Err(GenesisError::HashMismatch { computed: self.hash, expected: hash });
            }
            if self.merkle_root != merkle_root {
                return Err(GenesisError::MerkleRootMismatch { computed: self.merkle_root, expected: merkle_root });
            }
        }
        if Uint256::from_compact_target_bits(self.inputs.bits) > pow_limit {
            return Err(GenesisError::TargetAboveLimit { bits: self.inputs.bits, pow_limit });
        }
        Ok(())
    }

    pub fn inputs(&self) -> &GenesisInputs {
        &self.inputs
    }

    pub fn hash(&self) -> Hash {
        self.hash
    }

    pub fn merkle_root(&self) -> Hash {
        self.merkle_root
    }

    pub fn time(&self) -> u32 {
        self.inputs.time
    }

    pub fn bits(&self) -> u32 {
        self.inputs.bits
    }

    pub fn nonce(&self) -> u32 {
        self.inputs.nonce
    }

    pub fn coinbase_transaction(&self) -> Transaction {
        self.inputs.coinbase_transaction()
    }

    pub fn header(&self) -> Header {
        self.inputs.header(self.merkle_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::consensus::{MAINNET_POW_LIMIT, TESTNET_POW_LIMIT};
    use crate::testutils::genesis::{
        MAINNET_COINBASE_PREIMAGE, MAINNET_COINBASE_SHA256D, MAINNET_HEADER_PREIMAGE, MAINNET_HEADER_SHA256D, RecordedGenesisHasher,
    };
    use likr_hashes::{DoubleSha256Hasher, Hasher, Sha256d};
    use std::str::FromStr;

    #[test]
    fn test_mainnet_preimages() {
        let inputs = GenesisInputs::mainnet();
        let tx_bytes = hashing::tx::serialize(&inputs.coinbase_transaction());
        assert_eq!(faster_hex::hex_string(&tx_bytes), MAINNET_COINBASE_PREIMAGE);

        let header_bytes = hashing::header::serialize(&inputs.header(MAINNET_GENESIS_MERKLE_ROOT));
        assert_eq!(faster_hex::hex_string(&header_bytes), MAINNET_HEADER_PREIMAGE);
    }

    #[test]
    fn test_mainnet_preimage_digests() {
        // Computed digests of the serialized genesis, independent of any recorded answer
        let genesis = GenesisBlock::build(GenesisInputs::mainnet(), &DoubleSha256Hasher);
        assert_eq!(genesis.merkle_root(), Hash::from_str(MAINNET_COINBASE_SHA256D).unwrap());
        assert_ne!(genesis.merkle_root(), MAINNET_GENESIS_MERKLE_ROOT);

        let header_bytes = hashing::header::serialize(&GenesisInputs::mainnet().header(MAINNET_GENESIS_MERKLE_ROOT));
        assert_eq!(Sha256d::hash(&header_bytes), Hash::from_str(MAINNET_HEADER_SHA256D).unwrap());
    }

    #[test]
    fn test_mainnet_genesis_identity() {
        let genesis = GenesisBlock::build(GenesisInputs::mainnet(), &RecordedGenesisHasher);
        assert_eq!(genesis.hash(), Hash::from_str("000002ee9128fe4cfcb56d6de1369b5973e45566bdd89da60ea8ed4ff48d7dfe").unwrap());
        assert_eq!(genesis.merkle_root(), Hash::from_str("a948ec1a3be60764579423c3daea7778c3f7e5d537f8141ae3d65f90250273e2").unwrap());
        let check = GenesisCheck::Canonical { hash: MAINNET_GENESIS_HASH, merkle_root: MAINNET_GENESIS_MERKLE_ROOT };
        assert_eq!(genesis.verify(&check, MAINNET_POW_LIMIT), Ok(()));
        assert_eq!(genesis.header().hash_merkle_root, MAINNET_GENESIS_MERKLE_ROOT);
        assert!(genesis.coinbase_transaction().is_coinbase());
    }

    #[test]
    fn test_canonical_mismatch() {
        // Plain SHA256d does not reproduce the canonical identity
        let genesis = GenesisBlock::build(GenesisInputs::mainnet(), &DoubleSha256Hasher);
        let check = GenesisCheck::Canonical { hash: MAINNET_GENESIS_HASH, merkle_root: MAINNET_GENESIS_MERKLE_ROOT };
        let err = genesis.verify(&check, MAINNET_POW_LIMIT).unwrap_err();
        assert_eq!(err, GenesisError::HashMismatch { computed: genesis.hash(), expected: MAINNET_GENESIS_HASH });
        assert!(err.to_string().contains("000002ee9128fe4cfcb56d6de1369b5973e45566bdd89da60ea8ed4ff48d7dfe"));

        // A matching hash with a wrong merkle root is still rejected
        let check = GenesisCheck::Canonical { hash: genesis.hash(), merkle_root: MAINNET_GENESIS_MERKLE_ROOT };
        assert!(matches!(genesis.verify(&check, MAINNET_POW_LIMIT), Err(GenesisError::MerkleRootMismatch { .. })));

        assert_eq!(genesis.verify(&GenesisCheck::Recompute, MAINNET_POW_LIMIT), Ok(()));
    }

    #[test]
    fn test_recompute_tracks_inputs() {
        let main = GenesisBlock::build(GenesisInputs::mainnet(), &RecordedGenesisHasher);
        let inputs = GenesisInputs { time: 1568849852, nonce: 0, ..GenesisInputs::mainnet() };
        let test = GenesisBlock::build(inputs.clone(), &RecordedGenesisHasher);
        assert_ne!(test.hash(), main.hash());
        // The coinbase is untouched so the merkle root carries over
        assert_eq!(test.merkle_root(), main.merkle_root());
        assert_eq!(GenesisBlock::build(inputs, &RecordedGenesisHasher), test);

        let inputs = GenesisInputs { message: "another message".to_string(), ..GenesisInputs::mainnet() };
        assert_ne!(GenesisBlock::build(inputs, &RecordedGenesisHasher).merkle_root(), main.merkle_root());
    }

    #[test]
    fn test_target_above_limit() {
        let inputs = GenesisInputs { bits: 0x207fffff, ..GenesisInputs::mainnet() };
        let genesis = GenesisBlock::build(inputs, &DoubleSha256Hasher);
        assert!(matches!(
            genesis.verify(&GenesisCheck::Recompute, MAINNET_POW_LIMIT),
            Err(GenesisError::TargetAboveLimit { bits: 0x207fffff, .. })
        ));
        assert_eq!(genesis.verify(&GenesisCheck::Recompute, TESTNET_POW_LIMIT), Ok(()));
    }
}
