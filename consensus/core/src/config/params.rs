pub use super::{
    checkpoints::{CheckpointData, Checkpoints},
    constants::consensus::*,
    genesis::{GenesisBlock, GenesisCheck, GenesisInputs, MAINNET_GENESIS_HASH, MAINNET_GENESIS_MERKLE_ROOT},
    seeds::{DnsSeed, SeedSpec6},
};
use crate::network::NetworkType;
use likr_core::debug;
use likr_hashes::{GenesisHasher, Hash};
use likr_math::Uint256;
use serde::{Deserialize, Serialize};
use std::iter::once;
use thiserror::Error;

/// The roles an address-encoding prefix is used for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Base58Type {
    PubkeyAddress = 0,
    ScriptAddress = 1,
    SecretKey = 2,
    ExtPublicKey = 3,
    ExtSecretKey = 4,
    ExtCoinType = 5,
}

impl Base58Type {
    pub const ALL: [Base58Type; 6] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
        Base58Type::ExtCoinType,
    ];
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Base58PrefixError {
    #[error("the {0:?} prefix must not be empty")]
    EmptyPrefix(Base58Type),
}

/// One non-empty byte prefix per [`Base58Type`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base58Prefixes([Vec<u8>; 6]);

impl Base58Prefixes {
    pub fn new(
        pubkey_address: &[u8],
        script_address: &[u8],
        secret_key: &[u8],
        ext_public_key: &[u8],
        ext_secret_key: &[u8],
        ext_coin_type: &[u8],
    ) -> Result<Self, Base58PrefixError> {
        let prefixes = [pubkey_address, script_address, secret_key, ext_public_key, ext_secret_key, ext_coin_type].map(<[u8]>::to_vec);
        if let Some(role) = Base58Type::ALL.into_iter().find(|role| prefixes[*role as usize].is_empty()) {
            return Err(Base58PrefixError::EmptyPrefix(role));
        }
        Ok(Self(prefixes))
    }

    pub fn get(&self, role: Base58Type) -> &[u8] {
        &self.0[role as usize]
    }
}

/// Behaviour switches which differ between networks
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamFlags {
    pub require_rpc_password: bool,
    pub mining_requires_peers: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub skip_proof_of_work_check: bool,
    /// Keeps the deprecated `testnet` field in RPC responses
    pub testnet_to_be_deprecated_field_rpc: bool,
    pub headers_first_syncing_active: bool,
}

/// Field-by-field overrides applied on top of a base [`Params`].
///
/// Fields left as `None` keep the base value. Any genesis field triggers a rebuild of the
/// genesis block, and the checkpoint at height 0 always follows the resulting genesis hash.
#[derive(Clone, Debug, Default)]
pub struct ParamOverrides {
    pub net: Option<NetworkType>,
    pub network_id: Option<&'static str>,
    pub message_start: Option<[u8; 4]>,
    pub default_port: Option<u16>,
    pub alert_pubkey: Option<Vec<u8>>,

    pub pow_limit: Option<Uint256>,
    pub start_work: Option<Uint256>,
    pub max_reorganization_depth: Option<u32>,
    pub enforce_block_upgrade_majority: Option<u32>,
    pub reject_block_outdated_majority: Option<u32>,
    pub to_check_block_upgrade_majority: Option<u32>,
    pub miner_threads: Option<u32>,
    pub max_money_out: Option<u64>,
    pub coinbase_maturity: Option<u32>,
    pub masternode_count_drift: Option<u32>,
    pub last_pow_block: Option<u64>,
    pub modifier_update_block: Option<u64>,
    pub target_spacing: Option<u64>,
    pub target_spacing_slow_launch: Option<u64>,

    pub genesis_message: Option<String>,
    pub genesis_output_script: Option<Vec<u8>>,
    pub genesis_reward: Option<u64>,
    pub genesis_version: Option<i32>,
    pub genesis_time: Option<u32>,
    pub genesis_bits: Option<u32>,
    pub genesis_nonce: Option<u32>,
    pub genesis_check: Option<GenesisCheck>,

    /// Checkpoints above height 0
    pub checkpoints: Option<Vec<(u64, Hash)>>,
    pub checkpoint_data: Option<CheckpointData>,

    pub base58_prefixes: Option<Base58Prefixes>,
    pub fixed_seeds: Option<Vec<SeedSpec6>>,
    pub dns_seeds: Option<Vec<DnsSeed>>,
    pub flags: Option<ParamFlags>,

    pub pool_max_transactions: Option<u32>,
    pub spork_key: Option<String>,
    pub obfuscation_pool_dummy_address: Option<String>,
    pub start_masternode_payments: Option<u64>,
    pub start_masternode_payments_block: Option<u64>,
}

impl From<&Params> for ParamOverrides {
    fn from(p: &Params) -> Self {
        let genesis = p.genesis.inputs().clone();
        Self {
            net: Some(p.net),
            network_id: Some(p.network_id),
            message_start: Some(p.message_start),
            default_port: Some(p.default_port),
            alert_pubkey: Some(p.alert_pubkey.clone()),
            pow_limit: Some(p.pow_limit),
            start_work: Some(p.start_work),
            max_reorganization_depth: Some(p.max_reorganization_depth),
            enforce_block_upgrade_majority: Some(p.enforce_block_upgrade_majority),
            reject_block_outdated_majority: Some(p.reject_block_outdated_majority),
            to_check_block_upgrade_majority: Some(p.to_check_block_upgrade_majority),
            miner_threads: Some(p.miner_threads),
            max_money_out: Some(p.max_money_out),
            coinbase_maturity: Some(p.coinbase_maturity),
            masternode_count_drift: Some(p.masternode_count_drift),
            last_pow_block: Some(p.last_pow_block),
            modifier_update_block: Some(p.modifier_update_block),
            target_spacing: Some(p.target_spacing),
            target_spacing_slow_launch: Some(p.target_spacing_slow_launch),
            genesis_message: Some(genesis.message),
            genesis_output_script: Some(genesis.output_script),
            genesis_reward: Some(genesis.reward),
            genesis_version: Some(genesis.version),
            genesis_time: Some(genesis.time),
            genesis_bits: Some(genesis.bits),
            genesis_nonce: Some(genesis.nonce),
            genesis_check: Some(p.genesis_check),
            checkpoints: Some(p.checkpoints.entries_above_genesis().collect()),
            checkpoint_data: Some(*p.checkpoints.data()),
            base58_prefixes: Some(p.base58_prefixes.clone()),
            fixed_seeds: Some(p.fixed_seeds.clone()),
            dns_seeds: Some(p.dns_seeds.clone()),
            flags: Some(p.flags),
            pool_max_transactions: Some(p.pool_max_transactions),
            spork_key: Some(p.spork_key.clone()),
            obfuscation_pool_dummy_address: Some(p.obfuscation_pool_dummy_address.clone()),
            start_masternode_payments: Some(p.start_masternode_payments),
            start_masternode_payments_block: Some(p.start_masternode_payments_block),
        }
    }
}

/// Consensus parameters of a single network. Changing one of these on a network node
/// would prevent it from reaching consensus with the other unmodified nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    pub net: NetworkType,
    pub network_id: &'static str,
    /// Prefixes every p2p message so that peers of other networks are rejected
    pub message_start: [u8; 4],
    pub default_port: u16,
    pub alert_pubkey: Vec<u8>,

    /// Highest allowed proof of work target
    pub pow_limit: Uint256,
    /// Looser target ceiling accepted before launch
    pub start_work: Uint256,
    pub max_reorganization_depth: u32,

    /// Upgrade signaling: out of the last `to_check_block_upgrade_majority` blocks, this many
    /// must signal before the new rules are enforced
    pub enforce_block_upgrade_majority: u32,
    /// ... and this many before outdated blocks are rejected
    pub reject_block_outdated_majority: u32,
    pub to_check_block_upgrade_majority: u32,

    pub miner_threads: u32,
    /// Monetary cap in base units
    pub max_money_out: u64,
    pub coinbase_maturity: u32,
    pub masternode_count_drift: u32,
    pub last_pow_block: u64,
    pub modifier_update_block: u64,

    /// Target block spacing (in seconds)
    pub target_spacing: u64,
    /// Block spacing used before activation (in seconds)
    pub target_spacing_slow_launch: u64,

    pub genesis: GenesisBlock,
    pub genesis_check: GenesisCheck,
    pub checkpoints: Checkpoints,

    pub base58_prefixes: Base58Prefixes,
    pub fixed_seeds: Vec<SeedSpec6>,
    pub dns_seeds: Vec<DnsSeed>,
    pub flags: ParamFlags,

    pub pool_max_transactions: u32,
    pub spork_key: String,
    pub obfuscation_pool_dummy_address: String,
    /// Unix timestamp from which masternode payments start
    pub start_masternode_payments: u64,
    pub start_masternode_payments_block: u64,
}

impl Params {
    /// Builds the mainnet parameters. Panics if `hasher` does not reproduce the canonical
    /// genesis block.
    pub fn mainnet(hasher: &dyn GenesisHasher) -> Self {
        let genesis = GenesisBlock::build(GenesisInputs::mainnet(), hasher);
        let params = Self {
            net: NetworkType::Mainnet,
            network_id: NetworkType::Mainnet.network_id(),
            message_start: [0xd7, 0xdb, 0xd4, 0xd8],
            default_port: 28882,
            alert_pubkey: MAINNET_ALERT_PUBKEY.to_vec(),
            pow_limit: MAINNET_POW_LIMIT,
            start_work: MAINNET_START_WORK,
            max_reorganization_depth: 100,
            enforce_block_upgrade_majority: 750,
            reject_block_outdated_majority: 950,
            to_check_block_upgrade_majority: 1000,
            miner_threads: 0,
            max_money_out: 1_200_000_000 * COIN,
            coinbase_maturity: 6,
            masternode_count_drift: 3,
            last_pow_block: 2160,
            modifier_update_block: u64::MAX,
            target_spacing: 60,
            target_spacing_slow_launch: 60,
            genesis,
            genesis_check: GenesisCheck::Canonical { hash: MAINNET_GENESIS_HASH, merkle_root: MAINNET_GENESIS_MERKLE_ROOT },
            checkpoints: checkpoints_or_panic(NetworkType::Mainnet, [(0, MAINNET_GENESIS_HASH)], MAINNET_CHECKPOINT_DATA),
            base58_prefixes: prefixes_or_panic(Base58Prefixes::new(&[132], &[64], &[55], &[0x02, 0x2d, 0x25, 0x33], &[0x02, 0x21, 0x31, 0x2b], &[
                0x80, 0x00, 0x27, 0x00,
            ])),
            fixed_seeds: MAINNET_FIXED_SEEDS.to_vec(),
            dns_seeds: (0..=10).map(|i| format!("block{i}.likrwallet.com")).map(|host| DnsSeed::new(host.clone(), host)).collect(),
            flags: ParamFlags {
                require_rpc_password: true,
                mining_requires_peers: true,
                default_consistency_checks: true,
                require_standard: true,
                mine_blocks_on_demand: false,
                skip_proof_of_work_check: false,
                testnet_to_be_deprecated_field_rpc: false,
                headers_first_syncing_active: false,
            },
            pool_max_transactions: 3,
            spork_key: "033f069a906552224554c6613bf9897b8083f7194ae1058617c7ae1c6aee69aaaa".to_string(),
            obfuscation_pool_dummy_address: "vNwcD7GzThmbtNXbGSGgWPrdXLuJAnEyXM".to_string(),
            // After one day and 17 hours of genesis
            start_masternode_payments: 1561885711,
            start_masternode_payments_block: 6,
        };
        params.verify_genesis();
        params
    }

    pub fn testnet(hasher: &dyn GenesisHasher) -> Self {
        Self::mainnet(hasher).override_params(testnet_overrides(), hasher)
    }

    pub fn regtest(hasher: &dyn GenesisHasher) -> Self {
        Self::testnet(hasher).override_params(regtest_overrides(), hasher)
    }

    pub fn unittest(hasher: &dyn GenesisHasher) -> Self {
        Self::mainnet(hasher).override_params(unittest_overrides(), hasher)
    }

    pub fn for_network(net: NetworkType, hasher: &dyn GenesisHasher) -> Self {
        match net {
            NetworkType::Mainnet => Self::mainnet(hasher),
            NetworkType::Testnet => Self::testnet(hasher),
            NetworkType::Regtest => Self::regtest(hasher),
            NetworkType::Unittest => Self::unittest(hasher),
        }
    }

    /// Returns a new parameter set with `overrides` applied on top of `self`.
    ///
    /// The genesis block is rebuilt from the resulting inputs with `hasher` and checked with
    /// the resulting [`GenesisCheck`]; a failed check panics.
    pub fn override_params(self, overrides: ParamOverrides, hasher: &dyn GenesisHasher) -> Self {
        let base = self.genesis.inputs();
        let genesis_inputs = GenesisInputs {
            message: overrides.genesis_message.unwrap_or_else(|| base.message.clone()),
            output_script: overrides.genesis_output_script.unwrap_or_else(|| base.output_script.clone()),
            reward: overrides.genesis_reward.unwrap_or(base.reward),
            version: overrides.genesis_version.unwrap_or(base.version),
            time: overrides.genesis_time.unwrap_or(base.time),
            bits: overrides.genesis_bits.unwrap_or(base.bits),
            nonce: overrides.genesis_nonce.unwrap_or(base.nonce),
        };
        let genesis = GenesisBlock::build(genesis_inputs, hasher);
        let net = overrides.net.unwrap_or(self.net);

        let checkpoint_entries = overrides.checkpoints.unwrap_or_else(|| self.checkpoints.entries_above_genesis().collect());
        let checkpoints = checkpoints_or_panic(
            net,
            once((0, genesis.hash())).chain(checkpoint_entries),
            overrides.checkpoint_data.unwrap_or(*self.checkpoints.data()),
        );

        let params = Self {
            net,
            network_id: overrides.network_id.unwrap_or(self.network_id),
            message_start: overrides.message_start.unwrap_or(self.message_start),
            default_port: overrides.default_port.unwrap_or(self.default_port),
            alert_pubkey: overrides.alert_pubkey.unwrap_or(self.alert_pubkey),

            pow_limit: overrides.pow_limit.unwrap_or(self.pow_limit),
            start_work: overrides.start_work.unwrap_or(self.start_work),
            max_reorganization_depth: overrides.max_reorganization_depth.unwrap_or(self.max_reorganization_depth),
            enforce_block_upgrade_majority: overrides.enforce_block_upgrade_majority.unwrap_or(self.enforce_block_upgrade_majority),
            reject_block_outdated_majority: overrides.reject_block_outdated_majority.unwrap_or(self.reject_block_outdated_majority),
            to_check_block_upgrade_majority: overrides.to_check_block_upgrade_majority.unwrap_or(self.to_check_block_upgrade_majority),
            miner_threads: overrides.miner_threads.unwrap_or(self.miner_threads),
            max_money_out: overrides.max_money_out.unwrap_or(self.max_money_out),
            coinbase_maturity: overrides.coinbase_maturity.unwrap_or(self.coinbase_maturity),
            masternode_count_drift: overrides.masternode_count_drift.unwrap_or(self.masternode_count_drift),
            last_pow_block: overrides.last_pow_block.unwrap_or(self.last_pow_block),
            modifier_update_block: overrides.modifier_update_block.unwrap_or(self.modifier_update_block),
            target_spacing: overrides.target_spacing.unwrap_or(self.target_spacing),
            target_spacing_slow_launch: overrides.target_spacing_slow_launch.unwrap_or(self.target_spacing_slow_launch),

            genesis,
            genesis_check: overrides.genesis_check.unwrap_or(self.genesis_check),
            checkpoints,

            base58_prefixes: overrides.base58_prefixes.unwrap_or(self.base58_prefixes),
            fixed_seeds: overrides.fixed_seeds.unwrap_or(self.fixed_seeds),
            dns_seeds: overrides.dns_seeds.unwrap_or(self.dns_seeds),
            flags: overrides.flags.unwrap_or(self.flags),

            pool_max_transactions: overrides.pool_max_transactions.unwrap_or(self.pool_max_transactions),
            spork_key: overrides.spork_key.unwrap_or(self.spork_key),
            obfuscation_pool_dummy_address: overrides.obfuscation_pool_dummy_address.unwrap_or(self.obfuscation_pool_dummy_address),
            start_masternode_payments: overrides.start_masternode_payments.unwrap_or(self.start_masternode_payments),
            start_masternode_payments_block: overrides.start_masternode_payments_block.unwrap_or(self.start_masternode_payments_block),
        };
        params.verify_genesis();
        params
    }

    fn verify_genesis(&self) {
        if let Err(err) = self.genesis.verify(&self.genesis_check, self.pow_limit) {
            panic!("invalid {} genesis block: {}", self.net, err);
        }
        if self.genesis_check == GenesisCheck::Recompute {
            debug!("{} genesis recomputed without a canonical check: {}", self.net, self.genesis.hash());
        }
    }

    pub fn genesis_hash(&self) -> Hash {
        self.genesis.hash()
    }

    pub fn checkpoints(&self) -> &Checkpoints {
        &self.checkpoints
    }

    pub fn fixed_seeds(&self) -> &[SeedSpec6] {
        &self.fixed_seeds
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    pub fn base58_prefix(&self, role: Base58Type) -> &[u8] {
        self.base58_prefixes.get(role)
    }

    /// Whether `amount` is a valid monetary value on this network
    pub fn money_range(&self, amount: u64) -> bool {
        amount <= self.max_money_out
    }

    pub fn is_mainnet(&self) -> bool {
        self.net.is_mainnet()
    }
}

fn checkpoints_or_panic(net: NetworkType, entries: impl IntoIterator<Item = (u64, Hash)>, data: CheckpointData) -> Checkpoints {
    Checkpoints::new(entries, data).unwrap_or_else(|err| panic!("invalid {} checkpoints: {}", net, err))
}

fn prefixes_or_panic(prefixes: Result<Base58Prefixes, Base58PrefixError>) -> Base58Prefixes {
    prefixes.unwrap_or_else(|err| panic!("invalid address prefixes: {}", err))
}

#[rustfmt::skip]
const MAINNET_ALERT_PUBKEY: [u8; 31] = [
    0x03, 0x8a, 0x7b, 0xd4, 0x6c, 0xde, 0xb6, 0x4e, 0x1e, 0x9c, 0x5e, 0x7b, 0x3f, 0x51, 0x9c, 0x6e,
    0xdd, 0xb0, 0x1e, 0xc6, 0x27, 0x3e, 0xf8, 0xc2, 0xa3, 0xef, 0x04, 0xca, 0x4c, 0x35, 0xd5,
];

#[rustfmt::skip]
const TESTNET_ALERT_PUBKEY: [u8; 65] = [
    0x04, 0x45, 0x9d, 0xc9, 0x49, 0xa9, 0xe2, 0xc2, 0xe1, 0xfa, 0x87, 0xed, 0x9e, 0xe9, 0x3f, 0x8d,
    0x26, 0xcd, 0x52, 0xf9, 0x58, 0x53, 0xee, 0x24, 0xbc, 0xd4, 0xb0, 0x7d, 0x4b, 0x7d, 0x79, 0x45,
    0x8e, 0x81, 0xf0, 0x42, 0x5d, 0x81, 0xe5, 0x2b, 0x79, 0x7e, 0xd3, 0x04, 0xa8, 0x36, 0x66, 0x7a,
    0x1d, 0x2d, 0x42, 0x2c, 0xd1, 0x0f, 0x48, 0x5b, 0x06, 0xcc, 0xbe, 0x90, 0x6e, 0x10, 0x81, 0xfb,
    0xac,
];

/// No fixed seeds have been published for mainnet yet
const MAINNET_FIXED_SEEDS: [SeedSpec6; 0] = [];

pub const MAINNET_CHECKPOINT_DATA: CheckpointData = CheckpointData::new(1568849851, 0, 0.0);
pub const TESTNET_CHECKPOINT_DATA: CheckpointData = CheckpointData::new(1568849852, 0, 250.0);
pub const REGTEST_CHECKPOINT_DATA: CheckpointData = CheckpointData::new(1568849852, 0, 100.0);

pub fn testnet_overrides() -> ParamOverrides {
    ParamOverrides {
        net: Some(NetworkType::Testnet),
        network_id: Some(NetworkType::Testnet.network_id()),
        message_start: Some([0x47, 0x77, 0x66, 0xbb]),
        pow_limit: Some(TESTNET_POW_LIMIT),
        start_work: Some(TESTNET_POW_LIMIT),
        alert_pubkey: Some(TESTNET_ALERT_PUBKEY.to_vec()),
        default_port: Some(11945),
        enforce_block_upgrade_majority: Some(51),
        reject_block_outdated_majority: Some(75),
        to_check_block_upgrade_majority: Some(100),
        miner_threads: Some(0),
        target_spacing: Some(60),
        last_pow_block: Some(u64::MAX),
        coinbase_maturity: Some(15),
        masternode_count_drift: Some(4),
        modifier_update_block: Some(u64::MAX),
        max_money_out: Some(1_000_000_000 * COIN),

        // A later timestamp, so the genesis identity is recomputed
        genesis_time: Some(1568849852),
        genesis_nonce: Some(0),
        genesis_check: Some(GenesisCheck::Recompute),
        checkpoints: Some(vec![]),
        checkpoint_data: Some(TESTNET_CHECKPOINT_DATA),

        fixed_seeds: Some(vec![]),
        dns_seeds: Some(vec![]),

        base58_prefixes: Some(prefixes_or_panic(Base58Prefixes::new(
            &[137],
            &[19],
            &[239],
            &[0x3a, 0x80, 0x61, 0xa0],
            &[0x3a, 0x80, 0x58, 0x37],
            &[0x80, 0x00, 0x00, 0x01],
        ))),

        flags: Some(ParamFlags {
            require_rpc_password: true,
            mining_requires_peers: false,
            default_consistency_checks: false,
            require_standard: false,
            mine_blocks_on_demand: false,
            skip_proof_of_work_check: false,
            testnet_to_be_deprecated_field_rpc: true,
            headers_first_syncing_active: false,
        }),

        pool_max_transactions: Some(2),
        spork_key: Some(
            "0421838CC1407E7B8C0C5F2379DF7EBD395181949CFA55124939B4980D5054A7926F88E3059921A50F0F81C5195E882D9A414EA0835BB89C9BB061511B9F132B31"
                .to_string(),
        ),
        obfuscation_pool_dummy_address: Some("y57cqfGRkekRyDRNeJiLtYVEbvhXrNbmox".to_string()),
        start_masternode_payments: Some(1568849852),
        ..Default::default()
    }
}

/// Applied on top of the testnet parameters
pub fn regtest_overrides() -> ParamOverrides {
    ParamOverrides {
        net: Some(NetworkType::Regtest),
        network_id: Some(NetworkType::Regtest.network_id()),
        message_start: Some([0xa1, 0xcf, 0x7e, 0xac]),
        start_work: Some(Uint256::MAX >> 20),
        enforce_block_upgrade_majority: Some(750),
        reject_block_outdated_majority: Some(950),
        to_check_block_upgrade_majority: Some(1000),
        miner_threads: Some(1),
        target_spacing: Some(60),
        pow_limit: Some(TESTNET_POW_LIMIT),
        genesis_time: Some(1568849852),
        genesis_bits: Some(0x207fffff),
        genesis_nonce: Some(1),
        default_port: Some(37772),
        checkpoints: Some(vec![]),
        checkpoint_data: Some(REGTEST_CHECKPOINT_DATA),
        fixed_seeds: Some(vec![]),
        dns_seeds: Some(vec![]),
        flags: Some(ParamFlags {
            require_rpc_password: false,
            mining_requires_peers: false,
            default_consistency_checks: true,
            require_standard: false,
            mine_blocks_on_demand: true,
            skip_proof_of_work_check: false,
            testnet_to_be_deprecated_field_rpc: false,
            headers_first_syncing_active: false,
        }),
        ..Default::default()
    }
}

/// Applied on top of the mainnet parameters. The unit test network keeps the mainnet
/// genesis block and checkpoints.
pub fn unittest_overrides() -> ParamOverrides {
    ParamOverrides {
        net: Some(NetworkType::Unittest),
        network_id: Some(NetworkType::Unittest.network_id()),
        message_start: Some([0xe5, 0xd4, 0xc3, 0xb2]),
        default_port: Some(51478),
        fixed_seeds: Some(vec![]),
        dns_seeds: Some(vec![]),
        flags: Some(ParamFlags {
            require_rpc_password: false,
            mining_requires_peers: false,
            default_consistency_checks: true,
            require_standard: true,
            mine_blocks_on_demand: true,
            skip_proof_of_work_check: false,
            testnet_to_be_deprecated_field_rpc: false,
            headers_first_syncing_active: false,
        }),
        ..Default::default()
    }
}
