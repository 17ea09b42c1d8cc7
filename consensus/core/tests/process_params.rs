//! Exercises the process-wide selector. Everything runs in a single test since the
//! selection can only be made once per process.

use likr_consensus_core::config::{self, NetworkArgs, Params, select_params_from_args};
use likr_consensus_core::network::NetworkType;
use likr_consensus_core::testutils::genesis::RecordedGenesisHasher;
use std::panic::catch_unwind;

#[test]
fn test_process_wide_selection() {
    let args = NetworkArgs::parse(["likrd", "--unittest", "--loglevel=info,likr_consensus_core=debug"]).unwrap();
    let _ = likr_core::log::init_logger(&args.log_level);

    // Nothing may be read before the registry exists
    assert!(catch_unwind(|| config::params_for(NetworkType::Mainnet)).is_err());

    config::init_params(&RecordedGenesisHasher);
    config::init_params(&RecordedGenesisHasher);
    assert!(!config::is_selected());
    assert!(catch_unwind(config::params).is_err());
    assert!(catch_unwind(|| {
        config::modifiable_params();
    })
    .is_err());

    let testnet = config::params_for(NetworkType::Testnet);
    assert_eq!(*testnet, Params::testnet(&RecordedGenesisHasher));

    assert_eq!(select_params_from_args(&args), Ok(NetworkType::Unittest));
    config::select_params(NetworkType::Unittest);
    assert!(config::is_selected());

    let before = config::params();
    assert_eq!(before.net, NetworkType::Unittest);
    assert_eq!(before.genesis_hash(), config::params_for(NetworkType::Mainnet).genesis_hash());

    config::modifiable_params().set_to_check_block_upgrade_majority(40);
    let after = config::params();
    assert_eq!(after.to_check_block_upgrade_majority, 40);
    assert_eq!(before.to_check_block_upgrade_majority, 1000);

    // A conflicting request fails before touching the selection
    let conflicting = NetworkArgs::parse(["likrd", "--testnet", "--unittest"]).unwrap();
    assert!(select_params_from_args(&conflicting).is_err());
    assert!(catch_unwind(|| config::select_params(NetworkType::Mainnet)).is_err());
    assert_eq!(config::params().net, NetworkType::Unittest);
}
