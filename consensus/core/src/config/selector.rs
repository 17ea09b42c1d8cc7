use super::{params::Params, registry::Registry};
use crate::network::NetworkType;
use likr_core::info;
use likr_hashes::GenesisHasher;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Binds a process to one network.
///
/// The registry is built once by [`Selector::init`], and a network is then selected once.
/// Reading the active parameters before a selection is a programming error and panics.
pub struct Selector {
    registry: OnceCell<Registry>,
    active: OnceCell<NetworkType>,
}

impl Default for Selector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector {
    pub const fn new() -> Self {
        Self { registry: OnceCell::new(), active: OnceCell::new() }
    }

    /// Builds the registry with `hasher` on first use. Later calls return the existing registry
    /// and ignore `hasher`.
    pub fn init(&self, hasher: &dyn GenesisHasher) -> &Registry {
        self.registry.get_or_init(|| Registry::new(hasher))
    }

    fn registry(&self) -> &Registry {
        self.registry.get().unwrap_or_else(|| panic!("network parameters used before the registry was initialized"))
    }

    /// Binds the process to `net`. Selecting the bound network again is a no-op, selecting a
    /// different one panics.
    pub fn select_network(&self, net: NetworkType) {
        let registry = self.registry();
        let active = *self.active.get_or_init(|| {
            info!("Using {} network parameters (genesis {})", net, registry.get(net).genesis_hash());
            net
        });
        if active != net {
            panic!("cannot select {} network parameters, {} is already selected", net, active);
        }
    }

    pub fn is_selected(&self) -> bool {
        self.active.get().is_some()
    }

    /// The parameters of the selected network
    pub fn active(&self) -> Arc<Params> {
        match self.active.get() {
            Some(net) => self.registry().get(*net),
            None => panic!("network parameters read before a network was selected"),
        }
    }

    /// Looks up the parameters of `net` regardless of the selection
    pub fn params_for(&self, net: NetworkType) -> Arc<Params> {
        self.registry().get(net)
    }

    /// Grants mutation of the unit test parameters. Panics unless the unit test network is selected.
    pub fn modifiable_params(&self) -> ModifiableParams<'_> {
        match self.active.get() {
            Some(NetworkType::Unittest) => ModifiableParams { registry: self.registry() },
            Some(net) => panic!("parameters of the {} network cannot be modified", net),
            None => panic!("network parameters modified before a network was selected"),
        }
    }
}

/// Setters over the unit test parameters. Each publishes a new snapshot differing only in
/// the named field; snapshots handed out earlier are unaffected.
pub struct ModifiableParams<'a> {
    registry: &'a Registry,
}

impl ModifiableParams<'_> {
    pub fn set_enforce_block_upgrade_majority(&self, value: u32) {
        self.registry.update_unittest(|p| p.enforce_block_upgrade_majority = value);
    }

    pub fn set_reject_block_outdated_majority(&self, value: u32) {
        self.registry.update_unittest(|p| p.reject_block_outdated_majority = value);
    }

    pub fn set_to_check_block_upgrade_majority(&self, value: u32) {
        self.registry.update_unittest(|p| p.to_check_block_upgrade_majority = value);
    }

    pub fn set_default_consistency_checks(&self, value: bool) {
        self.registry.update_unittest(|p| p.flags.default_consistency_checks = value);
    }

    pub fn set_skip_proof_of_work_check(&self, value: bool) {
        self.registry.update_unittest(|p| p.flags.skip_proof_of_work_check = value);
    }
}

static SELECTOR: Selector = Selector::new();

/// Builds the process-wide registry. Must run before any other function of this module.
pub fn init_params(hasher: &dyn GenesisHasher) {
    SELECTOR.init(hasher);
}

pub fn select_params(net: NetworkType) {
    SELECTOR.select_network(net)
}

pub fn is_selected() -> bool {
    SELECTOR.is_selected()
}

/// The parameters of the network selected for this process
pub fn params() -> Arc<Params> {
    SELECTOR.active()
}

pub fn params_for(net: NetworkType) -> Arc<Params> {
    SELECTOR.params_for(net)
}

pub fn modifiable_params() -> ModifiableParams<'static> {
    SELECTOR.modifiable_params()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::params::ParamFlags;
    use crate::testutils::genesis::RecordedGenesisHasher;

    fn selector() -> Selector {
        let selector = Selector::new();
        selector.init(&RecordedGenesisHasher);
        selector
    }

    #[test]
    #[should_panic(expected = "before a network was selected")]
    fn test_active_before_select() {
        selector().active();
    }

    #[test]
    #[should_panic(expected = "before the registry was initialized")]
    fn test_select_before_init() {
        Selector::new().select_network(NetworkType::Mainnet);
    }

    #[test]
    fn test_select_is_idempotent() {
        let selector = selector();
        assert!(!selector.is_selected());
        selector.select_network(NetworkType::Testnet);
        selector.select_network(NetworkType::Testnet);
        assert!(selector.is_selected());
        assert_eq!(selector.active().net, NetworkType::Testnet);
        assert!(Arc::ptr_eq(&selector.active(), &selector.params_for(NetworkType::Testnet)));
    }

    #[test]
    #[should_panic(expected = "regtest is already selected")]
    fn test_reselect_other_network() {
        let selector = selector();
        selector.select_network(NetworkType::Regtest);
        selector.select_network(NetworkType::Mainnet);
    }

    #[test]
    fn test_params_for_ignores_selection() {
        let selector = selector();
        selector.select_network(NetworkType::Regtest);
        for net in NetworkType::iter() {
            assert_eq!(selector.params_for(net).net, net);
        }
    }

    #[test]
    fn test_capability_denied_outside_unittest() {
        for net in [NetworkType::Mainnet, NetworkType::Testnet, NetworkType::Regtest] {
            let selector = selector();
            selector.select_network(net);
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                selector.modifiable_params();
            }));
            assert!(result.is_err(), "{} granted the capability", net);
        }
    }

    #[test]
    #[should_panic(expected = "modified before a network was selected")]
    fn test_capability_before_select() {
        selector().modifiable_params();
    }

    #[test]
    fn test_capability_mutates_one_field() {
        let selector = selector();
        selector.select_network(NetworkType::Unittest);
        let original = selector.active();
        let modifiable = selector.modifiable_params();

        // Each setter changes its own field and leaves the rest of the snapshot intact
        let before = selector.active();
        modifiable.set_enforce_block_upgrade_majority(11);
        let after = selector.active();
        assert_eq!(after.enforce_block_upgrade_majority, 11);
        assert_eq!(Params { enforce_block_upgrade_majority: before.enforce_block_upgrade_majority, ..Params::clone(&after) }, *before);

        let before = selector.active();
        modifiable.set_reject_block_outdated_majority(12);
        let after = selector.active();
        assert_eq!(after.reject_block_outdated_majority, 12);
        assert_eq!(Params { reject_block_outdated_majority: before.reject_block_outdated_majority, ..Params::clone(&after) }, *before);

        let before = selector.active();
        modifiable.set_to_check_block_upgrade_majority(13);
        let after = selector.active();
        assert_eq!(after.to_check_block_upgrade_majority, 13);
        assert_eq!(Params { to_check_block_upgrade_majority: before.to_check_block_upgrade_majority, ..Params::clone(&after) }, *before);

        let before = selector.active();
        modifiable.set_default_consistency_checks(false);
        let after = selector.active();
        assert!(!after.flags.default_consistency_checks);
        let flags = ParamFlags { default_consistency_checks: before.flags.default_consistency_checks, ..after.flags };
        assert_eq!(Params { flags, ..Params::clone(&after) }, *before);

        let before = selector.active();
        modifiable.set_skip_proof_of_work_check(true);
        let after = selector.active();
        assert!(after.flags.skip_proof_of_work_check);
        let flags = ParamFlags { skip_proof_of_work_check: before.flags.skip_proof_of_work_check, ..after.flags };
        assert_eq!(Params { flags, ..Params::clone(&after) }, *before);

        // Earlier snapshots stay untouched
        assert_eq!(original.enforce_block_upgrade_majority, 750);
        assert!(original.flags.default_consistency_checks);
        assert!(!original.flags.skip_proof_of_work_check);
        // Other networks are never affected
        assert!(!selector.params_for(NetworkType::Mainnet).flags.skip_proof_of_work_check);
    }
}
