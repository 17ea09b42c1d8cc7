use super::params::Params;
use crate::network::NetworkType;
use arc_swap::ArcSwap;
use likr_hashes::GenesisHasher;
use std::sync::Arc;

/// The built parameter sets of every network.
///
/// Mainnet, testnet and regtest are immutable once built. The unit test set lives behind an
/// [`ArcSwap`] so that tests can publish modified snapshots of it.
pub struct Registry {
    mainnet: Arc<Params>,
    testnet: Arc<Params>,
    regtest: Arc<Params>,
    unittest: ArcSwap<Params>,
}

impl Registry {
    pub fn new(hasher: &dyn GenesisHasher) -> Self {
        Self {
            mainnet: Arc::new(Params::mainnet(hasher)),
            testnet: Arc::new(Params::testnet(hasher)),
            regtest: Arc::new(Params::regtest(hasher)),
            unittest: ArcSwap::from_pointee(Params::unittest(hasher)),
        }
    }

    /// Returns the current snapshot for `net`
    pub fn get(&self, net: NetworkType) -> Arc<Params> {
        match net {
            NetworkType::Mainnet => self.mainnet.clone(),
            NetworkType::Testnet => self.testnet.clone(),
            NetworkType::Regtest => self.regtest.clone(),
            NetworkType::Unittest => self.unittest.load_full(),
        }
    }

    /// Publishes a copy of the unit test snapshot with `f` applied
    pub(crate) fn update_unittest(&self, f: impl Fn(&mut Params)) {
        self.unittest.rcu(|current| {
            let mut next = Params::clone(current);
            f(&mut next);
            next
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::genesis::RecordedGenesisHasher;

    #[test]
    fn test_get_returns_shared_snapshots() {
        let registry = Registry::new(&RecordedGenesisHasher);
        for net in NetworkType::iter() {
            let a = registry.get(net);
            let b = registry.get(net);
            assert_eq!(a.net, net);
            assert!(Arc::ptr_eq(&a, &b));
        }
    }

    #[test]
    fn test_update_unittest() {
        let registry = Registry::new(&RecordedGenesisHasher);
        let before = registry.get(NetworkType::Unittest);
        registry.update_unittest(|p| p.miner_threads = 8);
        let after = registry.get(NetworkType::Unittest);
        assert_eq!(before.miner_threads, 0);
        assert_eq!(after.miner_threads, 8);
        assert_eq!(Params { miner_threads: 0, ..Params::clone(&after) }, *before);
    }
}
