use super::constants::seeds::ONE_WEEK_SECONDS;
use likr_core::time::unix_now_secs;
use likr_utils::networking::{IpAddress, NetAddress};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A compact fixed seed: an IPv6 (or IPv4-mapped) address and a port
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec6 {
    pub const fn new(addr: [u8; 16], port: u16) -> Self {
        Self { addr, port }
    }

    pub fn net_address(&self) -> NetAddress {
        NetAddress::new(IpAddress::from_ipv6_octets(self.addr), self.port)
    }
}

/// A DNS seed, resolved at runtime by the networking layer
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DnsSeed {
    pub name: String,
    pub host: String,
}

impl DnsSeed {
    pub fn new(name: impl Into<String>, host: impl Into<String>) -> Self {
        Self { name: name.into(), host: host.into() }
    }
}

/// A bootstrap peer stamped with the time it was presumably last seen (unix seconds)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeerAddress {
    pub address: NetAddress,
    pub last_seen: u64,
}

/// Converts fixed seeds into peer addresses whose `last_seen` is drawn uniformly from
/// `(now - 2 weeks, now - 1 week]`.
///
/// A node only needs one or two seeds: once connected it learns fresher peers, so the
/// seeds are made to look older than any address gossiped later.
pub fn convert_seeds<R: Rng>(seeds: &[SeedSpec6], now: u64, rng: &mut R) -> Vec<PeerAddress> {
    seeds
        .iter()
        .map(|seed| PeerAddress {
            address: seed.net_address(),
            last_seen: now.saturating_sub(rng.gen_range(0..ONE_WEEK_SECONDS)).saturating_sub(ONE_WEEK_SECONDS),
        })
        .collect()
}

/// [`convert_seeds`] using the system clock and the thread-local RNG
pub fn convert_seeds_now(seeds: &[SeedSpec6]) -> Vec<PeerAddress> {
    convert_seeds(seeds, unix_now_secs(), &mut rand::thread_rng())
}
