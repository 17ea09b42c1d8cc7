use crate::Hash;
use sha2::{Digest, Sha256};

pub trait HasherBase {
    fn update<A: AsRef<[u8]>>(&mut self, data: A) -> &mut Self;
}

pub trait Hasher: HasherBase + Clone + Default {
    fn finalize(self) -> Hash;
    fn reset(&mut self);
    #[inline(always)]
    fn hash<A: AsRef<[u8]>>(data: A) -> Hash {
        let mut hasher = Self::default();
        hasher.update(data);
        hasher.finalize()
    }
}

/// SHA256 applied twice, as used for transaction ids and merkle nodes
#[derive(Clone, Default)]
pub struct Sha256d(Sha256);

impl HasherBase for Sha256d {
    #[inline(always)]
    fn update<A: AsRef<[u8]>>(&mut self, data: A) -> &mut Self {
        self.0.update(data.as_ref());
        self
    }
}

impl Hasher for Sha256d {
    #[inline(always)]
    fn finalize(self) -> Hash {
        let first = self.0.finalize();
        Hash::from_bytes(Sha256::digest(first).into())
    }

    #[inline(always)]
    fn reset(&mut self) {
        self.0 = Sha256::new();
    }
}

/// Hash functions consumed when deriving a genesis block's identity.
///
/// The node supplies its proof-of-work hash through `block_hash`; the transaction hash
/// doubles as the merkle root of a single-transaction block.
pub trait GenesisHasher: Send + Sync {
    fn transaction_hash(&self, serialized_tx: &[u8]) -> Hash;
    fn block_hash(&self, serialized_header: &[u8]) -> Hash;
}

/// Uses [`Sha256d`] for both transactions and headers
#[derive(Clone, Copy, Debug, Default)]
pub struct DoubleSha256Hasher;

impl GenesisHasher for DoubleSha256Hasher {
    fn transaction_hash(&self, serialized_tx: &[u8]) -> Hash {
        Sha256d::hash(serialized_tx)
    }

    fn block_hash(&self, serialized_header: &[u8]) -> Hash {
        Sha256d::hash(serialized_header)
    }
}
