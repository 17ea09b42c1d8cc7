mod hashers;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Debug, Display, Formatter};
use std::str::{self, FromStr};

pub use hashers::*;

pub const HASH_SIZE: usize = 32;

pub const ZERO_HASH: Hash = Hash([0; HASH_SIZE]);

/// A 32-byte digest stored in internal byte order.
///
/// The textual form is the byte-reversed hex string used by block explorers, so the
/// proof-of-work leading zeros of a block hash appear at the front.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Default, PartialOrd, Ord, BorshSerialize, BorshDeserialize)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    #[inline(always)]
    pub const fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }

    #[inline(always)]
    pub const fn as_bytes(self) -> [u8; HASH_SIZE] {
        self.0
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// # Panics
    /// Panics if `bytes` length is not exactly `HASH_SIZE`.
    #[inline(always)]
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self(<[u8; HASH_SIZE]>::try_from(bytes).expect("Slice must have the length of Hash"))
    }

    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        *self == ZERO_HASH
    }
}

impl Display for Hash {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        let mut hex = [0u8; HASH_SIZE * 2];
        faster_hex::hex_encode(&reversed, &mut hex).map_err(|_| std::fmt::Error)?;
        f.write_str(str::from_utf8(&hex).map_err(|_| std::fmt::Error)?)
    }
}

impl Debug for Hash {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl FromStr for Hash {
    type Err = faster_hex::Error;

    fn from_str(hash_str: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; HASH_SIZE];
        faster_hex::hex_decode(hash_str.as_bytes(), &mut bytes)?;
        bytes.reverse();
        Ok(Hash(bytes))
    }
}

impl From<[u8; HASH_SIZE]> for Hash {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            Serialize::serialize(&self.0, serializer)
        }
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = <std::borrow::Cow<'de, str> as Deserialize>::deserialize(deserializer)?;
            Hash::from_str(&s).map_err(serde::de::Error::custom)
        } else {
            <[u8; HASH_SIZE] as Deserialize>::deserialize(deserializer).map(Hash)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Hash;
    use std::str::FromStr;

    #[test]
    fn test_hash_basics() {
        let hash_str = "000002ee9128fe4cfcb56d6de1369b5973e45566bdd89da60ea8ed4ff48d7dfe";
        let hash = Hash::from_str(hash_str).unwrap();
        assert_eq!(hash_str, hash.to_string());
        // Leading zeros of the display form live at the end of the internal byte order
        assert_eq!(&hash.as_bytes()[29..], &[0x02, 0x00, 0x00]);
        assert_eq!(hash.as_bytes()[0], 0xfe);

        let hash2 = Hash::from_str("000002ee9128fe4cfcb56d6de1369b5973e45566bdd89da60ea8ed4ff48d7dff").unwrap();
        assert_ne!(hash, hash2);

        let short_str = "000002ee9128fe4cfcb56d6de1369b5973e45566bdd89da60ea8ed4ff48d7d";
        assert!(Hash::from_str(short_str).is_err());
        assert!(Hash::from_str(&"g".repeat(64)).is_err());
    }

    #[test]
    fn test_hash_serde() {
        let hash = Hash::from_str("a948ec1a3be60764579423c3daea7778c3f7e5d537f8141ae3d65f90250273e2").unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, "\"a948ec1a3be60764579423c3daea7778c3f7e5d537f8141ae3d65f90250273e2\"");
        assert_eq!(serde_json::from_str::<Hash>(&json).unwrap(), hash);

        let bin = bincode::serialize(&hash).unwrap();
        assert_eq!(bin, hash.as_bytes());
        assert_eq!(bincode::deserialize::<Hash>(&bin).unwrap(), hash);

        let borsh_bin = borsh::to_vec(&hash).unwrap();
        assert_eq!(borsh::from_slice::<Hash>(&borsh_bin).unwrap(), hash);
    }
}
