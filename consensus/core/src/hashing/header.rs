use super::WriterExtensions;
use crate::header::Header;
use likr_hashes::{GenesisHasher, Hash};

pub const HEADER_SIZE: usize = 80;

/// Returns the 80-byte header serialization hashed for proof of work
pub fn serialize(header: &Header) -> Vec<u8> {
    let mut writer = Vec::with_capacity(HEADER_SIZE);
    writer
        .write_bytes(header.version.to_le_bytes())
        .write_bytes(header.hash_prev_block)
        .write_bytes(header.hash_merkle_root)
        .write_bytes(header.time.to_le_bytes())
        .write_bytes(header.bits.to_le_bytes())
        .write_bytes(header.nonce.to_le_bytes());
    writer
}

/// Returns the header hash computed by `hasher`
pub fn hash(header: &Header, hasher: &dyn GenesisHasher) -> Hash {
    hasher.block_hash(&serialize(header))
}

#[cfg(test)]
mod tests {
    use super::*;
    use likr_hashes::ZERO_HASH;

    #[test]
    fn test_serialize_layout() {
        let merkle = Hash::from_bytes([9; 32]);
        let header = Header::new(1, ZERO_HASH, merkle, 0x01020304, 0x1e0ffff0, 3360119);
        let bytes = serialize(&header);
        assert_eq!(bytes.len(), HEADER_SIZE);
        assert_eq!(&bytes[..4], &[1, 0, 0, 0]);
        assert_eq!(&bytes[4..36], &[0u8; 32]);
        assert_eq!(&bytes[36..68], &[9u8; 32]);
        assert_eq!(&bytes[68..72], &[4, 3, 2, 1]);
        assert_eq!(&bytes[72..76], &[0xf0, 0xff, 0x0f, 0x1e]);
        assert_eq!(&bytes[76..], &[0x77, 0x45, 0x33, 0x00]);
    }
}
