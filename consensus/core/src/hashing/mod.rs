pub mod header;
pub mod tx;

/// Helpers for writing the legacy wire encoding into a byte buffer
pub trait WriterExtensions {
    /// Writes a length using the variable-size "compact size" encoding
    fn write_compact_size(&mut self, len: usize) -> &mut Self;

    /// Writes a length-prefixed byte sequence
    fn write_var_bytes(&mut self, bytes: &[u8]) -> &mut Self;

    fn write_bytes<A: AsRef<[u8]>>(&mut self, bytes: A) -> &mut Self;
}

impl WriterExtensions for Vec<u8> {
    #[inline(always)]
    fn write_compact_size(&mut self, len: usize) -> &mut Self {
        let len = len as u64;
        match len {
            0..0xfd => self.push(len as u8),
            0xfd..=0xffff => {
                self.push(0xfd);
                self.extend_from_slice(&(len as u16).to_le_bytes());
            }
            0x10000..=0xffff_ffff => {
                self.push(0xfe);
                self.extend_from_slice(&(len as u32).to_le_bytes());
            }
            _ => {
                self.push(0xff);
                self.extend_from_slice(&len.to_le_bytes());
            }
        }
        self
    }

    #[inline(always)]
    fn write_var_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.write_compact_size(bytes.len()).write_bytes(bytes)
    }

    #[inline(always)]
    fn write_bytes<A: AsRef<[u8]>>(&mut self, bytes: A) -> &mut Self {
        self.extend_from_slice(bytes.as_ref());
        self
    }
}
