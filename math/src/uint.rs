const LIMBS: usize = 4;

/// Little-endian 256-bit unsigned integer, used for proof-of-work targets
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Uint256(pub [u64; LIMBS]);

impl Uint256 {
    pub const ZERO: Self = Uint256([0; LIMBS]);
    pub const MAX: Self = Uint256([u64::MAX; LIMBS]);
    pub const BITS: u32 = LIMBS as u32 * u64::BITS;
    pub const BYTES: usize = LIMBS * core::mem::size_of::<u64>();

    #[inline]
    pub const fn from_u64(n: u64) -> Self {
        Uint256([n, 0, 0, 0])
    }

    #[inline]
    pub fn as_u64(self) -> u64 {
        self.0[0]
    }

    #[inline(always)]
    pub fn is_zero(self) -> bool {
        self.0.iter().all(|&a| a == 0)
    }

    /// Return the least number of bits needed to represent the number
    #[inline(always)]
    pub fn bits(&self) -> u32 {
        for (i, &word) in self.0.iter().enumerate().rev() {
            if word != 0 {
                return u64::BITS * (i as u32 + 1) - word.leading_zeros();
            }
        }
        0
    }

    /// Shift right usable in `const` contexts. Shifts of 256 bits or more yield zero.
    pub const fn const_shr(self, s: u32) -> Self {
        if s >= Self::BITS {
            return Self::ZERO;
        }
        let mut ret = [0u64; LIMBS];
        let words = (s / 64) as usize;
        let shift = s % 64;
        let mut i = words;
        while i < LIMBS {
            ret[i - words] = self.0[i] >> shift;
            if shift > 0 && i + 1 < LIMBS {
                ret[i - words] |= self.0[i + 1] << (64 - shift);
            }
            i += 1;
        }
        Uint256(ret)
    }

    /// Shift left, dropping bits pushed out of the 256-bit range.
    pub const fn const_shl(self, s: u32) -> Self {
        if s >= Self::BITS {
            return Self::ZERO;
        }
        let mut ret = [0u64; LIMBS];
        let words = (s / 64) as usize;
        let shift = s % 64;
        let mut i = words;
        while i < LIMBS {
            ret[i] = self.0[i - words] << shift;
            if shift > 0 && i > words {
                ret[i] |= self.0[i - words - 1] >> (64 - shift);
            }
            i += 1;
        }
        Uint256(ret)
    }

    pub fn to_le_bytes(self) -> [u8; Self::BYTES] {
        let mut out = [0u8; Self::BYTES];
        for (chunk, word) in out.chunks_exact_mut(8).zip(self.0) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }

    pub fn to_be_bytes(self) -> [u8; Self::BYTES] {
        let mut out = self.to_le_bytes();
        out.reverse();
        out
    }

    /// Decodes the compact ("nBits") representation of a target.
    ///
    /// The sign bit is ignored; negative or overflowing encodings are never produced by
    /// [`Self::compact_target_bits`].
    pub fn from_compact_target_bits(bits: u32) -> Self {
        let size = bits >> 24;
        let word = (bits & 0x007f_ffff) as u64;
        if size <= 3 {
            Self::from_u64(word >> (8 * (3 - size)))
        } else {
            Self::from_u64(word).const_shl(8 * (size - 3))
        }
    }

    /// Encodes the target into its compact ("nBits") representation
    pub fn compact_target_bits(self) -> u32 {
        let mut size = self.bits().div_ceil(8);
        let mut compact = if size <= 3 {
            (self.as_u64() << (8 * (3 - size))) as u32
        } else {
            self.const_shr(8 * (size - 3)).as_u64() as u32
        };
        // The 0x00800000 bit denotes the sign, so shift the mantissa if it is already set
        if compact & 0x0080_0000 != 0 {
            compact >>= 8;
            size += 1;
        }
        compact | (size << 24)
    }
}

impl PartialOrd for Uint256 {
    #[inline]
    fn partial_cmp(&self, other: &Uint256) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Uint256 {
    #[inline]
    fn cmp(&self, other: &Uint256) -> core::cmp::Ordering {
        // Limbs are little-endian, so compare from the most significant one
        Iterator::cmp(self.0.iter().rev(), other.0.iter().rev())
    }
}

impl core::ops::Not for Uint256 {
    type Output = Uint256;

    #[inline]
    fn not(mut self) -> Uint256 {
        self.0.iter_mut().for_each(|a| *a = !*a);
        self
    }
}

impl core::ops::Shr<u32> for Uint256 {
    type Output = Uint256;

    #[inline]
    fn shr(self, shift: u32) -> Uint256 {
        self.const_shr(shift)
    }
}

impl core::ops::Shl<u32> for Uint256 {
    type Output = Uint256;

    #[inline]
    fn shl(self, shift: u32) -> Uint256 {
        self.const_shl(shift)
    }
}

impl From<u64> for Uint256 {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

impl core::fmt::LowerHex for Uint256 {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut hex = [0u8; Self::BYTES * 2];
        let bytes = self.to_be_bytes();
        faster_hex::hex_encode(&bytes, &mut hex).map_err(|_| core::fmt::Error)?;
        let first_non_zero = hex.iter().position(|&x| x != b'0').unwrap_or(hex.len() - 1);
        let str = core::str::from_utf8(&hex[first_non_zero..]).map_err(|_| core::fmt::Error)?;
        f.pad_integral(true, "0x", str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shifts() {
        let limit = Uint256::MAX >> 20;
        assert_eq!(limit.bits(), 236);
        assert_eq!(limit.0[3], u64::MAX >> 20);
        assert_eq!(limit.0[0], u64::MAX);

        assert_eq!(Uint256::from_u64(1) << 255 >> 255, Uint256::from_u64(1));
        assert_eq!(Uint256::from_u64(1) << 256, Uint256::ZERO);
        assert_eq!(Uint256::MAX >> 256, Uint256::ZERO);
        assert_eq!(!Uint256::ZERO, Uint256::MAX);
        assert_eq!(Uint256::from_u64(0xff) << 68, Uint256([0, 0xff0, 0, 0]));
    }

    #[test]
    fn test_ordering() {
        assert!(Uint256::MAX >> 1 > Uint256::MAX >> 20);
        assert!(Uint256([0, 0, 0, 1]) > Uint256([u64::MAX, u64::MAX, u64::MAX, 0]));
        assert!(Uint256::ZERO < Uint256::from_u64(1));
    }

    #[test]
    fn test_compact_target_bits() {
        let tests = [
            (Uint256::MAX >> 20, 0x1e0fffff),
            (Uint256::MAX >> 1, 0x207fffff),
            (Uint256::MAX >> 24, 0x1e00ffff),
            (Uint256::MAX >> 32, 0x1d00ffff),
            (Uint256::from_u64(0x80), 0x02008000),
            (Uint256::from_u64(0x12), 0x01120000),
            (Uint256::ZERO, 0),
        ];
        for (target, bits) in tests {
            assert_eq!(target.compact_target_bits(), bits, "compact of {:x}", target);
        }

        // Decoding truncates to the mantissa precision
        assert_eq!(Uint256::from_compact_target_bits(0x1e0ffff0), Uint256::from_u64(0x0ffff0) << 216);
        assert_eq!(Uint256::from_compact_target_bits(0x207fffff), Uint256::from_u64(0x7fffff) << 232);
        assert_eq!(Uint256::from_compact_target_bits(0x01120000), Uint256::from_u64(0x12));
        assert_eq!(Uint256::from_compact_target_bits(0x1d00ffff).compact_target_bits(), 0x1d00ffff);
    }

    #[test]
    fn test_hex() {
        assert_eq!(format!("{:x}", Uint256::from_u64(0xfffff)), "fffff");
        assert_eq!(format!("{:#x}", Uint256::ZERO), "0x0");
        assert_eq!(format!("{:x}", Uint256::MAX), "f".repeat(64));
        assert_eq!(format!("{:#x}", Uint256::MAX >> 236), "0xfffff");
    }

    #[test]
    fn test_bytes() {
        let value = Uint256([1, 2, 3, 4]);
        assert_eq!(value.to_le_bytes()[0], 1);
        assert_eq!(value.to_le_bytes()[24], 4);
        assert_eq!(value.to_be_bytes()[31], 1);
        assert_eq!(value.to_be_bytes()[7], 4);
    }
}
