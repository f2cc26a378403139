//! Bit size type for key length parameters

use std::fmt;

/// Type-safe bit size representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitSize {
    /// The number of bits
    pub bits: u32,
}

impl BitSize {
    /// Create a bit size
    #[must_use]
    pub const fn new(bits: u32) -> Self {
        Self { bits }
    }

    /// Bit size of a buffer holding `len` bytes, `None` if it does not fit in `u32`
    #[must_use]
    pub fn from_bytes(len: usize) -> Option<Self> {
        u32::try_from(len)
            .ok()
            .and_then(|len| len.checked_mul(8))
            .map(Self::new)
    }

    /// Convert to bytes, discarding any partial byte
    #[must_use]
    pub const fn to_bytes(&self) -> usize {
        (self.bits / 8) as usize
    }

    /// Whether the size is a whole number of bytes
    #[must_use]
    pub const fn is_byte_aligned(&self) -> bool {
        self.bits % 8 == 0
    }
}

impl From<u32> for BitSize {
    fn from(bits: u32) -> Self {
        Self::new(bits)
    }
}

impl fmt::Display for BitSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.bits)
    }
}

/// Extension trait for bit conversion
pub trait Bits {
    /// Convert to `BitSize`
    fn bits(self) -> BitSize;
}

impl Bits for u32 {
    fn bits(self) -> BitSize {
        BitSize { bits: self }
    }
}

impl Bits for usize {
    fn bits(self) -> BitSize {
        // Oversized values clamp to u32::MAX, which no algorithm accepts
        let bits = u32::try_from(self).unwrap_or(u32::MAX);
        BitSize { bits }
    }
}

impl Bits for i32 {
    fn bits(self) -> BitSize {
        // Negative sizes clamp to 0, which no algorithm accepts
        let bits = u32::try_from(self).unwrap_or(0);
        BitSize { bits }
    }
}
