//! Symmetric algorithm tags and the key size table
//!
//! Every construction path consults [`SymmetricAlgorithm::check_key_size`]
//! before touching the random source or a KDF.

use crate::bits_macro::BitSize;
use crate::error::{KeyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Algorithm a piece of key material is valid for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymmetricAlgorithm {
    /// AES with a 128 or 256 bit key
    #[serde(rename = "AES")]
    Aes,
    /// HMAC-SHA1 with any whole-byte, non-empty key
    #[serde(rename = "HMAC-SHA1")]
    HmacSha1,
}

impl SymmetricAlgorithm {
    /// Legal AES key sizes in bits. AES-192 is intentionally absent.
    pub const AES_KEY_SIZES: [u32; 2] = [128, 256];

    /// SHA-1 output width, the natural HMAC-SHA1 key size
    pub const HMAC_SHA1_OUTPUT_BITS: u32 = 160;

    /// Stable display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aes => "AES",
            Self::HmacSha1 => "HMAC-SHA1",
        }
    }

    /// Size to use when the caller has no preference
    #[must_use]
    pub const fn recommended_key_size(self) -> BitSize {
        match self {
            Self::Aes => BitSize::new(256),
            Self::HmacSha1 => BitSize::new(Self::HMAC_SHA1_OUTPUT_BITS),
        }
    }

    /// Whether `size` is a legal key size for this algorithm
    #[must_use]
    pub fn is_valid_key_size(self, size: BitSize) -> bool {
        match self {
            Self::Aes => Self::AES_KEY_SIZES.contains(&size.bits),
            Self::HmacSha1 => size.bits != 0 && size.is_byte_aligned(),
        }
    }

    /// Validate `size` and return the key length in bytes
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::UnsupportedKeySize`] if the size is not legal for
    /// this algorithm.
    pub fn check_key_size(self, size: BitSize) -> Result<usize> {
        if self.is_valid_key_size(size) {
            Ok(size.to_bytes())
        } else {
            Err(KeyError::unsupported_size(self, size.bits))
        }
    }

    /// Validate the length of raw key bytes handed to import
    ///
    /// Only AES lengths are checked against the size table. HMAC-SHA1 accepts
    /// any non-empty key.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::UnsupportedKeySize`] for an AES key that is not 16
    /// or 32 bytes long, and [`KeyError::EmptyKey`] for an empty HMAC-SHA1 key.
    pub fn check_import_len(self, len: usize) -> Result<()> {
        match self {
            Self::Aes => match BitSize::from_bytes(len) {
                Some(size) if self.is_valid_key_size(size) => Ok(()),
                _ => Err(KeyError::unsupported_size(
                    self,
                    u64::try_from(len).unwrap_or(u64::MAX).saturating_mul(8),
                )),
            },
            Self::HmacSha1 if len == 0 => Err(KeyError::EmptyKey { algorithm: self }),
            Self::HmacSha1 => Ok(()),
        }
    }
}

impl fmt::Display for SymmetricAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
