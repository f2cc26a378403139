//! Key material container

use super::key_generator::core_types::SecureKeyBuffer;
use super::key_generator::derive::constant_time_compare;
use crate::{BitSize, Result, SymmetricAlgorithm, logging::LoggingTransformer};
use std::fmt;
use subtle::{Choice, ConstantTimeEq};

/// Raw symmetric key bytes tagged with the algorithm they are valid for
///
/// Instances only come out of the construction functions
/// ([`generate_random`](Self::generate_random),
/// [`derive_pbkdf2_sha256`](Self::derive_pbkdf2_sha256),
/// [`derive_pbkdf2_sha1`](Self::derive_pbkdf2_sha1),
/// [`derive_scrypt`](Self::derive_scrypt), [`import`](Self::import)) and are
/// never mutated afterwards. The bytes are overwritten with zeros when the
/// value is dropped. There is no `Clone`; use [`duplicate`](Self::duplicate)
/// when a second copy is really needed.
pub struct KeyMaterial {
    algorithm: SymmetricAlgorithm,
    bytes: SecureKeyBuffer,
}

impl KeyMaterial {
    pub(crate) fn from_buffer(algorithm: SymmetricAlgorithm, bytes: SecureKeyBuffer) -> Self {
        Self { algorithm, bytes }
    }

    /// Algorithm this key is valid for
    #[must_use]
    pub fn algorithm(&self) -> SymmetricAlgorithm {
        self.algorithm
    }

    /// Raw key bytes, borrowed for no longer than the key lives
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    /// Key length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false` for a key obtained from a construction function
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.len() == 0
    }

    /// Key length in bits, `None` if it does not fit a [`BitSize`]
    #[must_use]
    pub fn size(&self) -> Option<BitSize> {
        BitSize::from_bytes(self.len())
    }

    /// Explicit deep copy into a fresh zeroizing buffer
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self::from_buffer(self.algorithm, SecureKeyBuffer::from_slice(self.bytes()))
    }
}

impl ConstantTimeEq for KeyMaterial {
    fn ct_eq(&self, other: &Self) -> Choice {
        let same_algorithm = Choice::from(u8::from(self.algorithm == other.algorithm));
        same_algorithm & Choice::from(u8::from(constant_time_compare(self.bytes(), other.bytes())))
    }
}

impl PartialEq for KeyMaterial {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for KeyMaterial {}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("algorithm", &self.algorithm)
            .field("len", &self.len())
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Report the outcome of a construction path and pass it through
pub(crate) fn trace_construction(
    operation: &'static str,
    algorithm: SymmetricAlgorithm,
    result: Result<KeyMaterial>,
) -> Result<KeyMaterial> {
    match &result {
        Ok(key) => LoggingTransformer::log_key_created(operation, algorithm, key.len()),
        Err(e) => LoggingTransformer::log_key_failure(operation, algorithm, e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aes_key(fill: u8) -> KeyMaterial {
        KeyMaterial::from_buffer(SymmetricAlgorithm::Aes, SecureKeyBuffer::from_slice(&[fill; 16]))
    }

    #[test]
    fn test_debug_is_redacted() {
        let rendered = format!("{:?}", aes_key(0x5A));
        assert!(rendered.contains("REDACTED"));
        assert!(rendered.contains("Aes"));
        assert!(!rendered.contains("90"));
    }

    #[test]
    fn test_duplicate_is_independent_and_equal() {
        let key = aes_key(7);
        let copy = key.duplicate();
        assert_eq!(key, copy);
        assert_ne!(key.bytes().as_ptr(), copy.bytes().as_ptr());
    }

    #[test]
    fn test_equality_checks_algorithm() {
        let aes = aes_key(1);
        let hmac = KeyMaterial::from_buffer(
            SymmetricAlgorithm::HmacSha1,
            SecureKeyBuffer::from_slice(&[1; 16]),
        );
        assert_ne!(aes, hmac);
        assert_ne!(aes, aes_key(2));
    }

    #[test]
    fn test_size_reports_bits() {
        assert_eq!(aes_key(0).size(), Some(BitSize::new(128)));
    }
}
