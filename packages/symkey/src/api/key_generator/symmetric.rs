//! Random generation and raw import

use super::core_types::SecureKeyBuffer;
use crate::api::key_material::trace_construction;
use crate::entropy::{OsEntropy, RandomSource};
use crate::{BitSize, KeyError, KeyMaterial, Result, SymmetricAlgorithm};

impl KeyMaterial {
    /// Generate a fresh AES key from operating system entropy
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `algorithm` is not AES (random generation is AES-only)
    /// - `size` is not 128 or 256 bits
    /// - the operating system RNG fails
    pub fn generate_random(algorithm: SymmetricAlgorithm, size: BitSize) -> Result<Self> {
        Self::generate_random_with(algorithm, size, &mut OsEntropy)
    }

    /// Generate a fresh AES key from `rng`
    ///
    /// # Errors
    ///
    /// Same conditions as [`generate_random`](Self::generate_random), with
    /// [`KeyError::RandomGeneration`] surfaced from `rng`. Bytes the source
    /// wrote before failing are wiped, never returned.
    pub fn generate_random_with(
        algorithm: SymmetricAlgorithm,
        size: BitSize,
        rng: &mut impl RandomSource,
    ) -> Result<Self> {
        trace_construction(
            "generate_random",
            algorithm,
            generate_internal(algorithm, size, rng),
        )
    }

    /// Take a copy of `raw` as key material
    ///
    /// AES keys must be 16 or 32 bytes. HMAC-SHA1 keys may have any non-empty
    /// length and skip the bit size table used by the derivation paths. The
    /// caller's buffer is left untouched and remains the caller's to wipe.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::UnsupportedKeySize`] for a wrongly sized AES key
    /// and [`KeyError::EmptyKey`] for an empty HMAC-SHA1 key.
    pub fn import(algorithm: SymmetricAlgorithm, raw: &[u8]) -> Result<Self> {
        let result = algorithm
            .check_import_len(raw.len())
            .map(|()| Self::from_buffer(algorithm, SecureKeyBuffer::from_slice(raw)));
        trace_construction("import", algorithm, result)
    }
}

fn generate_internal(
    algorithm: SymmetricAlgorithm,
    size: BitSize,
    rng: &mut impl RandomSource,
) -> Result<KeyMaterial> {
    match algorithm {
        SymmetricAlgorithm::Aes => {}
        SymmetricAlgorithm::HmacSha1 => {
            return Err(KeyError::UnsupportedAlgorithm {
                algorithm,
                operation: "random generation",
            });
        }
    }

    let size_bytes = algorithm.check_key_size(size)?;
    let buffer = SecureKeyBuffer::new(size_bytes).fill_secure_random(rng)?;
    Ok(KeyMaterial::from_buffer(algorithm, buffer))
}
