//! Core Key Derivation Implementation
//!
//! PBKDF2 and scrypt derivation into zeroizing buffers. Parameter checks run
//! before any allocation, so rejected inputs never reach a KDF.

use super::config::{KdfParams, Pbkdf2Params, ScryptParams};
use crate::api::key_generator::core_types::SecureKeyBuffer;
use crate::api::key_material::trace_construction;
use crate::{BitSize, KeyError, KeyMaterial, Result, SymmetricAlgorithm};
use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use sha2::Sha256;

/// Output length handed to `scrypt::Params`; the real length is taken from
/// the output buffer
const SCRYPT_PARAMS_LEN: usize = 32;

#[derive(Debug, Clone, Copy)]
enum Pbkdf2Hash {
    Sha256,
    Sha1,
}

impl KeyMaterial {
    /// Derive a key with PBKDF2-HMAC-SHA256
    ///
    /// Identical inputs always produce identical key bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `size` is not legal for `algorithm`
    /// - `iterations` is zero
    pub fn derive_pbkdf2_sha256(
        algorithm: SymmetricAlgorithm,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        size: BitSize,
    ) -> Result<Self> {
        trace_construction(
            "derive_pbkdf2_sha256",
            algorithm,
            derive_pbkdf2(Pbkdf2Hash::Sha256, algorithm, password, salt, iterations, size),
        )
    }

    /// Derive a key with PBKDF2-HMAC-SHA1
    ///
    /// # Errors
    ///
    /// Same conditions as [`derive_pbkdf2_sha256`](Self::derive_pbkdf2_sha256).
    pub fn derive_pbkdf2_sha1(
        algorithm: SymmetricAlgorithm,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        size: BitSize,
    ) -> Result<Self> {
        trace_construction(
            "derive_pbkdf2_sha1",
            algorithm,
            derive_pbkdf2(Pbkdf2Hash::Sha1, algorithm, password, salt, iterations, size),
        )
    }

    /// Derive a key with scrypt
    ///
    /// The memory ceiling in `params` is enforced before the KDF allocates
    /// anything.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `size` is not legal for `algorithm`
    /// - the scrypt parameters are malformed
    /// - the derivation would exceed the memory ceiling
    /// - the scrypt primitive rejects the parameters or output length
    pub fn derive_scrypt(
        algorithm: SymmetricAlgorithm,
        password: &[u8],
        salt: &[u8],
        params: &ScryptParams,
        size: BitSize,
    ) -> Result<Self> {
        trace_construction(
            "derive_scrypt",
            algorithm,
            derive_scrypt_internal(algorithm, password, salt, params, size),
        )
    }

    /// Derive a key with the KDF selected by `params`
    ///
    /// # Errors
    ///
    /// See the KDF-specific constructors.
    pub fn derive(
        algorithm: SymmetricAlgorithm,
        password: &[u8],
        salt: &[u8],
        params: &KdfParams,
        size: BitSize,
    ) -> Result<Self> {
        match params {
            KdfParams::Pbkdf2Sha256(Pbkdf2Params { iterations }) => {
                Self::derive_pbkdf2_sha256(algorithm, password, salt, *iterations, size)
            }
            KdfParams::Pbkdf2Sha1(Pbkdf2Params { iterations }) => {
                Self::derive_pbkdf2_sha1(algorithm, password, salt, *iterations, size)
            }
            KdfParams::Scrypt(scrypt_params) => {
                Self::derive_scrypt(algorithm, password, salt, scrypt_params, size)
            }
        }
    }
}

fn derive_pbkdf2(
    hash: Pbkdf2Hash,
    algorithm: SymmetricAlgorithm,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    size: BitSize,
) -> Result<KeyMaterial> {
    let size_bytes = algorithm.check_key_size(size)?;
    Pbkdf2Params { iterations }.validate()?;

    let mut buffer = SecureKeyBuffer::new(size_bytes);
    match hash {
        Pbkdf2Hash::Sha256 => pbkdf2_hmac::<Sha256>(password, salt, iterations, buffer.as_mut_slice()),
        Pbkdf2Hash::Sha1 => pbkdf2_hmac::<Sha1>(password, salt, iterations, buffer.as_mut_slice()),
    }

    Ok(KeyMaterial::from_buffer(algorithm, buffer))
}

fn derive_scrypt_internal(
    algorithm: SymmetricAlgorithm,
    password: &[u8],
    salt: &[u8],
    params: &ScryptParams,
    size: BitSize,
) -> Result<KeyMaterial> {
    let size_bytes = algorithm.check_key_size(size)?;
    params.validate()?;

    let scrypt_params = scrypt::Params::new(
        params.log_cost(),
        params.block_size,
        params.parallelization,
        SCRYPT_PARAMS_LEN,
    )
    .map_err(|e| KeyError::InvalidScryptParams(e.to_string()))?;

    let mut buffer = SecureKeyBuffer::new(size_bytes);
    scrypt::scrypt(password, salt, &scrypt_params, buffer.as_mut_slice())
        .map_err(|e| KeyError::KeyDerivation(format!("scrypt derivation failed: {e}")))?;

    Ok(KeyMaterial::from_buffer(algorithm, buffer))
}
