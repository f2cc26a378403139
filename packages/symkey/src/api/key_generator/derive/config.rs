//! Key Derivation Function Configuration
//!
//! KDF parameter sets and presets. All types deserialize with `serde`, so a
//! parameter set can be kept in a configuration file next to the salt.

use crate::{KeyError, Result};
use serde::{Deserialize, Serialize};

/// Memory ceiling applied when [`ScryptParams::max_memory_bytes`] is zero (32 MiB)
pub const DEFAULT_SCRYPT_MAX_MEMORY: u64 = 32 * 1024 * 1024;

/// Upper bound on `parallelization * block_size` (2^30 - 1)
const SCRYPT_PR_MAX: u64 = (1 << 30) - 1;

/// Salsa20/8 block size used by scrypt's memory accounting
const SCRYPT_BLOCK_BYTES: u64 = 64;

/// PBKDF2 parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pbkdf2Params {
    /// Number of HMAC iterations, passed to PBKDF2 unmodified
    pub iterations: u32,
}

impl Pbkdf2Params {
    /// OWASP 2023 recommendation for PBKDF2-HMAC-SHA256
    #[must_use]
    pub const fn owasp_sha256() -> Self {
        Self {
            iterations: 600_000,
        }
    }

    /// OWASP 2023 recommendation for PBKDF2-HMAC-SHA1
    #[must_use]
    pub const fn owasp_sha1() -> Self {
        Self {
            iterations: 1_300_000,
        }
    }

    /// Cheap parameters for tests and low-value keys
    #[must_use]
    pub const fn fast() -> Self {
        Self { iterations: 1_000 }
    }

    /// Check the iteration count
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::InvalidIterations`] if `iterations` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(KeyError::InvalidIterations);
        }
        Ok(())
    }
}

impl Default for Pbkdf2Params {
    fn default() -> Self {
        Self::owasp_sha256()
    }
}

/// scrypt parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScryptParams {
    /// CPU/memory cost `N`, a power of two greater than one
    pub cost: u64,
    /// Block size `r`
    pub block_size: u32,
    /// Parallelization `p`
    pub parallelization: u32,
    /// Hard memory ceiling in bytes; zero selects [`DEFAULT_SCRYPT_MAX_MEMORY`]
    #[serde(default)]
    pub max_memory_bytes: u64,
}

impl ScryptParams {
    /// Parameters for interactive logins (N = 2^14, r = 8, p = 1, 32 MiB ceiling)
    #[must_use]
    pub const fn interactive() -> Self {
        Self {
            cost: 1 << 14,
            block_size: 8,
            parallelization: 1,
            max_memory_bytes: DEFAULT_SCRYPT_MAX_MEMORY,
        }
    }

    /// Parameters for long-lived secrets (N = 2^20, r = 8, p = 1, 2 GiB ceiling)
    #[must_use]
    pub const fn sensitive() -> Self {
        Self {
            cost: 1 << 20,
            block_size: 8,
            parallelization: 1,
            max_memory_bytes: 2 * 1024 * 1024 * 1024,
        }
    }

    /// Ceiling the derivation is held to
    #[must_use]
    pub const fn memory_limit(&self) -> u64 {
        if self.max_memory_bytes == 0 {
            DEFAULT_SCRYPT_MAX_MEMORY
        } else {
            self.max_memory_bytes
        }
    }

    /// Bytes scrypt allocates for these parameters, `None` on overflow
    ///
    /// Counts the `N * 2r` block V array, the `p * 2r` block B array and a
    /// `2r` block scratch area.
    #[must_use]
    pub fn required_memory(&self) -> Option<u64> {
        let r = u64::from(self.block_size);
        let p = u64::from(self.parallelization);
        let blocks = self.cost.checked_add(p)?.checked_add(1)?.checked_mul(2 * r)?;
        blocks.checked_mul(SCRYPT_BLOCK_BYTES)
    }

    /// Check the parameters without allocating
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::InvalidScryptParams`] if the cost is not a power of
    /// two of at least 2, the block size or parallelization is zero,
    /// `p * r` exceeds 2^30 - 1, or a small block size cannot address the
    /// requested cost. Returns [`KeyError::MemoryLimitExceeded`] if the
    /// derivation would need more than [`memory_limit`](Self::memory_limit).
    pub fn validate(&self) -> Result<()> {
        let r = u64::from(self.block_size);
        let p = u64::from(self.parallelization);

        if self.cost < 2 || !self.cost.is_power_of_two() {
            return Err(KeyError::invalid_scrypt(
                "cost must be a power of two greater than one",
            ));
        }
        if r == 0 || p == 0 {
            return Err(KeyError::invalid_scrypt(
                "block size and parallelization must be non-zero",
            ));
        }
        if p > SCRYPT_PR_MAX / r {
            return Err(KeyError::invalid_scrypt(
                "parallelization * block size exceeds 2^30 - 1",
            ));
        }
        if 16 * r < 64 && self.cost >= 1u64 << (16 * r) {
            return Err(KeyError::invalid_scrypt(
                "cost too large for block size",
            ));
        }

        let limit = self.memory_limit();
        match self.required_memory() {
            Some(required) if required <= limit => Ok(()),
            required => Err(KeyError::MemoryLimitExceeded {
                required: required.unwrap_or(u64::MAX),
                limit,
            }),
        }
    }

    /// Base-2 logarithm of the cost, as the scrypt primitive takes it
    pub(crate) fn log_cost(&self) -> u8 {
        // cost is a power of two, so trailing_zeros is exact and below 64
        self.cost.trailing_zeros() as u8
    }
}

impl Default for ScryptParams {
    fn default() -> Self {
        Self::interactive()
    }
}

/// A complete KDF choice with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kdf", rename_all = "kebab-case")]
pub enum KdfParams {
    /// PBKDF2 with HMAC-SHA256
    Pbkdf2Sha256(Pbkdf2Params),
    /// PBKDF2 with HMAC-SHA1
    Pbkdf2Sha1(Pbkdf2Params),
    /// scrypt
    Scrypt(ScryptParams),
}

impl KdfParams {
    /// Short name of the KDF
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pbkdf2Sha256(_) => "pbkdf2-sha256",
            Self::Pbkdf2Sha1(_) => "pbkdf2-sha1",
            Self::Scrypt(_) => "scrypt",
        }
    }

    /// Validate the parameters of whichever KDF is selected
    ///
    /// # Errors
    ///
    /// See [`Pbkdf2Params::validate`] and [`ScryptParams::validate`].
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Pbkdf2Sha256(params) | Self::Pbkdf2Sha1(params) => params.validate(),
            Self::Scrypt(params) => params.validate(),
        }
    }
}
