//! Error handling for key material construction

use crate::algorithm::SymmetricAlgorithm;
use std::fmt;
use thiserror::Error;

/// Broad classification of a [`KeyError`]
///
/// This is the only failure detail, besides the algorithm tag, that is
/// reported to logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Rejected before any cryptographic work; the caller can adjust inputs
    InvalidParameter,
    /// The random source or a KDF primitive failed
    PrimitiveFailure,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter => f.write_str("invalid-parameter"),
            Self::PrimitiveFailure => f.write_str("primitive-failure"),
        }
    }
}

/// Key material errors
#[derive(Debug, Error)]
pub enum KeyError {
    /// Key size is not legal for the algorithm
    #[error("Unsupported key size for {algorithm}: {bits} bits")]
    UnsupportedKeySize {
        /// Algorithm the key was requested for
        algorithm: SymmetricAlgorithm,
        /// Requested size in bits
        bits: u64,
    },

    /// Operation is not available for the algorithm
    #[error("{operation} is not supported for {algorithm}")]
    UnsupportedAlgorithm {
        /// Algorithm the key was requested for
        algorithm: SymmetricAlgorithm,
        /// Name of the rejected operation
        operation: &'static str,
    },

    /// Imported key is empty
    #[error("Empty key material for {algorithm}")]
    EmptyKey {
        /// Algorithm the key was requested for
        algorithm: SymmetricAlgorithm,
    },

    /// PBKDF2 iteration count is zero
    #[error("PBKDF2 iterations must be non-zero")]
    InvalidIterations,

    /// scrypt parameters are rejected
    #[error("Invalid scrypt parameters: {0}")]
    InvalidScryptParams(String),

    /// scrypt would need more memory than the configured ceiling
    #[error("scrypt memory limit exceeded: requires {required} bytes, limit is {limit} bytes")]
    MemoryLimitExceeded {
        /// Bytes the derivation would allocate (saturated at `u64::MAX`)
        required: u64,
        /// Configured ceiling in bytes
        limit: u64,
    },

    /// Random number generation failed
    #[error("Random number generation failed: {0}")]
    RandomGeneration(String),

    /// Key derivation primitive failed
    #[error("Key derivation error: {0}")]
    KeyDerivation(String),
}

impl KeyError {
    /// Category used for reporting and retry decisions
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedKeySize { .. }
            | Self::UnsupportedAlgorithm { .. }
            | Self::EmptyKey { .. }
            | Self::InvalidIterations
            | Self::InvalidScryptParams(_)
            | Self::MemoryLimitExceeded { .. } => ErrorCategory::InvalidParameter,
            Self::RandomGeneration(_) | Self::KeyDerivation(_) => ErrorCategory::PrimitiveFailure,
        }
    }

    /// Whether retrying with different inputs can succeed
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        self.category() == ErrorCategory::InvalidParameter
    }

    pub(crate) fn unsupported_size(algorithm: SymmetricAlgorithm, bits: impl Into<u64>) -> Self {
        Self::UnsupportedKeySize {
            algorithm,
            bits: bits.into(),
        }
    }

    pub(crate) fn invalid_scrypt(msg: impl Into<String>) -> Self {
        Self::InvalidScryptParams(msg.into())
    }
}

/// Result type for key operations
pub type Result<T> = std::result::Result<T, KeyError>;
