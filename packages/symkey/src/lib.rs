//! # Symmetric Key Material
//!
//! Generation, derivation, import and secure disposal of raw symmetric keys.
//!
//! ## Features
//!
//! - **Random Generation**: AES-128/256 keys from the operating system RNG
//! - **Password Derivation**: PBKDF2-HMAC-SHA256, PBKDF2-HMAC-SHA1 and scrypt
//!   with an enforced memory ceiling
//! - **Import**: raw AES or HMAC-SHA1 key bytes
//! - **Zeroize on Drop**: key bytes are wiped before their memory is freed
//!
//! ## Quick Start
//!
//! ```rust
//! use symkey::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let key = KeyMaterial::generate_random(SymmetricAlgorithm::Aes, 256u32.bits())?;
//! assert_eq!(key.len(), 32);
//!
//! let derived = KeyMaterial::derive_pbkdf2_sha256(
//!     SymmetricAlgorithm::Aes,
//!     b"correct horse battery staple",
//!     b"per-user salt",
//!     Pbkdf2Params::fast().iterations,
//!     128u32.bits(),
//! )?;
//! assert_eq!(derived.bytes().len(), 16);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod algorithm;
pub mod api;
pub mod bits_macro;
pub mod entropy;
pub mod error;
pub mod logging;

// Re-export core types
pub use algorithm::SymmetricAlgorithm;
pub use bits_macro::{BitSize, Bits};
pub use entropy::{OsEntropy, RandomSource};
pub use error::{ErrorCategory, KeyError, Result};

// Re-export the main API
pub use api::{KdfParams, KeyMaterial, Pbkdf2Params, ScryptParams};
pub use api::key_generator::derive::DEFAULT_SCRYPT_MAX_MEMORY;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        KdfParams, KeyError, KeyMaterial, Pbkdf2Params, Result, ScryptParams, SymmetricAlgorithm,
        bits_macro::{BitSize, Bits},
    };
}
