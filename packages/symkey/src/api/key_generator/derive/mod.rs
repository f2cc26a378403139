//! Password-based key derivation
//!
//! PBKDF2 (HMAC-SHA256 and HMAC-SHA1) and scrypt, each gated by the
//! algorithm key size table before any KDF work is done.

pub mod config;
pub mod core;
pub mod utils;

pub use config::{DEFAULT_SCRYPT_MAX_MEMORY, KdfParams, Pbkdf2Params, ScryptParams};
pub use utils::constant_time_compare;
