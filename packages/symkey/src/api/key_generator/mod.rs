//! Key construction paths
//!
//! Random generation and raw import live in [`symmetric`], password-based
//! derivation in [`derive`]. All of them build into a [`core_types`]
//! zeroizing buffer from the first allocation.

pub mod derive;
pub mod symmetric;

pub(crate) mod core_types;
