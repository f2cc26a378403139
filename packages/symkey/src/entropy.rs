//! Cryptographically secure random source
//!
//! Random generation goes through the [`RandomSource`] trait so that the
//! failure path of the operating system RNG can be exercised.

use crate::{KeyError, Result};
use rand::TryRngCore;
use rand::rngs::OsRng;

/// A source of cryptographically secure random bytes
pub trait RandomSource {
    /// Fill `dest` completely with random bytes
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::RandomGeneration`] if the source could not fill the
    /// whole buffer. The contents of `dest` are unspecified in that case.
    fn fill(&mut self, dest: &mut [u8]) -> Result<()>;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        (**self).fill(dest)
    }
}

/// Operating system entropy
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl RandomSource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| KeyError::RandomGeneration(e.to_string()))
    }
}
