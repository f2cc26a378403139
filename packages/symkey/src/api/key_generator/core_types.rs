//! Zeroizing working buffer for key construction

use crate::Result;
use crate::entropy::RandomSource;
use zeroize::Zeroizing;

/// Secure key buffer that automatically zeroizes on drop
///
/// Every construction path allocates its output through this type, so a
/// buffer abandoned on an error path is wiped like a finished key.
pub(crate) struct SecureKeyBuffer {
    data: Zeroizing<Vec<u8>>,
}

impl SecureKeyBuffer {
    /// Zero-filled buffer of `size` bytes
    #[inline]
    pub(crate) fn new(size: usize) -> Self {
        Self {
            data: Zeroizing::new(vec![0u8; size]),
        }
    }

    /// Buffer holding a copy of `bytes`
    #[inline]
    pub(crate) fn from_slice(bytes: &[u8]) -> Self {
        Self {
            data: Zeroizing::new(bytes.to_vec()),
        }
    }

    /// Fill the whole buffer from `rng`
    ///
    /// On failure the buffer is dropped here, and with it any bytes the
    /// source managed to write.
    #[inline]
    pub(crate) fn fill_secure_random(mut self, rng: &mut impl RandomSource) -> Result<Self> {
        rng.fill(&mut self.data)?;
        Ok(self)
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }
}
