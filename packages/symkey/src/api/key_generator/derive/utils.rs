//! Key derivation utility functions

/// Constant-time key comparison for derived keys
/// Prevents timing attacks when comparing derived keys
#[must_use]
#[inline]
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    use subtle::ConstantTimeEq;
    a.ct_eq(b).into()
}
