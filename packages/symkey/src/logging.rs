//! Structured logging for key events
//!
//! Key events are logged through the `log` facade. Only the operation name,
//! the algorithm tag, the key length and the error category are ever
//! written; key bytes, passwords and salts never reach a log line.

use crate::{KeyError, SymmetricAlgorithm};
use log::{debug, info, warn};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging setup and the key event log sites
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize `env_logger` once, configured by `RUST_LOG`
    ///
    /// - `RUST_LOG=debug` - include successful key construction
    /// - `RUST_LOG=warn` - only failed construction
    /// - `RUST_LOG=symkey=debug` - module-specific levels
    ///
    /// Does nothing if the application already installed a logger.
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            if env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .try_init()
                .is_ok()
            {
                info!("Structured logging initialized");
            }
        });
    }

    /// Initialize logging for test environments
    ///
    /// Use this in test modules to avoid initialization conflicts
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a successfully constructed key
    pub fn log_key_created(operation: &str, algorithm: SymmetricAlgorithm, len: usize) {
        debug!("Key material created: {operation} (algorithm: {algorithm}, len: {len} bytes)");
    }

    /// Log a failed construction by category only
    pub fn log_key_failure(operation: &str, algorithm: SymmetricAlgorithm, error: &KeyError) {
        warn!(
            "Key material construction failed: {operation} (algorithm: {algorithm}, category: {})",
            error.category()
        );
    }
}
