//! Structured logging infrastructure
//!
//! env_logger-backed setup shared by the CLI binary and test suites.
//! Generated passwords are secret material and must never reach a log line;
//! callers log recipe shape and entropy figures only.

use log::info;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging setup for binaries and tests.
pub struct Logging;

impl Logging {
    /// Initialize the logging system (call once at process startup).
    ///
    /// Levels are configured through the `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - all debug logs
    /// - `RUST_LOG=info` - info and above
    /// - `RUST_LOG=passweave=debug` - module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();
        });
    }

    /// Initialize logging for test environments.
    ///
    /// Safe to call from multiple test functions; initialization conflicts
    /// are swallowed.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log the shape of a generation request without any secret content.
    pub fn log_generation(words: usize, list_len: usize, entropy_bits: f64) {
        info!("generated passphrase: {words} words from a {list_len}-word list ({entropy_bits:.3} bits)");
    }
}
