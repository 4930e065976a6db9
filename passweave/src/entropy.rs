//! Cryptographically secure random source
//!
//! Every random decision in a generation flows through [`EntropySource`].
//! The production implementation, [`OsEntropySource`], reads the operating
//! system's secure entropy API and nothing else: no userspace PRNG, no
//! seeding from predictable state, no caching, and no fallback when the OS
//! pool fails.

use crate::error::{GenerationError, Result};
use rand_core::{OsRng, TryRngCore};

/// Supplier of uniformly distributed random integers.
///
/// Implementations other than [`OsEntropySource`] exist only for tests (see
/// [`crate::testing`]); production generation must not substitute a
/// non-cryptographic source.
pub trait EntropySource {
    /// Draw 64 fresh random bits.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::RandomSourceUnavailable`] if the
    /// underlying entropy pool cannot be read. The failure is fatal: callers
    /// must not retry or fall back.
    fn next_raw(&mut self) -> Result<u64>;

    /// Uniform integer in `[0, n)`.
    ///
    /// Powers of two are served by masking a single draw. Any other range
    /// uses rejection sampling against the largest multiple of `n`
    /// representable in 64 bits, so no outcome is favored by modulo bias.
    ///
    /// # Errors
    ///
    /// Propagates [`GenerationError::RandomSourceUnavailable`] from the raw
    /// draw.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`; an empty range has no outcome to draw.
    fn uniform(&mut self, n: u64) -> Result<u64> {
        assert!(n > 0, "uniform range must be non-empty");

        if n.is_power_of_two() {
            return Ok(self.next_raw()? & (n - 1));
        }

        // Largest multiple of n that fits in u64; draws at or above it are
        // rejected so the remainder is exactly uniform.
        let zone = (u64::MAX / n) * n;
        loop {
            let draw = self.next_raw()?;
            if draw < zone {
                return Ok(draw % n);
            }
        }
    }
}

/// Handle to the operating system's secure entropy pool.
///
/// The OS pool is internally synchronized: this handle is a zero-sized
/// `Copy` value, and any number of concurrent generation calls may each hold
/// one without locking on our side.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropySource;

impl EntropySource for OsEntropySource {
    fn next_raw(&mut self) -> Result<u64> {
        OsRng
            .try_next_u64()
            .map_err(|e| GenerationError::RandomSourceUnavailable(e.to_string()))
    }
}
