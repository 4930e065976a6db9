//! Test-support entropy sources
//!
//! Deterministic and instrumented [`EntropySource`] implementations used by
//! the unit and integration suites. Given the same scripted draws,
//! generation is a pure function of those draws, which makes bit-exact
//! assertions possible without touching the OS pool. Never use these outside
//! of tests.

use crate::entropy::EntropySource;
use crate::error::{GenerationError, Result};
use std::collections::VecDeque;

/// Replays a fixed sequence of raw 64-bit draws.
///
/// Runs dry with [`GenerationError::RandomSourceUnavailable`], which doubles
/// as a harness for pool-exhaustion behavior.
#[derive(Debug, Clone)]
pub struct ScriptedEntropySource {
    draws: VecDeque<u64>,
}

impl ScriptedEntropySource {
    /// Build a source that yields `draws` in order.
    pub fn new<I: IntoIterator<Item = u64>>(draws: I) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Draws not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl EntropySource for ScriptedEntropySource {
    fn next_raw(&mut self) -> Result<u64> {
        self.draws.pop_front().ok_or_else(|| {
            GenerationError::RandomSourceUnavailable("scripted draws exhausted".into())
        })
    }
}

/// Wraps another source and counts how many raw draws pass through.
///
/// Lets tests assert that an operation consumed exactly the number of draws
/// its entropy figure claims, and that failing operations consumed none.
#[derive(Debug)]
pub struct CountingEntropySource<R> {
    inner: R,
    draws: usize,
}

impl<R: EntropySource> CountingEntropySource<R> {
    /// Wrap `inner`, starting the count at zero.
    pub fn new(inner: R) -> Self {
        Self { inner, draws: 0 }
    }

    /// Raw draws consumed so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl<R: EntropySource> EntropySource for CountingEntropySource<R> {
    fn next_raw(&mut self) -> Result<u64> {
        self.draws += 1;
        self.inner.next_raw()
    }
}

/// Always reports the entropy pool as unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingEntropySource;

impl EntropySource for FailingEntropySource {
    fn next_raw(&mut self) -> Result<u64> {
        Err(GenerationError::RandomSourceUnavailable(
            "entropy pool unavailable (test double)".into(),
        ))
    }
}
