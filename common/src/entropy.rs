//! Type-safe entropy accounting
//!
//! Entropy is measured in bits: log base 2 of the number of equally likely
//! outcomes of a random decision. Contributions from independent decisions
//! add, so the total entropy of a generation recipe is the plain sum of the
//! bits reported by each random draw's distribution.

use serde::Serialize;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Entropy of a random decision, in bits.
///
/// The value is a property of the distribution a draw was made from, never of
/// the outcome that happened to be drawn: a uniform choice among `n` outcomes
/// contributes exactly `log2(n)` bits no matter which outcome came up.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct EntropyBits(f64);

impl EntropyBits {
    /// The zero contribution of a deterministic decision.
    pub const ZERO: EntropyBits = EntropyBits(0.0);

    /// Entropy of one fair binary choice.
    pub const COIN_FLIP: EntropyBits = EntropyBits(1.0);

    /// Entropy of a uniform choice among `outcomes` equally likely outcomes.
    ///
    /// A choice among zero or one outcomes carries no information and maps
    /// to zero bits.
    #[must_use]
    pub fn from_outcomes(outcomes: usize) -> Self {
        if outcomes <= 1 {
            return Self::ZERO;
        }
        EntropyBits((outcomes as f64).log2())
    }

    /// Raw bit count.
    #[must_use]
    pub const fn bits(self) -> f64 {
        self.0
    }

    /// Scale a per-decision contribution by the number of independent
    /// repetitions of that decision.
    #[must_use]
    pub fn repeated(self, times: usize) -> Self {
        EntropyBits(self.0 * times as f64)
    }

    /// Whether two entropy figures agree within `tolerance` bits.
    ///
    /// Entropy sums are floating-point; exact comparison is only meaningful
    /// through a tolerance (tests use 1e-9).
    #[must_use]
    pub fn approx_eq(self, other: EntropyBits, tolerance: f64) -> bool {
        (self.0 - other.0).abs() <= tolerance
    }
}

impl From<f64> for EntropyBits {
    fn from(bits: f64) -> Self {
        EntropyBits(bits)
    }
}

impl Add for EntropyBits {
    type Output = EntropyBits;

    fn add(self, rhs: EntropyBits) -> EntropyBits {
        EntropyBits(self.0 + rhs.0)
    }
}

impl AddAssign for EntropyBits {
    fn add_assign(&mut self, rhs: EntropyBits) {
        self.0 += rhs.0;
    }
}

impl Sum for EntropyBits {
    fn sum<I: Iterator<Item = EntropyBits>>(iter: I) -> EntropyBits {
        iter.fold(EntropyBits::ZERO, Add::add)
    }
}

impl fmt::Display for EntropyBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}
