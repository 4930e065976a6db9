//! Separator policy
//!
//! Supplies the text inserted between consecutive words and the entropy that
//! insertion contributes. Invoked once per gap, so a passphrase of N words
//! sees N-1 invocations.

use crate::entropy::EntropySource;
use crate::error::Result;
use passweave_common::EntropyBits;

/// Strategy for the text between words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// No text between words; contributes nothing.
    None,
    /// The same single character in every gap; contributes nothing.
    Fixed(char),
    /// One uniformly random ASCII digit per gap; contributes `log2(10)`
    /// bits per gap.
    Digit,
}

impl Separator {
    /// Hyphen-separated words, the conventional default.
    pub const HYPHEN: Separator = Separator::Fixed('-');
    /// Space-separated words.
    pub const SPACE: Separator = Separator::Fixed(' ');
    /// Comma-separated words.
    pub const COMMA: Separator = Separator::Fixed(',');
    /// Period-separated words.
    pub const DOT: Separator = Separator::Fixed('.');
    /// Underscore-separated words.
    pub const UNDERSCORE: Separator = Separator::Fixed('_');

    /// Produce the next gap's text and its entropy contribution.
    ///
    /// The fixed and none variants are pure. The digit variant draws
    /// `uniform(10)` exactly once and reports `log2(10)` bits regardless of
    /// which digit came up: entropy is a property of the distribution, not
    /// the outcome.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::GenerationError::RandomSourceUnavailable`] from
    /// the digit draw.
    pub fn next<R: EntropySource>(&self, rng: &mut R) -> Result<(String, EntropyBits)> {
        match self {
            Separator::None => Ok((String::new(), EntropyBits::ZERO)),
            Separator::Fixed(ch) => Ok((ch.to_string(), EntropyBits::ZERO)),
            Separator::Digit => {
                let digit = rng.uniform(10)?;
                Ok((digit.to_string(), self.entropy_bits()))
            }
        }
    }

    /// Entropy contributed per gap by this policy's distribution.
    #[must_use]
    pub fn entropy_bits(&self) -> EntropyBits {
        match self {
            Separator::None | Separator::Fixed(_) => EntropyBits::ZERO,
            Separator::Digit => EntropyBits::from_outcomes(10),
        }
    }

    /// Whether `word` contains text this separator could emit, which would
    /// make the joined output ambiguous to split.
    ///
    /// Digit separators check for any ASCII digit: a digit inside a word is
    /// indistinguishable from a gap, exactly as a hyphen inside a word is
    /// for hyphen separation.
    #[must_use]
    pub fn conflicts_with(&self, word: &str) -> bool {
        match self {
            Separator::None => false,
            Separator::Fixed(ch) => word.contains(*ch),
            Separator::Digit => word.chars().any(|c| c.is_ascii_digit()),
        }
    }

    /// Human-readable description of the separator's literal content, for
    /// error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Separator::None => "none".to_string(),
            Separator::Fixed(ch) => ch.to_string(),
            Separator::Digit => "random digit".to_string(),
        }
    }
}
