//! Capitalization policy
//!
//! Decides the case transform for each word of a passphrase in one logical
//! operation per generation. The randomized schemes own their draws: `one`
//! makes a single uniform choice among the N words, `random` makes N
//! independent fair binary choices, and the reported entropy is the exact
//! information content of those draws, never re-derived from the output.

use crate::entropy::EntropySource;
use crate::error::Result;
use passweave_common::EntropyBits;

/// Strategy for word capitalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapScheme {
    /// Leave every word lowercase; contributes nothing.
    None,
    /// Capitalize only the first word; deterministic, contributes nothing.
    First,
    /// Capitalize every word; deterministic, contributes nothing.
    All,
    /// Capitalize exactly one word, chosen uniformly among the N words;
    /// contributes `log2(N)` bits.
    One,
    /// Capitalize each word independently on a fair coin flip; contributes
    /// N bits.
    Random,
}

impl CapScheme {
    /// Apply the scheme to the drawn words in place, returning the entropy
    /// the applied transform contributed.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::GenerationError::RandomSourceUnavailable`] from
    /// the scheme's draws.
    pub fn apply<R: EntropySource>(
        &self,
        words: &mut [String],
        rng: &mut R,
    ) -> Result<EntropyBits> {
        if words.is_empty() {
            return Ok(EntropyBits::ZERO);
        }

        match self {
            CapScheme::None => Ok(EntropyBits::ZERO),
            CapScheme::First => {
                capitalize_in_place(&mut words[0]);
                Ok(EntropyBits::ZERO)
            }
            CapScheme::All => {
                for word in words.iter_mut() {
                    capitalize_in_place(word);
                }
                Ok(EntropyBits::ZERO)
            }
            CapScheme::One => {
                let index = rng.uniform(words.len() as u64)? as usize;
                capitalize_in_place(&mut words[index]);
                Ok(EntropyBits::from_outcomes(words.len()))
            }
            CapScheme::Random => {
                for word in words.iter_mut() {
                    if rng.uniform(2)? == 1 {
                        capitalize_in_place(word);
                    }
                }
                Ok(EntropyBits::COIN_FLIP.repeated(words.len()))
            }
        }
    }

    /// Entropy this scheme contributes for a passphrase of `size` words.
    #[must_use]
    pub fn entropy_bits(&self, size: usize) -> EntropyBits {
        match self {
            CapScheme::None | CapScheme::First | CapScheme::All => EntropyBits::ZERO,
            CapScheme::One => EntropyBits::from_outcomes(size),
            CapScheme::Random => EntropyBits::COIN_FLIP.repeated(size),
        }
    }
}

/// Uppercase the first character of `word`, keeping any multi-character
/// uppercase expansion the character demands.
fn capitalize_in_place(word: &mut String) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        let mut cased: String = first.to_uppercase().collect();
        cased.push_str(chars.as_str());
        *word = cased;
    }
}
