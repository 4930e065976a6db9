//! Error handling for passphrase generation

use passweave_wordlist::WordListError;
use thiserror::Error;

/// Generation-specific errors
///
/// Every variant is fatal for the call that produced it: a configuration
/// defect or a security-relevant subsystem failure, never silently recovered
/// or retried.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The recipe asked for fewer than one word. Rejected before any random
    /// draw is made.
    #[error("invalid recipe size {0}: a passphrase needs at least one word")]
    InvalidRecipeSize(usize),

    /// The chosen separator collides with word content, which would make the
    /// generated string ambiguous to split. The caller must pick a different
    /// separator or word list.
    #[error("separator {separator:?} collides with word {word:?} in the word list")]
    SeparatorWordConflict {
        /// Human-readable description of the separator's literal content.
        separator: String,
        /// The first colliding word.
        word: String,
    },

    /// The OS entropy pool could not produce a value. Never masked by a
    /// fallback to non-cryptographic randomness.
    #[error("secure random source unavailable: {0}")]
    RandomSourceUnavailable(String),

    /// Word list construction failed.
    #[error(transparent)]
    WordList(#[from] WordListError),
}

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, GenerationError>;
