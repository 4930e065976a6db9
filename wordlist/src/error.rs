//! Error handling for word list construction

use thiserror::Error;

/// Word list construction errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WordListError {
    /// The source contained fewer than two distinct words after
    /// normalization. A passphrase drawn from such a list would carry no
    /// word-selection entropy.
    #[error("word list must contain at least two distinct words")]
    Empty,
}

/// Result type for word list operations
pub type Result<T> = std::result::Result<T, WordListError>;
