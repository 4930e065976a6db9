//! # Passweave
//!
//! Recipe-driven passphrase generation: words drawn from an immutable word
//! list with OS-backed randomness, joined by a separator policy, cased by a
//! capitalization policy, with the exact information-theoretic entropy of
//! the recipe reported alongside the generated value.
//!
//! ## Quick start
//!
//! ```rust
//! use passweave::{CapScheme, Passweave, Separator};
//!
//! # fn main() -> Result<(), passweave::GenerationError> {
//! let password = Passweave::recipe()
//!     .size(5)
//!     .separator(Separator::HYPHEN)
//!     .capitalize(CapScheme::One)
//!     .generate()?;
//!
//! println!("{password} ({} bits)", password.entropy_bits());
//! # Ok(())
//! # }
//! ```
//!
//! ## Entropy accounting
//!
//! Every random decision reports the entropy of the distribution it drew
//! from: `log2(list len)` per word selection, `log2(10)` per random-digit
//! gap, `log2(size)` for the one-capitalized-word scheme, one bit per word
//! for the coin-flip scheme. The figures add because the draws are
//! independent, and the sum is returned with the password.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod capitalize;
pub mod cli;
pub mod entropy;
pub mod error;
pub mod password;
pub mod recipe;
pub mod separator;
pub mod testing;

// Re-export core types
pub use capitalize::CapScheme;
pub use entropy::{EntropySource, OsEntropySource};
pub use error::{GenerationError, Result};
pub use password::Password;
pub use recipe::{generate, Passweave, Recipe, RecipeBuilder, DEFAULT_SIZE};
pub use separator::Separator;

// Re-export the word list surface so callers need only this crate
pub use passweave_common::EntropyBits;
pub use passweave_wordlist::{WordList, WordListError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::capitalize::CapScheme;
    pub use crate::entropy::{EntropySource, OsEntropySource};
    pub use crate::error::{GenerationError, Result};
    pub use crate::password::Password;
    pub use crate::recipe::{generate, Passweave, Recipe, RecipeBuilder};
    pub use crate::separator::Separator;
    pub use passweave_common::EntropyBits;
    pub use passweave_wordlist::WordList;
}
