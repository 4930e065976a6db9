//! Shared infrastructure for the passweave workspace
//!
//! Entropy arithmetic used by every policy that contributes randomness to a
//! generated passphrase, and the logging initializer used by the CLI binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod entropy;
pub mod logging;

pub use entropy::EntropyBits;
pub use logging::Logging;
