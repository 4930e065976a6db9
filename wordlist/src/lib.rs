//! Word list representation for passphrase generation
//!
//! A [`WordList`] is an ordered collection of distinct, lowercase words built
//! once and never mutated. Generation draws words by index, so the list
//! guarantees that every index in `[0, len)` maps to exactly one word and
//! that the per-word selection entropy is `log2(len)` bits.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builtin;
mod error;
mod list;

pub use error::{Result, WordListError};
pub use list::WordList;
