//! Embedded default word list
//!
//! 1024 common English words (10.000 bits per selection), lowercase a-z
//! only. The list is parsed once on first use and shared for the process
//! lifetime.

use crate::list::WordList;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// The default word list embedded at compile time.
static WORDS_FILE: &str = include_str!("words.txt");

static BUILTIN: Lazy<Arc<WordList>> = Lazy::new(|| {
    let list = WordList::new(WORDS_FILE.lines()).expect("embedded word list is valid");
    Arc::new(list)
});

impl WordList {
    /// Shared handle to the embedded default list.
    ///
    /// Clones of the `Arc` are cheap; the underlying list is constructed
    /// once and never mutated.
    #[must_use]
    pub fn builtin() -> Arc<WordList> {
        Arc::clone(&BUILTIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_1024_words() {
        assert_eq!(WordList::builtin().len(), 1024);
    }

    #[test]
    fn builtin_selection_is_ten_bits() {
        assert_eq!(WordList::builtin().bits_per_word().bits(), 10.0);
    }

    #[test]
    fn builtin_words_are_plain_lowercase_ascii() {
        for word in WordList::builtin().iter() {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "unexpected character in builtin word {word:?}"
            );
        }
    }

    #[test]
    fn builtin_handles_share_one_list() {
        let a = WordList::builtin();
        let b = WordList::builtin();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
