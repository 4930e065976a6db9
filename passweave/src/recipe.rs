//! Recipe construction and passphrase generation
//!
//! A [`Recipe`] fixes the distribution a passphrase is drawn from: the word
//! list, the word count, the separator policy, and the capitalization
//! policy. Generation orchestrates the draws in a fixed order (words, then
//! capitalization, then one separator per gap) and sums the entropy every
//! random decision contributes.

use crate::capitalize::CapScheme;
use crate::entropy::{EntropySource, OsEntropySource};
use crate::error::{GenerationError, Result};
use crate::password::Password;
use crate::separator::Separator;
use passweave_common::EntropyBits;
use passweave_wordlist::WordList;
use std::sync::Arc;

/// Default word count, matching the conventional five-word passphrase.
pub const DEFAULT_SIZE: usize = 5;

/// Full configuration of one passphrase distribution.
///
/// Immutable once constructed; a recipe may be reused for any number of
/// generations, each independent, and shared across threads (the word list
/// is behind an `Arc`, the policies are `Copy`).
#[derive(Debug, Clone)]
pub struct Recipe {
    words: Arc<WordList>,
    size: usize,
    separator: Separator,
    capitalize: CapScheme,
}

impl Recipe {
    /// Validate and build a recipe.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::InvalidRecipeSize`] if `size` is zero.
    /// - [`GenerationError::SeparatorWordConflict`] if the separator's
    ///   literal content appears inside any word of the list, which would
    ///   make the generated string ambiguous to split.
    pub fn new(
        words: Arc<WordList>,
        size: usize,
        separator: Separator,
        capitalize: CapScheme,
    ) -> Result<Self> {
        if size < 1 {
            return Err(GenerationError::InvalidRecipeSize(size));
        }
        if let Some(word) = words.iter().find(|w| separator.conflicts_with(w)) {
            return Err(GenerationError::SeparatorWordConflict {
                separator: separator.describe(),
                word: word.to_string(),
            });
        }
        Ok(Recipe {
            words,
            size,
            separator,
            capitalize,
        })
    }

    /// Word count per generated passphrase.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The word list this recipe draws from.
    #[must_use]
    pub fn word_list(&self) -> &WordList {
        &self.words
    }

    /// Entropy of the distribution this recipe defines, without generating:
    /// `size * log2(list len)` for selection, plus the capitalization
    /// scheme's bits, plus one separator contribution per gap.
    #[must_use]
    pub fn entropy_bits(&self) -> EntropyBits {
        self.words.bits_per_word().repeated(self.size)
            + self.capitalize.entropy_bits(self.size)
            + self.separator.entropy_bits().repeated(self.size - 1)
    }

    /// Generate one passphrase from the OS entropy pool.
    ///
    /// # Errors
    ///
    /// [`GenerationError::RandomSourceUnavailable`] if the OS pool cannot be
    /// read; the failure is surfaced as-is, never retried or masked.
    pub fn generate(&self) -> Result<Password> {
        self.generate_with(&mut OsEntropySource)
    }

    /// Generate one passphrase, drawing from `rng`.
    ///
    /// Given the same sequence of raw draws this is a pure function of those
    /// draws, which is what makes bit-exact testing possible.
    ///
    /// # Errors
    ///
    /// [`GenerationError::InvalidRecipeSize`] for a degenerate size (checked
    /// before any draw), or [`GenerationError::RandomSourceUnavailable`]
    /// from the source.
    pub fn generate_with<R: EntropySource>(&self, rng: &mut R) -> Result<Password> {
        if self.size < 1 {
            return Err(GenerationError::InvalidRecipeSize(self.size));
        }

        let mut entropy = EntropyBits::ZERO;

        // Word selection: size independent uniform draws over the list.
        let mut words = Vec::with_capacity(self.size);
        for _ in 0..self.size {
            let index = rng.uniform(self.words.len() as u64)? as usize;
            words.push(self.words.word_at(index).to_string());
            entropy += self.words.bits_per_word();
        }

        // Capitalization: one logical operation over the whole sequence.
        entropy += self.capitalize.apply(&mut words, rng)?;

        // Separators: one draw per gap, interleaved in order.
        let mut value = String::new();
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                let (text, bits) = self.separator.next(rng)?;
                value.push_str(&text);
                entropy += bits;
            }
            value.push_str(word);
        }

        log::debug!(
            "generated {} words from a {}-word list ({} bits)",
            self.size,
            self.words.len(),
            entropy
        );

        Ok(Password::new(value, entropy))
    }
}

/// Generate one passphrase from `recipe` using the OS entropy pool.
///
/// The single top-level operation of the engine; equivalent to
/// [`Recipe::generate`].
///
/// # Errors
///
/// See [`Recipe::generate`].
pub fn generate(recipe: &Recipe) -> Result<Password> {
    recipe.generate()
}

/// Main entry point for building recipes fluently.
pub struct Passweave;

impl Passweave {
    /// Start a recipe with the default shape: five words from the embedded
    /// list, hyphen-separated, one random word capitalized.
    #[must_use]
    pub fn recipe() -> RecipeBuilder {
        RecipeBuilder::new()
    }
}

/// Builder for [`Recipe`].
#[derive(Debug, Clone)]
pub struct RecipeBuilder {
    words: Option<Arc<WordList>>,
    size: usize,
    separator: Separator,
    capitalize: CapScheme,
}

impl RecipeBuilder {
    fn new() -> Self {
        Self {
            words: None,
            size: DEFAULT_SIZE,
            separator: Separator::HYPHEN,
            capitalize: CapScheme::One,
        }
    }

    /// Use a specific word list instead of the embedded default.
    #[must_use]
    pub fn word_list(mut self, words: Arc<WordList>) -> Self {
        self.words = Some(words);
        self
    }

    /// Set the word count.
    #[must_use]
    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the separator policy.
    #[must_use]
    pub fn separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    /// Set the capitalization policy.
    #[must_use]
    pub fn capitalize(mut self, capitalize: CapScheme) -> Self {
        self.capitalize = capitalize;
        self
    }

    /// Validate the configuration into a [`Recipe`].
    ///
    /// # Errors
    ///
    /// See [`Recipe::new`].
    pub fn build(self) -> Result<Recipe> {
        let words = self.words.unwrap_or_else(WordList::builtin);
        Recipe::new(words, self.size, self.separator, self.capitalize)
    }

    /// Build and immediately generate one passphrase from the OS pool.
    ///
    /// # Errors
    ///
    /// See [`Recipe::new`] and [`Recipe::generate`].
    pub fn generate(self) -> Result<Password> {
        self.build()?.generate()
    }
}

impl Default for RecipeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CountingEntropySource, FailingEntropySource, ScriptedEntropySource};

    fn four_words() -> Arc<WordList> {
        Arc::new(WordList::new(["apple", "banana", "cherry", "date"]).expect("valid list"))
    }

    #[test]
    fn zero_size_fails_before_any_draw() {
        let err = Recipe::new(four_words(), 0, Separator::HYPHEN, CapScheme::None)
            .expect_err("size 0 must be rejected");
        assert!(matches!(err, GenerationError::InvalidRecipeSize(0)));
    }

    #[test]
    fn separator_conflict_is_rejected_at_construction() {
        let list = Arc::new(WordList::new(["twenty-one", "thirty"]).expect("valid list"));
        let err = Recipe::new(list, 3, Separator::HYPHEN, CapScheme::None)
            .expect_err("conflicting separator must be rejected");
        match err {
            GenerationError::SeparatorWordConflict { separator, word } => {
                assert_eq!(separator, "-");
                assert_eq!(word, "twenty-one");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn scripted_draws_make_generation_deterministic() {
        let recipe =
            Recipe::new(four_words(), 3, Separator::HYPHEN, CapScheme::None).expect("valid recipe");
        // 4-word list: uniform(4) masks the low two bits of each raw draw.
        let mut rng = ScriptedEntropySource::new([0, 1, 2]);
        let password = recipe.generate_with(&mut rng).expect("scripted generation");
        assert_eq!(password.value(), "apple-banana-cherry");
        assert!(password
            .entropy_bits()
            .approx_eq(EntropyBits::from(6.0), 1e-9));
    }

    #[test]
    fn single_word_recipe_makes_no_separator_draw() {
        let recipe =
            Recipe::new(four_words(), 1, Separator::Digit, CapScheme::None).expect("valid recipe");
        let mut rng = CountingEntropySource::new(ScriptedEntropySource::new([3]));
        let password = recipe.generate_with(&mut rng).expect("scripted generation");
        assert_eq!(password.value(), "date");
        assert_eq!(rng.draws(), 1, "only the word draw itself");
    }

    #[test]
    fn entropy_source_failure_propagates_unmasked() {
        let recipe =
            Recipe::new(four_words(), 3, Separator::HYPHEN, CapScheme::None).expect("valid recipe");
        let err = recipe
            .generate_with(&mut FailingEntropySource)
            .expect_err("failing source must surface");
        assert!(matches!(err, GenerationError::RandomSourceUnavailable(_)));
    }

    #[test]
    fn builder_defaults_match_the_conventional_recipe() {
        let recipe = Passweave::recipe().build().expect("defaults are valid");
        assert_eq!(recipe.size(), DEFAULT_SIZE);
        assert_eq!(recipe.word_list().len(), 1024);
        // 5 * 10 bits of selection + log2(5) for the capitalized word.
        let expected = EntropyBits::from(50.0 + 5f64.log2());
        assert!(recipe.entropy_bits().approx_eq(expected, 1e-9));
    }

    #[test]
    fn recipe_is_reusable_across_generations() {
        let recipe =
            Recipe::new(four_words(), 2, Separator::HYPHEN, CapScheme::None).expect("valid recipe");
        let mut first = ScriptedEntropySource::new([0, 1]);
        let mut second = ScriptedEntropySource::new([3, 2]);
        assert_eq!(
            recipe.generate_with(&mut first).expect("gen").value(),
            "apple-banana"
        );
        assert_eq!(
            recipe.generate_with(&mut second).expect("gen").value(),
            "date-cherry"
        );
    }
}
