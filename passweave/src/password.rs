//! Generated password artifact

use passweave_common::EntropyBits;
use serde::Serialize;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A generated passphrase together with the exact entropy of the recipe
/// that produced it.
///
/// The value is secret material: memory is zeroized on drop and `Debug`
/// redacts it. `Display` prints the value, which is the point of the
/// artifact; callers decide where it is safe to show.
#[derive(Clone, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct Password {
    value: String,
    #[zeroize(skip)]
    entropy_bits: EntropyBits,
}

impl Password {
    pub(crate) fn new(value: String, entropy_bits: EntropyBits) -> Self {
        Self {
            value,
            entropy_bits,
        }
    }

    /// The generated passphrase text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Total entropy of the generation recipe: word selection plus
    /// capitalization plus separator contributions.
    #[must_use]
    pub fn entropy_bits(&self) -> EntropyBits {
        self.entropy_bits
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("value", &"<redacted>")
            .field("entropy_bits", &self.entropy_bits)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prints_the_value() {
        let p = Password::new("apple-banana".into(), EntropyBits::from(20.0));
        assert_eq!(p.to_string(), "apple-banana");
    }

    #[test]
    fn debug_redacts_the_value() {
        let p = Password::new("apple-banana".into(), EntropyBits::from(20.0));
        let debugged = format!("{p:?}");
        assert!(!debugged.contains("apple"));
        assert!(debugged.contains("<redacted>"));
    }

    #[test]
    fn serializes_value_and_entropy() {
        let p = Password::new("apple-banana".into(), EntropyBits::from_outcomes(1024));
        let json = serde_json::to_value(&p).expect("serializable");
        assert_eq!(json["value"], "apple-banana");
        assert!((json["entropy_bits"].as_f64().expect("number") - 10.0).abs() < 1e-9);
    }
}
