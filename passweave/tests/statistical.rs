//! Statistical uniformity of word selection
//!
//! Draws a large number of single-word passphrases and checks the selected
//! words against a chi-square bound. With 16 categories (15 degrees of
//! freedom) the bound of 60 sits far beyond the p=0.001 critical value of
//! ~37.7, so a correct sampler fails this test with negligible probability
//! while modulo bias or a broken mask shows up immediately.

use passweave::{CapScheme, Recipe, Separator, WordList};
use std::collections::HashMap;
use std::sync::Arc;

const GENERATIONS: usize = 100_000;
const CATEGORIES: usize = 16;
const CHI_SQUARE_BOUND: f64 = 60.0;

#[test]
fn test_word_selection_is_uniform() {
    let words: Vec<String> = (b'a'..=b'p')
        .map(|c| format!("{}word", char::from(c)))
        .collect();
    assert_eq!(words.len(), CATEGORIES);

    let list = Arc::new(WordList::new(&words).expect("valid list"));
    let recipe =
        Recipe::new(list, 1, Separator::None, CapScheme::None).expect("valid recipe");

    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..GENERATIONS {
        let password = recipe.generate().expect("generation should succeed");
        *counts.entry(password.value().to_string()).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), CATEGORIES, "every word should appear");

    let expected = GENERATIONS as f64 / CATEGORIES as f64;
    let chi_square: f64 = counts
        .values()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();

    assert!(
        chi_square < CHI_SQUARE_BOUND,
        "chi-square {chi_square:.2} exceeds {CHI_SQUARE_BOUND} over {counts:?}"
    );
}

#[test]
fn test_digit_separator_is_uniform() {
    let list = Arc::new(WordList::new(["aa", "bb"]).expect("valid list"));
    let recipe =
        Recipe::new(list, 2, Separator::Digit, CapScheme::None).expect("valid recipe");

    let mut counts = [0usize; 10];
    for _ in 0..GENERATIONS {
        let password = recipe.generate().expect("generation should succeed");
        let digit = password
            .value()
            .chars()
            .find(char::is_ascii_digit)
            .expect("one digit per gap");
        counts[digit.to_digit(10).expect("ascii digit") as usize] += 1;
    }

    // 9 degrees of freedom; p=0.001 critical value is ~27.9.
    let expected = GENERATIONS as f64 / 10.0;
    let chi_square: f64 = counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();
    assert!(
        chi_square < 50.0,
        "chi-square {chi_square:.2} over {counts:?}"
    );
}
