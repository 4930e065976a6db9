//! CLI command definitions
//!
//! Maps user-facing flag names onto the engine's policy selectors, runs one
//! generation, and formats the result. All policy semantics live in the
//! engine; this layer only translates names and surfaces errors.

use crate::capitalize::CapScheme;
use crate::recipe::Passweave;
use crate::separator::Separator;
use clap::{Parser, ValueEnum};

/// Generates a memorable, but secure password.
#[derive(Debug, Parser)]
#[command(name = "passweave", version)]
#[command(about = "Generates a memorable, but secure password")]
pub struct Cli {
    /// Number of words in the passphrase
    #[arg(short, long, default_value_t = 5)]
    pub size: usize,

    /// Separator class between words
    #[arg(long, value_enum, default_value = "hyphen")]
    pub separator: SeparatorClass,

    /// Capitalization scheme
    #[arg(long, value_enum, default_value = "one")]
    pub capitalize: CapClass,

    /// Show the entropy of the password recipe
    #[arg(long)]
    pub entropy: bool,

    /// Output password and entropy in JSON format
    #[arg(long)]
    pub json: bool,
}

/// User-facing separator class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeparatorClass {
    /// Hyphen between words
    Hyphen,
    /// Space between words
    Space,
    /// Comma between words
    Comma,
    /// Period between words
    #[value(alias = "period")]
    Dot,
    /// Underscore between words
    Underscore,
    /// One random digit between words
    Digit,
    /// No separator
    None,
}

impl From<SeparatorClass> for Separator {
    fn from(class: SeparatorClass) -> Separator {
        match class {
            SeparatorClass::Hyphen => Separator::HYPHEN,
            SeparatorClass::Space => Separator::SPACE,
            SeparatorClass::Comma => Separator::COMMA,
            SeparatorClass::Dot => Separator::DOT,
            SeparatorClass::Underscore => Separator::UNDERSCORE,
            SeparatorClass::Digit => Separator::Digit,
            SeparatorClass::None => Separator::None,
        }
    }
}

/// User-facing capitalization scheme names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CapClass {
    /// All words lowercase
    None,
    /// Capitalize the first word only
    First,
    /// Capitalize every word
    All,
    /// Capitalize exactly one word, chosen at random
    #[value(alias = "one-random")]
    One,
    /// Capitalize each word on an independent coin flip
    #[value(alias = "all-random")]
    Random,
}

impl From<CapClass> for CapScheme {
    fn from(class: CapClass) -> CapScheme {
        match class {
            CapClass::None => CapScheme::None,
            CapClass::First => CapScheme::First,
            CapClass::All => CapScheme::All,
            CapClass::One => CapScheme::One,
            CapClass::Random => CapScheme::Random,
        }
    }
}

/// Execute one generation for the parsed command line.
///
/// # Errors
///
/// Returns the engine's `GenerationError` for configuration defects or an
/// unavailable entropy pool, and serialization errors from `--json`. The
/// binary maps any error to a message on stderr and a non-zero exit.
pub fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let password = Passweave::recipe()
        .size(cli.size)
        .separator(cli.separator.into())
        .capitalize(cli.capitalize.into())
        .generate()?;

    if cli.json {
        println!("{}", serde_json::to_string(&password)?);
    } else if cli.entropy {
        println!("Password: {password}");
        println!("Entropy: {}", password.entropy_bits());
    } else {
        println!("{password}");
    }

    Ok(())
}
