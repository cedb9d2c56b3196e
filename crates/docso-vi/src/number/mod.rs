// Vietnamese cardinal number speller.
//
// Pipeline:
//   1. below_thousand -- magnitudes in [0, 999]
//   2. tiers          -- fold over thousand/million/billion, recursing on counts
//   3. tiers          -- empty-hundreds correction on the typed word sequence
//
// `Speller` owns a resolved lexicon and is cheap to copy. All conversions
// are pure functions of the input and the options.

pub(crate) mod below_thousand;
pub(crate) mod tiers;

use std::str::FromStr;

use docso_core::{NumberError, WordSequence, cardinal_from_i64, parse_cardinal};

use crate::lexicon::Lexicon;
pub use crate::lexicon::{OddFiller, ThousandWord};

/// Regional reading style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// "nghìn" and "linh".
    #[default]
    Northern,
    /// "ngàn" and "lẻ".
    Southern,
}

/// Error returned when a dialect name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dialect: {0} (expected \"north\" or \"south\")")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "northern" | "bac" => Ok(Dialect::Northern),
            "south" | "southern" | "nam" => Ok(Dialect::Southern),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}

/// Word choices for a speller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpellerOptions {
    /// Word used for the thousand tier.
    pub thousand: ThousandWord,
    /// Linking word before a lone unit digit.
    pub odd_filler: OddFiller,
}

impl SpellerOptions {
    /// Options matching a regional reading style.
    pub fn for_dialect(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Northern => Self {
                thousand: ThousandWord::Nghin,
                odd_filler: OddFiller::Linh,
            },
            Dialect::Southern => Self {
                thousand: ThousandWord::Ngan,
                odd_filler: OddFiller::Le,
            },
        }
    }
}

/// Vietnamese cardinal number speller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Speller {
    options: SpellerOptions,
    lexicon: Lexicon,
}

impl Speller {
    /// Create a speller with the given options.
    pub fn new(options: SpellerOptions) -> Self {
        Self {
            options,
            lexicon: Lexicon::new(options.thousand, options.odd_filler),
        }
    }

    /// The options this speller was built with.
    pub fn options(&self) -> SpellerOptions {
        self.options
    }

    /// Spell `n` as typed words.
    pub fn spell_words(&self, n: u64) -> WordSequence {
        tiers::spell_full(n, &self.lexicon)
    }

    /// Spell `n` as space-separated text.
    ///
    /// ```
    /// use docso_vi::number::Speller;
    ///
    /// let speller = Speller::default();
    /// assert_eq!(speller.spell(21), "hai mươi mốt");
    /// assert_eq!(speller.spell(1015), "một nghìn không trăm mười lăm");
    /// ```
    pub fn spell(&self, n: u64) -> String {
        self.spell_words(n).render()
    }

    /// Parse and spell a decimal string.
    ///
    /// Negative, fractional and malformed inputs are rejected with a
    /// [`NumberError`].
    pub fn spell_str(&self, input: &str) -> Result<String, NumberError> {
        let n = parse_cardinal(input).inspect_err(|e| {
            tracing::debug!(input, error = %e, "rejected number input");
        })?;
        Ok(self.spell(n))
    }

    /// Spell a signed integer, rejecting negative values.
    pub fn spell_signed(&self, n: i64) -> Result<String, NumberError> {
        let n = cardinal_from_i64(n).inspect_err(|e| {
            tracing::debug!(error = %e, "rejected negative number");
        })?;
        Ok(self.spell(n))
    }
}

impl Default for Speller {
    fn default() -> Self {
        Self::new(SpellerOptions::default())
    }
}

/// Spell `n` with the default northern options.
pub fn spell_number(n: u64) -> String {
    Speller::default().spell(n)
}
