// DocsoHandle: single entry point for the Vietnamese module.
//
// Owns a number speller and a phone validator together with their options,
// so that bindings (CLI, WASM, C ABI) only hold one object. Changing an
// option rebuilds the affected component; the speller is rebuilt in place,
// the phone validator recompiles its pattern.

use docso_core::{NumberError, WordSequence, cardinal_from_f64};

use crate::number::{Dialect, OddFiller, Speller, SpellerOptions, ThousandWord};
use crate::phone::{
    PhoneConfig, PhoneError, PhoneValidation, PhoneValidator, Provider, format_phone_number,
};

/// Error type for handle operations.
#[derive(Debug, thiserror::Error)]
pub enum DocsoError {
    /// The number input was not a non-negative integer.
    #[error(transparent)]
    Number(#[from] NumberError),

    /// The phone configuration could not be compiled.
    #[error(transparent)]
    Phone(#[from] PhoneError),
}

/// Top-level handle owning the number speller and the phone validator.
#[derive(Debug, Clone)]
pub struct DocsoHandle {
    speller: Speller,
    phone: PhoneValidator,
}

impl DocsoHandle {
    /// Create a handle with northern speller options and the default
    /// carrier table.
    pub fn new() -> Result<Self, DocsoError> {
        Self::with_config(SpellerOptions::default(), PhoneConfig::default())
    }

    /// Create a handle with explicit options.
    pub fn with_config(
        speller_options: SpellerOptions,
        phone_config: PhoneConfig,
    ) -> Result<Self, DocsoError> {
        Ok(Self {
            speller: Speller::new(speller_options),
            phone: PhoneValidator::new(phone_config)?,
        })
    }

    /// Library version string.
    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Spell a number as text.
    pub fn spell_number(&self, n: u64) -> String {
        self.speller.spell(n)
    }

    /// Spell a number as typed words.
    pub fn spell_words(&self, n: u64) -> WordSequence {
        self.speller.spell_words(n)
    }

    /// Parse and spell a decimal string.
    pub fn spell_number_str(&self, input: &str) -> Result<String, DocsoError> {
        Ok(self.speller.spell_str(input)?)
    }

    /// Spell a floating-point value that must hold a non-negative integer.
    pub fn spell_number_f64(&self, n: f64) -> Result<String, DocsoError> {
        Ok(self.speller.spell(cardinal_from_f64(n)?))
    }

    // =========================================================================
    // Phone numbers
    // =========================================================================

    /// Validate a phone number against the configured prefix table.
    pub fn validate_phone(&self, raw: &str) -> PhoneValidation {
        self.phone.validate(raw)
    }

    /// Look up the carrier of a phone number.
    pub fn detect_carrier(&self, raw: &str) -> Option<Provider> {
        self.phone.detect_carrier(raw)
    }

    /// Mask all but the last three digits.
    pub fn mask_phone(&self, raw: &str) -> String {
        self.phone.mask(raw)
    }

    /// Group a ten-digit phone number for display.
    pub fn format_phone(&self, raw: &str) -> String {
        format_phone_number(raw)
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Current speller options.
    pub fn speller_options(&self) -> SpellerOptions {
        self.speller.options()
    }

    /// Switch both dialect-dependent words at once.
    pub fn set_dialect(&mut self, dialect: Dialect) {
        self.speller = Speller::new(SpellerOptions::for_dialect(dialect));
    }

    /// Set the word used for the thousand tier.
    pub fn set_thousand_word(&mut self, value: ThousandWord) {
        let options = SpellerOptions {
            thousand: value,
            ..self.speller.options()
        };
        self.speller = Speller::new(options);
    }

    /// Set the linking word placed before a lone unit digit.
    pub fn set_odd_filler(&mut self, value: OddFiller) {
        let options = SpellerOptions {
            odd_filler: value,
            ..self.speller.options()
        };
        self.speller = Speller::new(options);
    }

    /// Replace the phone configuration.
    ///
    /// On error the previous configuration stays in effect.
    pub fn set_phone_config(&mut self, config: PhoneConfig) -> Result<(), DocsoError> {
        self.phone = PhoneValidator::new(config)?;
        Ok(())
    }

    /// Current phone configuration.
    pub fn phone_config(&self) -> &PhoneConfig {
        self.phone.config()
    }
}
