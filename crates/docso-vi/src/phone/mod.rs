// Vietnamese mobile phone number utilities.
//
// Raw input is normalized by removing whitespace and slashes. Validation
// checks the length first and then matches a pattern derived from the
// provider prefix table (see `pattern`). Carrier lookup compares the first
// `prefix_length` characters against the same table.

mod pattern;
pub mod provider;

use hashbrown::HashMap;
use regex::Regex;

pub use provider::{Provider, UnknownProvider};

/// Number of characters in a Vietnamese mobile number.
pub const PHONE_LENGTH: usize = 10;

/// Number of leading characters that identify the carrier.
pub const PREFIX_LENGTH: usize = 3;

/// Error type for phone validator construction.
#[derive(Debug, thiserror::Error)]
pub enum PhoneError {
    /// A prefix leaves no room for subscriber digits.
    #[error("prefix {0} is too long for the configured number length")]
    PrefixTooLong(String),

    /// The generated validation pattern failed to compile.
    #[error("invalid phone pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Outcome of phone number validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneValidation {
    /// Fewer characters than the configured length.
    TooShort,
    /// More characters than the configured length.
    TooLong,
    /// Right length, but no known prefix matches.
    Invalid,
    /// Right length and a known prefix.
    Valid,
}

impl PhoneValidation {
    /// Numeric result code: -2 too short, -1 too long, 0 invalid, 1 valid.
    pub fn code(self) -> i32 {
        match self {
            PhoneValidation::TooShort => -2,
            PhoneValidation::TooLong => -1,
            PhoneValidation::Invalid => 0,
            PhoneValidation::Valid => 1,
        }
    }

    pub fn is_valid(self) -> bool {
        self == PhoneValidation::Valid
    }
}

/// Number length and provider prefix table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneConfig {
    /// Exact number of characters in a valid number.
    pub length: usize,
    /// Number of leading characters used for carrier detection.
    pub prefix_length: usize,
    /// Prefix lists per provider. Earlier entries win carrier lookups.
    pub prefixes: Vec<(Provider, Vec<String>)>,
}

impl PhoneConfig {
    /// Default lengths with a custom prefix table.
    pub fn with_prefixes(prefixes: Vec<(Provider, Vec<String>)>) -> Self {
        Self {
            length: PHONE_LENGTH,
            prefix_length: PREFIX_LENGTH,
            prefixes,
        }
    }
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self::with_prefixes(
            Provider::ALL
                .into_iter()
                .map(|p| {
                    let list = p.default_prefixes().iter().map(|s| s.to_string()).collect();
                    (p, list)
                })
                .collect(),
        )
    }
}

/// Validator and carrier lookup for one prefix table.
#[derive(Debug, Clone)]
pub struct PhoneValidator {
    config: PhoneConfig,
    pattern: Option<Regex>,
    carriers: HashMap<String, Provider>,
}

impl PhoneValidator {
    /// Compile the validation pattern and carrier index for `config`.
    pub fn new(config: PhoneConfig) -> Result<Self, PhoneError> {
        let source = pattern::build_pattern(
            config
                .prefixes
                .iter()
                .flat_map(|(_, list)| list.iter().map(String::as_str)),
            config.length,
        )?;
        tracing::debug!(pattern = source.as_deref().unwrap_or("<none>"), "phone pattern built");
        let pattern = source.as_deref().map(Regex::new).transpose()?;

        let mut carriers = HashMap::new();
        for (provider, list) in &config.prefixes {
            for prefix in list {
                carriers.entry(prefix.clone()).or_insert(*provider);
            }
        }

        Ok(Self {
            config,
            pattern,
            carriers,
        })
    }

    /// The configuration this validator was built from.
    pub fn config(&self) -> &PhoneConfig {
        &self.config
    }

    /// Source of the compiled validation pattern, if the table is not empty.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_ref().map(Regex::as_str)
    }

    /// Validate a raw phone number.
    pub fn validate(&self, raw: &str) -> PhoneValidation {
        let phone = remove_formatting(raw);
        let len = phone.chars().count();
        if len < self.config.length {
            return PhoneValidation::TooShort;
        }
        if len > self.config.length {
            return PhoneValidation::TooLong;
        }
        match &self.pattern {
            Some(re) if re.is_match(&phone) => PhoneValidation::Valid,
            _ => PhoneValidation::Invalid,
        }
    }

    /// Carrier owning the number's prefix.
    pub fn detect_carrier(&self, raw: &str) -> Option<Provider> {
        let phone = remove_formatting(raw);
        let prefix: String = phone.chars().take(self.config.prefix_length).collect();
        if prefix.chars().count() < self.config.prefix_length {
            return None;
        }
        self.carriers.get(&prefix).copied()
    }

    /// Mask all but the last three characters, using the configured length.
    pub fn mask(&self, raw: &str) -> String {
        mask_with_length(raw, self.config.length)
    }
}

/// Remove whitespace and `/` separators.
pub fn remove_formatting(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '/')
        .collect()
}

/// Group a ten-digit number as `dddd ddd ddd`.
///
/// Input longer than ten characters is returned unchanged. Otherwise the
/// cleaned number is returned, grouped when it consists of exactly ten
/// ASCII digits.
pub fn format_phone_number(raw: &str) -> String {
    if raw.chars().count() > PHONE_LENGTH {
        return raw.to_string();
    }
    let cleaned = remove_formatting(raw);
    if cleaned.len() != PHONE_LENGTH || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return cleaned;
    }
    format!("{} {} {}", &cleaned[..4], &cleaned[4..7], &cleaned[7..])
}

/// Replace every character except the last three with `*`.
///
/// Numbers shorter than [`PHONE_LENGTH`] after cleaning yield an empty
/// string.
pub fn mask_phone_number(raw: &str) -> String {
    mask_with_length(raw, PHONE_LENGTH)
}

fn mask_with_length(raw: &str, length: usize) -> String {
    let cleaned = remove_formatting(raw);
    let count = cleaned.chars().count();
    if count < length {
        return String::new();
    }
    cleaned
        .chars()
        .enumerate()
        .map(|(i, c)| if i + 3 < count { '*' } else { c })
        .collect()
}
