// Vietnamese mobile carriers and their default prefix table.

use std::fmt;
use std::str::FromStr;

/// A Vietnamese mobile network operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Viettel,
    Vinaphone,
    Mobifone,
    Vietnamobile,
    Gmobile,
    Mobicast,
}

impl Provider {
    /// All providers, in default table order.
    pub const ALL: [Provider; 6] = [
        Provider::Viettel,
        Provider::Vinaphone,
        Provider::Mobifone,
        Provider::Vietnamobile,
        Provider::Gmobile,
        Provider::Mobicast,
    ];

    /// Upper-case carrier name.
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Viettel => "VIETTEL",
            Provider::Vinaphone => "VINAPHONE",
            Provider::Mobifone => "MOBIFONE",
            Provider::Vietnamobile => "VIETNAMOBILE",
            Provider::Gmobile => "GMOBILE",
            Provider::Mobicast => "MOBICAST",
        }
    }

    /// Three-digit prefixes assigned to this provider.
    pub fn default_prefixes(self) -> &'static [&'static str] {
        match self {
            Provider::Viettel => &[
                "032", "033", "034", "035", "036", "037", "038", "039", "096", "097", "098",
                "086",
            ],
            Provider::Vinaphone => &[
                "083", "084", "085", "081", "082", "091", "094", "088", "087",
            ],
            Provider::Mobifone => &["070", "079", "077", "076", "078", "090", "093", "089"],
            Provider::Vietnamobile => &["092", "058", "056", "052"],
            Provider::Gmobile => &["099", "059"],
            Provider::Mobicast => &["055"],
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a carrier name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown provider: {0}")]
pub struct UnknownProvider(pub String);

impl FromStr for Provider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Provider::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownProvider(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for p in Provider::ALL {
            assert_eq!(p.as_str().parse::<Provider>(), Ok(p));
        }
        assert_eq!("viettel".parse::<Provider>(), Ok(Provider::Viettel));
        assert!("telco".parse::<Provider>().is_err());
    }

    #[test]
    fn default_prefixes_do_not_overlap() {
        let mut seen = std::collections::HashSet::new();
        for p in Provider::ALL {
            for prefix in p.default_prefixes() {
                assert_eq!(prefix.len(), 3);
                assert!(seen.insert(*prefix), "{prefix} assigned twice");
            }
        }
    }

    #[test]
    fn display_uses_upper_case_name() {
        assert_eq!(Provider::Mobifone.to_string(), "MOBIFONE");
    }
}
