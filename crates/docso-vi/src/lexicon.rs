// Vietnamese numeral lexicon.
//
// Every word a speller can emit is listed here. Words that differ between
// the northern and southern reading (the thousand tier and the linking word
// before a lone unit digit) appear in both forms; `Lexicon` picks one set at
// construction time.

use docso_core::{Word, WordRole};

/// Digit words 0-9, indexed by digit value.
pub(crate) const DIGITS: [Word; 10] = [
    Word::new("không", WordRole::Digit),
    Word::new("một", WordRole::Digit),
    Word::new("hai", WordRole::Digit),
    Word::new("ba", WordRole::Digit),
    Word::new("bốn", WordRole::Digit),
    Word::new("năm", WordRole::Digit),
    Word::new("sáu", WordRole::Digit),
    Word::new("bảy", WordRole::Digit),
    Word::new("tám", WordRole::Digit),
    Word::new("chín", WordRole::Digit),
];

/// Reduced five, used as the unit digit of any two-digit composition.
pub(crate) const REDUCED_FIVE: Word = Word::new("lăm", WordRole::ReducedDigit);

/// Reduced one, used as the unit digit after a tens marker.
pub(crate) const REDUCED_ONE: Word = Word::new("mốt", WordRole::ReducedDigit);

/// Irregular ten, spelling a tens digit of one.
pub(crate) const TEN: Word = Word::new("mười", WordRole::Ten);

/// Marker following a tens digit of two or more.
pub(crate) const TENS_MARKER: Word = Word::new("mươi", WordRole::TensMarker);

/// Hundred unit name.
pub(crate) const HUNDRED: Word = Word::new("trăm", WordRole::Hundred);

/// Words spelling an empty hundreds place after a tier name.
pub(crate) const EMPTY_HUNDREDS: [Word; 2] = [
    Word::new("không", WordRole::EmptyHundreds),
    Word::new("trăm", WordRole::EmptyHundreds),
];

/// Roles after which a unit digit of one keeps its plain form.
///
/// "mười một" (eleven) is never reduced to "mười mốt".
pub(crate) const PLAIN_ONE_AFTER: &[WordRole] = &[WordRole::Ten];

/// A power-of-one-thousand grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tier {
    pub multiplier: u64,
    pub power: u8,
}

/// Unit tiers ordered from largest to smallest.
///
/// Billions are the highest named tier; larger magnitudes spell the billion
/// count recursively ("một nghìn tỷ").
pub(crate) const TIERS: [Tier; 3] = [
    Tier {
        multiplier: 1_000_000_000,
        power: 3,
    },
    Tier {
        multiplier: 1_000_000,
        power: 2,
    },
    Tier {
        multiplier: 1_000,
        power: 1,
    },
];

const THOUSAND_NORTH: Word = Word::new("nghìn", WordRole::Tier { power: 1 });
const THOUSAND_SOUTH: Word = Word::new("ngàn", WordRole::Tier { power: 1 });
const MILLION: Word = Word::new("triệu", WordRole::Tier { power: 2 });
const BILLION: Word = Word::new("tỷ", WordRole::Tier { power: 3 });

const LINH: Word = Word::new("linh", WordRole::Filler);
const LE: Word = Word::new("lẻ", WordRole::Filler);

/// Word for a thousand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThousandWord {
    /// "nghìn", the northern form.
    #[default]
    Nghin,
    /// "ngàn", the southern form.
    Ngan,
}

/// Linking word placed before a lone unit digit ("một trăm linh năm").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OddFiller {
    /// "linh", the northern form.
    #[default]
    Linh,
    /// "lẻ", the southern form.
    Le,
}

/// Resolved word set for one speller configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Lexicon {
    thousand: Word,
    odd_filler: Word,
}

impl Lexicon {
    pub(crate) fn new(thousand: ThousandWord, odd_filler: OddFiller) -> Self {
        Self {
            thousand: match thousand {
                ThousandWord::Nghin => THOUSAND_NORTH,
                ThousandWord::Ngan => THOUSAND_SOUTH,
            },
            odd_filler: match odd_filler {
                OddFiller::Linh => LINH,
                OddFiller::Le => LE,
            },
        }
    }

    /// Word for a single digit. Only the low decimal digit of `d` is used.
    pub(crate) fn digit(&self, d: u64) -> Word {
        DIGITS[(d % 10) as usize]
    }

    /// Name of the tier with the given power of one thousand.
    pub(crate) fn tier(&self, power: u8) -> Word {
        match power {
            1 => self.thousand,
            2 => MILLION,
            _ => BILLION,
        }
    }

    pub(crate) fn odd_filler(&self) -> Word {
        self.odd_filler
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_table_has_ten_plain_digits() {
        assert_eq!(DIGITS.len(), 10);
        assert!(DIGITS.iter().all(|w| w.role == WordRole::Digit));
        assert_eq!(DIGITS[0].text, "không");
        assert_eq!(DIGITS[9].text, "chín");
    }

    #[test]
    fn tier_multipliers_are_powers_of_one_thousand() {
        for tier in TIERS {
            assert_eq!(tier.multiplier, 1000u64.pow(u32::from(tier.power)));
        }
        // Largest first.
        assert!(TIERS.windows(2).all(|w| w[0].multiplier > w[1].multiplier));
    }

    #[test]
    fn lexicon_variants() {
        let north = Lexicon::new(ThousandWord::Nghin, OddFiller::Linh);
        assert_eq!(north.tier(1).text, "nghìn");
        assert_eq!(north.odd_filler().text, "linh");

        let south = Lexicon::new(ThousandWord::Ngan, OddFiller::Le);
        assert_eq!(south.tier(1).text, "ngàn");
        assert_eq!(south.tier(1).role, WordRole::Tier { power: 1 });
        assert_eq!(south.odd_filler().text, "lẻ");
    }

    #[test]
    fn higher_tiers_do_not_vary() {
        let north = Lexicon::new(ThousandWord::Nghin, OddFiller::Linh);
        let south = Lexicon::new(ThousandWord::Ngan, OddFiller::Le);
        assert_eq!(north.tier(2), south.tier(2));
        assert_eq!(north.tier(3).text, "tỷ");
    }
}
