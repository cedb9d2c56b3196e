// Tier decomposition and filler correction for full numbers.
//
// The converter folds over the tier table from billions down to thousands,
// threading the remaining magnitude and the words emitted so far. Counts of
// a tier are spelled recursively, so the billion count may itself contain
// tier names ("một nghìn tỷ").

use docso_core::{WordRole, WordSequence};

use super::below_thousand::spell_below_thousand;
use crate::lexicon::{DIGITS, EMPTY_HUNDREDS, Lexicon, TIERS};

/// Spell any `u64`, including the empty-hundreds correction.
pub(crate) fn spell_full(n: u64, lex: &Lexicon) -> WordSequence {
    if n < 10 {
        return WordSequence::from(vec![DIGITS[n as usize]]);
    }
    let mut words = spell_tiers(n, lex);
    insert_empty_hundreds(n, &mut words);
    words
}

/// Decompose `n` by tier without the empty-hundreds correction.
///
/// A lone unit digit left after the last tier is linked with the odd filler
/// ("một nghìn linh một").
pub(crate) fn spell_tiers(n: u64, lex: &Lexicon) -> WordSequence {
    if n < 1000 {
        return spell_below_thousand(n, lex);
    }

    let (remaining, mut words) =
        TIERS
            .iter()
            .fold((n, WordSequence::new()), |(remaining, mut words), tier| {
                let count = remaining / tier.multiplier;
                if count > 0 {
                    words.append(spell_tiers(count, lex));
                    words.push(lex.tier(tier.power));
                }
                (remaining - count * tier.multiplier, words)
            });

    if remaining == 0 {
        return words;
    }
    if remaining < 10 && words.last().is_some_and(|w| w.role.is_tier()) {
        words.push(lex.odd_filler());
    }
    words.append(spell_below_thousand(remaining, lex));
    words
}

/// Splice "không trăm" after the last tier name when the hundreds place of
/// the final group is empty but the group itself is not.
///
/// Applies when `n > 1000` and `n % 1000` lies in [1, 99]. Running it again on
/// its own output changes nothing.
pub(crate) fn insert_empty_hundreds(n: u64, words: &mut WordSequence) {
    let rest = n % 1000;
    if n <= 1000 || rest == 0 || rest >= 100 {
        return;
    }
    let Some(pos) = words.last_tier_position() else {
        return;
    };
    let already = words
        .as_slice()
        .get(pos + 1)
        .is_some_and(|w| w.role == WordRole::EmptyHundreds);
    if !already {
        words.splice_at(pos + 1, &EMPTY_HUNDREDS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{OddFiller, ThousandWord};

    fn north() -> Lexicon {
        Lexicon::new(ThousandWord::Nghin, OddFiller::Linh)
    }

    fn spell(n: u64) -> String {
        spell_full(n, &north()).render()
    }

    #[test]
    fn small_values_pass_through() {
        assert_eq!(spell(0), "không");
        assert_eq!(spell(5), "năm");
        assert_eq!(spell(15), "mười lăm");
        assert_eq!(spell(305), "ba trăm linh năm");
    }

    #[test]
    fn thousand_boundaries() {
        assert_eq!(spell(1000), "một nghìn");
        assert_eq!(spell(1001), "một nghìn không trăm linh một");
        assert_eq!(spell(1010), "một nghìn không trăm mười");
        assert_eq!(spell(1100), "một nghìn một trăm");
        assert_eq!(spell(1101), "một nghìn một trăm linh một");
        assert_eq!(spell(1111), "một nghìn một trăm mười một");
    }

    #[test]
    fn empty_tier_between_populated_ones() {
        assert_eq!(spell(1_000_500), "một triệu năm trăm");
        assert_eq!(spell(1_000_000_001), "một tỷ không trăm linh một");
        assert_eq!(spell(2_000_450_000), "hai tỷ bốn trăm năm mươi nghìn");
    }

    #[test]
    fn tiers_without_correction() {
        let words = spell_tiers(1015, &north());
        assert_eq!(words.render(), "một nghìn mười lăm");
        let words = spell_tiers(5005, &north());
        assert_eq!(words.render(), "năm nghìn linh năm");
    }

    #[test]
    fn billion_count_above_999_recurses() {
        assert_eq!(spell(1_000_000_000_000), "một nghìn tỷ");
        assert_eq!(spell(10_000_000_000), "mười tỷ");
        assert_eq!(
            spell(1_000_000_000_007),
            "một nghìn tỷ không trăm linh bảy"
        );
    }

    #[test]
    fn correction_is_idempotent() {
        for n in [1001u64, 1015, 5005, 1_000_000_001, 2_000_050, 7_000_000_099] {
            let mut once = spell_tiers(n, &north());
            insert_empty_hundreds(n, &mut once);
            let mut twice = once.clone();
            insert_empty_hundreds(n, &mut twice);
            assert_eq!(once, twice, "correction not idempotent for {n}");
        }
    }

    #[test]
    fn correction_ignores_ineligible_numbers() {
        for n in [1000u64, 1100, 2000, 999, 45] {
            let before = spell_tiers(n, &north());
            let mut after = before.clone();
            insert_empty_hundreds(n, &mut after);
            assert_eq!(before, after, "unexpected correction for {n}");
        }
    }

    #[test]
    fn u64_max_spells() {
        let words = spell_full(u64::MAX, &north());
        assert_eq!(
            words.render(),
            "mười tám tỷ bốn trăm bốn mươi sáu triệu bảy trăm bốn mươi bốn nghìn \
             bảy mươi ba tỷ bảy trăm linh chín triệu năm trăm năm mươi mốt nghìn \
             sáu trăm mười lăm"
        );
    }
}
