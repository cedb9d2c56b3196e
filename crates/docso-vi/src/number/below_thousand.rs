// Spelling of magnitudes below one thousand.
//
// No tier decomposition happens here. Values of one thousand or more give an
// empty sequence, which the tier converter treats as "nothing at this level".

use docso_core::{Word, WordSequence};

use crate::lexicon::{
    HUNDRED, Lexicon, PLAIN_ONE_AFTER, REDUCED_FIVE, REDUCED_ONE, TEN, TENS_MARKER,
};

/// Spell `n` in [0, 999]. Returns an empty sequence for `n >= 1000`.
pub(crate) fn spell_below_thousand(n: u64, lex: &Lexicon) -> WordSequence {
    if n > 999 {
        return WordSequence::new();
    }
    if n < 100 {
        return spell_below_hundred(n, lex);
    }

    let mut words = WordSequence::with_capacity(5);
    words.push(lex.digit(n / 100));
    words.push(HUNDRED);

    let rest = n % 100;
    if rest > 0 {
        if rest < 10 {
            words.push(lex.odd_filler());
        }
        words.append(spell_below_hundred(rest, lex));
    }
    words
}

/// Spell `n` in [0, 99].
fn spell_below_hundred(n: u64, lex: &Lexicon) -> WordSequence {
    let mut words = WordSequence::with_capacity(3);
    if n < 10 {
        words.push(lex.digit(n));
        return words;
    }

    let tens = n / 10;
    if tens == 1 {
        words.push(TEN);
    } else {
        words.push(lex.digit(tens));
        words.push(TENS_MARKER);
    }

    let unit = n % 10;
    if unit > 0 {
        let prev = words.last().copied();
        words.push(unit_after(prev, unit, lex));
    }
    words
}

/// Unit digit word following a tens place.
fn unit_after(prev: Option<Word>, unit: u64, lex: &Lexicon) -> Word {
    match unit {
        5 => REDUCED_FIVE,
        1 if prev.is_some_and(|w| !PLAIN_ONE_AFTER.contains(&w.role)) => REDUCED_ONE,
        d => lex.digit(d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{OddFiller, ThousandWord};
    use docso_core::WordRole;

    fn north() -> Lexicon {
        Lexicon::new(ThousandWord::Nghin, OddFiller::Linh)
    }

    fn spell(n: u64) -> String {
        spell_below_thousand(n, &north()).render()
    }

    #[test]
    fn single_digits() {
        assert_eq!(spell(0), "không");
        assert_eq!(spell(1), "một");
        assert_eq!(spell(5), "năm");
        assert_eq!(spell(9), "chín");
    }

    #[test]
    fn teens() {
        assert_eq!(spell(10), "mười");
        assert_eq!(spell(11), "mười một");
        assert_eq!(spell(15), "mười lăm");
        assert_eq!(spell(18), "mười tám");
    }

    #[test]
    fn tens() {
        assert_eq!(spell(20), "hai mươi");
        assert_eq!(spell(21), "hai mươi mốt");
        assert_eq!(spell(25), "hai mươi lăm");
        assert_eq!(spell(31), "ba mươi mốt");
        assert_eq!(spell(47), "bốn mươi bảy");
        assert_eq!(spell(99), "chín mươi chín");
    }

    #[test]
    fn hundreds() {
        assert_eq!(spell(100), "một trăm");
        assert_eq!(spell(305), "ba trăm linh năm");
        assert_eq!(spell(478), "bốn trăm bảy mươi tám");
        assert_eq!(spell(902), "chín trăm linh hai");
        assert_eq!(spell(111), "một trăm mười một");
        assert_eq!(spell(101), "một trăm linh một");
        assert_eq!(spell(115), "một trăm mười lăm");
        assert_eq!(spell(251), "hai trăm năm mươi mốt");
    }

    #[test]
    fn out_of_range_is_empty() {
        assert!(spell_below_thousand(1000, &north()).is_empty());
        assert!(spell_below_thousand(u64::MAX, &north()).is_empty());
    }

    #[test]
    fn southern_filler() {
        let south = Lexicon::new(ThousandWord::Ngan, OddFiller::Le);
        assert_eq!(spell_below_thousand(305, &south).render(), "ba trăm lẻ năm");
    }

    #[test]
    fn roles_are_tagged() {
        let words = spell_below_thousand(215, &north());
        let roles: Vec<WordRole> = words.iter().map(|w| w.role).collect();
        assert_eq!(
            roles,
            vec![
                WordRole::Digit,
                WordRole::Hundred,
                WordRole::Ten,
                WordRole::ReducedDigit
            ]
        );
    }

    #[test]
    fn reduced_one_only_after_tens_marker() {
        assert_eq!(unit_after(Some(TEN), 1, &north()).text, "một");
        assert_eq!(unit_after(Some(TENS_MARKER), 1, &north()).text, "mốt");
        assert_eq!(unit_after(None, 1, &north()).text, "một");
    }
}
