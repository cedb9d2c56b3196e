// Strict parsing of cardinal numbers from text and foreign numeric types.
//
// Spellers are defined over `u64`. Anything coming from the outside (command
// line, JavaScript numbers, C integers) goes through these helpers, which
// reject negative and fractional values instead of guessing.

/// Error type for values that are not non-negative integers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumberError {
    /// The input was empty or whitespace only.
    #[error("empty number")]
    Empty,

    /// The input denotes a negative number.
    #[error("negative numbers cannot be spelled: {0}")]
    Negative(String),

    /// The input has a fractional part or is not a finite number.
    #[error("not an integer: {0}")]
    NotInteger(String),

    /// The input contains a character that is not an ASCII digit.
    #[error("invalid character {ch:?} at position {pos}")]
    InvalidDigit { ch: char, pos: usize },

    /// The value does not fit in 64 bits.
    #[error("number too large: {0}")]
    Overflow(String),
}

/// Parse a non-negative decimal integer.
///
/// Surrounding whitespace and a single leading `+` are accepted. A leading
/// `-` yields [`NumberError::Negative`], a decimal point or comma yields
/// [`NumberError::NotInteger`], and any other non-digit character yields
/// [`NumberError::InvalidDigit`] with its character position in the trimmed
/// input.
pub fn parse_cardinal(input: &str) -> Result<u64, NumberError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(NumberError::Empty);
    }

    let (digits, offset) = match s.strip_prefix('+') {
        Some(rest) => (rest, 1),
        None if s.starts_with('-') => return Err(NumberError::Negative(s.to_string())),
        None => (s, 0),
    };
    if digits.is_empty() {
        return Err(NumberError::Empty);
    }

    let mut value: u64 = 0;
    for (i, ch) in digits.chars().enumerate() {
        let d = match ch {
            '0'..='9' => u64::from(ch as u8 - b'0'),
            '.' | ',' => return Err(NumberError::NotInteger(s.to_string())),
            _ => return Err(NumberError::InvalidDigit { ch, pos: i + offset }),
        };
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(d))
            .ok_or_else(|| NumberError::Overflow(s.to_string()))?;
    }
    Ok(value)
}

/// Convert a signed integer, rejecting negative values.
pub fn cardinal_from_i64(n: i64) -> Result<u64, NumberError> {
    u64::try_from(n).map_err(|_| NumberError::Negative(n.to_string()))
}

/// Convert a floating-point value, rejecting negative, fractional,
/// non-finite and out-of-range values.
///
/// JavaScript hands every number over as an `f64`, so this is the entry
/// point used by the WebAssembly bindings.
pub fn cardinal_from_f64(n: f64) -> Result<u64, NumberError> {
    if !n.is_finite() || n.fract() != 0.0 {
        return Err(NumberError::NotInteger(n.to_string()));
    }
    if n < 0.0 {
        return Err(NumberError::Negative(n.to_string()));
    }
    // 2^64 is exactly representable; everything below it converts losslessly
    // because integral f64 values above 2^53 are already integers.
    if n >= 18_446_744_073_709_551_616.0 {
        return Err(NumberError::Overflow(n.to_string()));
    }
    Ok(n as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_digits() {
        assert_eq!(parse_cardinal("0"), Ok(0));
        assert_eq!(parse_cardinal("1234567890"), Ok(1_234_567_890));
    }

    #[test]
    fn trims_whitespace_and_plus() {
        assert_eq!(parse_cardinal("  42 \n"), Ok(42));
        assert_eq!(parse_cardinal("+7"), Ok(7));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(parse_cardinal(""), Err(NumberError::Empty));
        assert_eq!(parse_cardinal("   "), Err(NumberError::Empty));
        assert_eq!(parse_cardinal("+"), Err(NumberError::Empty));
    }

    #[test]
    fn rejects_negative() {
        assert_eq!(
            parse_cardinal("-5"),
            Err(NumberError::Negative("-5".to_string()))
        );
    }

    #[test]
    fn rejects_fraction() {
        assert_eq!(
            parse_cardinal("1.5"),
            Err(NumberError::NotInteger("1.5".to_string()))
        );
        assert_eq!(
            parse_cardinal("1,000"),
            Err(NumberError::NotInteger("1,000".to_string()))
        );
    }

    #[test]
    fn reports_position_of_invalid_character() {
        assert_eq!(
            parse_cardinal("12x4"),
            Err(NumberError::InvalidDigit { ch: 'x', pos: 2 })
        );
        assert_eq!(
            parse_cardinal("+1a"),
            Err(NumberError::InvalidDigit { ch: 'a', pos: 2 })
        );
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Arabic-Indic digit three
        assert!(matches!(
            parse_cardinal("\u{0663}"),
            Err(NumberError::InvalidDigit { pos: 0, .. })
        ));
    }

    #[test]
    fn max_u64_and_overflow() {
        assert_eq!(parse_cardinal("18446744073709551615"), Ok(u64::MAX));
        assert!(matches!(
            parse_cardinal("18446744073709551616"),
            Err(NumberError::Overflow(_))
        ));
    }

    #[test]
    fn signed_conversion() {
        assert_eq!(cardinal_from_i64(12), Ok(12));
        assert_eq!(
            cardinal_from_i64(-1),
            Err(NumberError::Negative("-1".to_string()))
        );
    }

    #[test]
    fn float_conversion() {
        assert_eq!(cardinal_from_f64(1015.0), Ok(1015));
        assert!(matches!(cardinal_from_f64(2.5), Err(NumberError::NotInteger(_))));
        assert!(matches!(cardinal_from_f64(f64::NAN), Err(NumberError::NotInteger(_))));
        assert!(matches!(
            cardinal_from_f64(f64::INFINITY),
            Err(NumberError::NotInteger(_))
        ));
        assert!(matches!(cardinal_from_f64(-3.0), Err(NumberError::Negative(_))));
        assert!(matches!(cardinal_from_f64(1e20), Err(NumberError::Overflow(_))));
    }

    #[test]
    fn error_messages() {
        assert_eq!(NumberError::Empty.to_string(), "empty number");
        assert_eq!(
            NumberError::InvalidDigit { ch: 'x', pos: 2 }.to_string(),
            "invalid character 'x' at position 2"
        );
    }
}
