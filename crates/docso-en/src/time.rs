// Clock times as English phrases ("quarter past three").

/// Error type for clock times outside the 12-hour dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    #[error("hour must be between 1 and 12, got {0}")]
    HourOutOfRange(u8),
    #[error("minute must be between 0 and 59, got {0}")]
    MinuteOutOfRange(u8),
}

const DIGITS: [&str; 11] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Tens words indexed by tens digit; 0 and 1 are covered by the tables above.
const TENS: [&str; 6] = ["", "", "twenty", "thirty", "forty", "fifty"];

/// English words for a number in [0, 59]. Returns `None` from 60 upward.
pub fn number_below_60_to_words(n: u8) -> Option<String> {
    match n {
        0..=10 => Some(DIGITS[n as usize].to_string()),
        11..=19 => Some(TEENS[(n - 10) as usize].to_string()),
        20..=59 => {
            let tens = TENS[(n / 10) as usize];
            Some(match n % 10 {
                0 => tens.to_string(),
                unit => format!("{tens} {}", DIGITS[unit as usize]),
            })
        }
        _ => None,
    }
}

/// Word for an hour on the dial; 13 wraps around to one.
fn hour_words(hour: u8) -> String {
    let hour = if hour > 12 { hour - 12 } else { hour };
    // hour is in [1, 12] here
    number_below_60_to_words(hour).unwrap_or_default()
}

/// Spell a time on a 12-hour clock.
///
/// ```
/// use docso_en::time_in_words;
///
/// assert_eq!(time_in_words(5, 0).unwrap(), "five o' clock");
/// assert_eq!(time_in_words(5, 47).unwrap(), "thirteen minutes to six");
/// ```
pub fn time_in_words(hour: u8, minute: u8) -> Result<String, TimeError> {
    if !(1..=12).contains(&hour) {
        return Err(TimeError::HourOutOfRange(hour));
    }
    if minute > 59 {
        return Err(TimeError::MinuteOutOfRange(minute));
    }

    if minute == 0 {
        return Ok(format!("{} o' clock", hour_words(hour)));
    }

    let to_next = minute > 30;
    let relation = if to_next { "to" } else { "past" };
    let hour = hour_words(hour + u8::from(to_next));
    let minutes = if to_next { 60 - minute } else { minute };

    let phrase = match minute {
        15 | 45 => format!("quarter {relation} {hour}"),
        30 => format!("half past {hour}"),
        _ => {
            let words = number_below_60_to_words(minutes).unwrap_or_default();
            let unit = if minutes == 1 { "minute" } else { "minutes" };
            format!("{words} {unit} {relation} {hour}")
        }
    };
    tracing::trace!(minute, %phrase, "time spelled");
    Ok(phrase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spell(h: u8, m: u8) -> String {
        time_in_words(h, m).unwrap()
    }

    #[test]
    fn numbers_below_sixty() {
        assert_eq!(number_below_60_to_words(0).as_deref(), Some("zero"));
        assert_eq!(number_below_60_to_words(10).as_deref(), Some("ten"));
        assert_eq!(number_below_60_to_words(13).as_deref(), Some("thirteen"));
        assert_eq!(number_below_60_to_words(20).as_deref(), Some("twenty"));
        assert_eq!(number_below_60_to_words(29).as_deref(), Some("twenty nine"));
        assert_eq!(number_below_60_to_words(59).as_deref(), Some("fifty nine"));
        assert_eq!(number_below_60_to_words(60), None);
    }

    #[test]
    fn full_hours() {
        assert_eq!(spell(5, 0), "five o' clock");
        assert_eq!(spell(12, 0), "twelve o' clock");
    }

    #[test]
    fn past_the_hour() {
        assert_eq!(spell(5, 1), "one minute past five");
        assert_eq!(spell(5, 10), "ten minutes past five");
        assert_eq!(spell(5, 28), "twenty eight minutes past five");
        assert_eq!(spell(7, 29), "twenty nine minutes past seven");
    }

    #[test]
    fn to_the_next_hour() {
        assert_eq!(spell(5, 40), "twenty minutes to six");
        assert_eq!(spell(5, 47), "thirteen minutes to six");
        assert_eq!(spell(5, 59), "one minute to six");
    }

    #[test]
    fn quarters_and_half() {
        assert_eq!(spell(3, 15), "quarter past three");
        assert_eq!(spell(3, 30), "half past three");
        assert_eq!(spell(3, 45), "quarter to four");
    }

    #[test]
    fn twelve_wraps_to_one() {
        assert_eq!(spell(12, 45), "quarter to one");
        assert_eq!(spell(12, 50), "ten minutes to one");
        assert_eq!(spell(12, 30), "half past twelve");
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(time_in_words(0, 10), Err(TimeError::HourOutOfRange(0)));
        assert_eq!(time_in_words(13, 10), Err(TimeError::HourOutOfRange(13)));
        assert_eq!(time_in_words(3, 60), Err(TimeError::MinuteOutOfRange(60)));
    }
}
