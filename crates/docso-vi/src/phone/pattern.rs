// Validation pattern built from a provider prefix table.
//
// Prefixes are grouped by their middle part: the prefix with the leading
// trunk digit and the final digit removed. Each group contributes one
// alternative `<middle>[<final digits>][0-9]{n}` where `n` fills the number
// up to its full length. The whole alternation follows a literal `0`.
//
//   "032", "033", "096"  ->  ^0(?:(?:3[23][0-9]{7})|(?:9[6][0-9]{7}))$

use super::PhoneError;

/// Build the anchored pattern source for numbers of `length` characters.
///
/// Returns `Ok(None)` when the table has no usable prefix.
pub(crate) fn build_pattern<'a, I>(prefixes: I, length: usize) -> Result<Option<String>, PhoneError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut groups: Vec<(&'a str, Vec<char>)> = Vec::new();

    for prefix in prefixes {
        let Some(last) = prefix.chars().next_back() else {
            continue;
        };
        let middle = middle_part(prefix);
        match groups.iter_mut().find(|(m, _)| *m == middle) {
            Some((_, finals)) => {
                if !finals.contains(&last) {
                    finals.push(last);
                }
            }
            None => groups.push((middle, vec![last])),
        }
    }

    if groups.is_empty() {
        return Ok(None);
    }

    let mut alternatives = Vec::with_capacity(groups.len());
    for (middle, finals) in groups {
        let middle_len = middle.chars().count();
        let rest = length
            .checked_sub(middle_len + 2)
            .ok_or_else(|| PhoneError::PrefixTooLong(format!("0{middle}")))?;
        let class: String = finals
            .iter()
            .map(|c| regex::escape(c.encode_utf8(&mut [0u8; 4])))
            .collect();
        alternatives.push(format!(
            "(?:{}[{}][0-9]{{{}}})",
            regex::escape(middle),
            class,
            rest
        ));
    }

    Ok(Some(format!("^0(?:{})$", alternatives.join("|"))))
}

/// The prefix without its first and last characters ("0245" -> "24").
fn middle_part(prefix: &str) -> &str {
    let mut chars = prefix.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
