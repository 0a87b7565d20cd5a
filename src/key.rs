use lazy_static::lazy_static;
use regex::Regex;
use std::{cmp::Ordering, fmt};

lazy_static! {
    // `\s` does not cover the ASCII separators U+001C..U+001F, which also end a number
    static ref PR_NUMBER_RE: Regex =
        Regex::new(r"#(\d+)[\s\x1c-\x1f]").expect("pull request number regex");
    static ref DECIMAL_RE: Regex = Regex::new(r"^\d$").expect("decimal digit regex");
}

/// A pull request number, the key lines are matched on
///
/// Stored as its decimal digits without leading zeros, so numbers of any size can be compared.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrNumber(String);

impl PrNumber {
    /// Build a number from a run of Unicode decimal digits
    fn from_digits(digits: &str) -> Self {
        let normalized: String = digits
            .chars()
            .map(digit_value)
            .skip_while(|d| *d == 0)
            .filter_map(|d| char::from_digit(d, 10))
            .collect();

        if normalized.is_empty() {
            Self("0".to_owned())
        } else {
            Self(normalized)
        }
    }

    /// The number in ASCII decimal digits
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ord for PrNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for PrNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

fn is_decimal(c: char) -> bool {
    let mut buf = [0; 4];
    DECIMAL_RE.is_match(c.encode_utf8(&mut buf))
}

// Decimal digits are encoded in contiguous runs of ten, zero first, so a digit's value is its
// distance from the start of its run modulo ten.
fn digit_value(c: char) -> u32 {
    if let Some(d) = c.to_digit(10) {
        return d;
    }

    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal(prev) {
            break;
        }
        start -= 1;
    }

    (c as u32 - start) % 10
}

/// Extract the pull request number from a line
///
/// Only the first `#<digits><whitespace>` occurrence in the line is considered, where digits are
/// any Unicode decimal digits. Returns `None` when the line has no such occurrence.
///
/// ```
/// use cherry_compare::extract_key;
///
/// assert_eq!(extract_key("Fix crash (#1234) on exit"), None);
/// assert_eq!(
///     extract_key("Fix crash #1234 on exit").as_ref().map(|key| key.as_str()),
///     Some("1234")
/// );
/// ```
pub fn extract_key(line: &str) -> Option<PrNumber> {
    let caps = PR_NUMBER_RE.captures(line)?;
    Some(PrNumber::from_digits(&caps[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(line: &str) -> Option<String> {
        extract_key(line).map(|key| key.as_str().to_owned())
    }

    #[test]
    fn digits_followed_by_whitespace() {
        assert_eq!(key("fix #101 thing").as_deref(), Some("101"));
        assert_eq!(key("#7\tleading").as_deref(), Some("7"));
        assert_eq!(key("trailing #42 ").as_deref(), Some("42"));
        assert_eq!(key("leading zeros #007 ok").as_deref(), Some("7"));
        assert_eq!(key("all zeros #000 ok").as_deref(), Some("0"));
        assert_eq!(key("non-breaking #9\u{a0}space").as_deref(), Some("9"));
        assert_eq!(key("unit separator #5\u{1f}x").as_deref(), Some("5"));
        assert_eq!(key("file separator #6\u{1c}x").as_deref(), Some("6"));
    }

    #[test]
    fn no_key() {
        assert_eq!(key(""), None);
        assert_eq!(key("no number here"), None);
        assert_eq!(key("at end of line #12"), None);
        assert_eq!(key("merge (#12)"), None);
        assert_eq!(key("# 12 spaced"), None);
        assert_eq!(key("#12abc"), None);
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(key("revert #3 which reverted #2 ").as_deref(), Some("3"));
        // the first `#` is not followed by whitespace so it is skipped
        assert_eq!(key("#12abc then #34 done").as_deref(), Some("34"));
    }

    #[test]
    fn numbers_of_any_size() {
        assert_eq!(
            key("fix #99999999999999999999 x").as_deref(),
            Some("99999999999999999999")
        );
        assert_eq!(
            key("#000018446744073709551616 too big for u64").as_deref(),
            Some("18446744073709551616")
        );
    }

    #[test]
    fn unicode_digits() {
        // ARABIC-INDIC DIGIT THREE
        assert_eq!(key("fix #\u{663} x").as_deref(), Some("3"));
        // FULLWIDTH DIGIT ONE, FULLWIDTH DIGIT TWO
        assert_eq!(key("fix #\u{ff11}\u{ff12} x").as_deref(), Some("12"));
        // MATHEMATICAL MONOSPACE DIGIT SEVEN, the last of several adjacent runs
        assert_eq!(key("fix #\u{1d7fd} x").as_deref(), Some("7"));
        assert_eq!(extract_key("#\u{663} a"), extract_key("#03 b"));
    }

    #[test]
    fn ordering_is_numeric() {
        let small = extract_key("#9 a").unwrap();
        let large = extract_key("#10 b").unwrap();
        assert!(small < large);
        assert_eq!(small.to_string(), "#9");
    }
}
