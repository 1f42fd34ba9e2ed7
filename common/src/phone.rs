//! Phone number normalization for the contact field.
//!
//! Input is normalized as the visitor types: everything but ASCII digits is
//! dropped, at most 11 digits are kept, and dashes are re-inserted after the
//! 3rd and 7th digit. Only Korean mobile numbers (`010-XXXX-XXXX`) are
//! accepted on submit.

use regex::Regex;
use std::sync::LazyLock;

/// Message shown for a phone number that does not match `010-XXXX-XXXX`.
pub const INVALID_PHONE_MESSAGE: &str = "올바른 전화번호 형식이 아니에요";

/// Length of a fully formatted number (`010-1234-5678`).
pub const FORMATTED_LEN: usize = 13;

const MAX_DIGITS: usize = 11;

static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^010-[0-9]{4}-[0-9]{4}$").expect("static phone pattern"));

/// Strips non-digits and formats what is left as `XXX-XXXX-XXXX`.
///
/// Partial input yields partial groups (`010`, `010-12`, `010-1234-5`).
pub fn format_phone_number(value: &str) -> String {
    let digits: String = value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_DIGITS)
        .collect();

    match digits.len() {
        0..=3 => digits,
        4..=7 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => format!("{}-{}-{}", &digits[..3], &digits[3..7], &digits[7..]),
    }
}

/// Accepts exactly `010-` followed by four digits, a dash and four digits.
pub fn validate_phone_number(phone: &str) -> bool {
    MOBILE_RE.is_match(phone)
}

/// Live feedback for the contact field while typing.
///
/// A complete-length number is judged immediately; clearing the field clears
/// the error; any intermediate length keeps whatever was shown before.
pub fn contact_feedback(formatted: &str, current: Option<&'static str>) -> Option<&'static str> {
    if formatted.is_empty() {
        None
    } else if formatted.len() == FORMATTED_LEN {
        (!validate_phone_number(formatted)).then_some(INVALID_PHONE_MESSAGE)
    } else {
        current
    }
}
