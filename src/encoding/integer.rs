//! Digit-string assembly for Gödel numbers.
//!
//! Format:
//! - Each symbol code is written in decimal.
//! - Consecutive codes are joined with a single separator digit that never occurs inside a code
//!   (see [`crate::encoding::table`]), and the whole digit string is read as one integer.
//! - Codes are positive, so the string never starts with a `0` and parsing loses nothing.
//!
//! Gödel numbers outgrow machine words after a handful of symbols, so parsing always goes
//! through [`BigUint`].
use std::fmt::Write;

use num_bigint::BigUint;

/// Join decimal codes with the separator digit (`0..=9`).
///
/// Notes:
/// - An empty iterator produces an empty string.
/// - `join_codes([6, 1, 4, 1, 7], 0)` is `"601040107"`.
pub fn join_codes<I: IntoIterator<Item = u32>>(codes: I, separator: u8) -> String {
    debug_assert!(separator <= 9);
    let sep = (b'0' + separator) as char;
    let mut out = String::new();
    for (i, code) in codes.into_iter().enumerate() {
        if i > 0 {
            out.push(sep);
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{code}");
    }
    out
}

/// Parse a nonempty string of ASCII decimal digits into an exact integer.
///
/// Returns `None` for an empty string or a non-digit character.
pub fn parse_digits(digits: &str) -> Option<BigUint> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigUint::parse_bytes(digits.as_bytes(), 10)
}

/// Split a digit string at every separator digit.
///
/// This is the inverse of [`join_codes`] for tables whose codes avoid the separator, and is
/// what makes the concatenation unambiguous. It recovers codes only; it does not rebuild terms
/// or formulas.
pub fn split_codes(digits: &str, separator: u8) -> Option<Vec<u32>> {
    let sep = (b'0' + separator) as char;
    digits.split(sep).map(|chunk| chunk.parse().ok()).collect()
}

/// Number of decimal digits of `n` (`1` for zero).
pub fn decimal_len(n: &BigUint) -> usize {
    n.to_str_radix(10).len()
}
