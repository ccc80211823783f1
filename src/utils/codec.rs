//! Bijective conversion between mapping ids and short codes.
//!
//! Ids are written in base 49 over an alphabet without vowels (no accidental
//! words) and without the look-alike glyphs `I`, `l`, `1`, `O` and `0`.
//!
//! ```text
//! 123456789 <=> CBx5v
//! ```

use thiserror::Error;

/// Digits of the short code alphabet, ordered by value (`b` is zero).
pub const ALPHABET: &[u8; 49] = b"bcdfghjkmnpqrstvwxyzBCDFGHJKLMNPQRSTVWXYZ23456789";

/// Radix of the encoding.
pub const BASE: u64 = ALPHABET.len() as u64;

/// Errors produced when decoding a short code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Short code contains '{character}' which is not part of the alphabet")]
    InvalidShortCode { character: char },

    #[error("Short code '{code}' decodes to a value larger than u64::MAX")]
    ShortCodeOverflow { code: String },
}

/// Encodes `num` as a short code.
///
/// The least-significant digit is rightmost. Zero encodes to the empty string,
/// so a non-zero id never yields a code starting with `b`.
///
/// # Examples
///
/// ```
/// use tinyurl::utils::codec::num_to_str;
///
/// assert_eq!(num_to_str(1), "c");
/// assert_eq!(num_to_str(123_456_789), "CBx5v");
/// assert_eq!(num_to_str(0), "");
/// ```
pub fn num_to_str(mut num: u64) -> String {
    let mut digits = Vec::new();

    while num > 0 {
        digits.push(ALPHABET[(num % BASE) as usize]);
        num /= BASE;
    }

    digits.iter().rev().map(|&d| d as char).collect()
}

/// Decodes a short code back into its id.
///
/// The empty string decodes to zero.
///
/// # Errors
///
/// Returns [`CodecError::InvalidShortCode`] for any character outside
/// [`ALPHABET`] and [`CodecError::ShortCodeOverflow`] when the value does not
/// fit in a `u64`.
///
/// # Examples
///
/// ```
/// use tinyurl::utils::codec::str_to_num;
///
/// assert_eq!(str_to_num("CBx5v"), Ok(123_456_789));
/// assert!(str_to_num("abc").is_err());
/// ```
pub fn str_to_num(code: &str) -> Result<u64, CodecError> {
    code.chars().try_fold(0u64, |num, character| {
        let digit = digit_value(character).ok_or(CodecError::InvalidShortCode { character })?;

        num.checked_mul(BASE)
            .and_then(|n| n.checked_add(digit))
            .ok_or_else(|| CodecError::ShortCodeOverflow {
                code: code.to_string(),
            })
    })
}

fn digit_value(character: char) -> Option<u64> {
    if !character.is_ascii() {
        return None;
    }

    ALPHABET
        .iter()
        .position(|&d| d == character as u8)
        .map(|index| index as u64)
}
