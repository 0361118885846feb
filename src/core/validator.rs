use crate::domain::model::Issn;
use crate::utils::error::{IssnError, Result};

pub const ISSN_LENGTH: usize = 8;

/// Drops hyphens, trims the ends and upper-cases. Inner whitespace is kept,
/// so `0378 5955` fails the length check.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| *c != '-')
        .collect::<String>()
        .trim()
        .to_uppercase()
}

/// Weighted mod-11 check character for the first seven digits.
///
/// Digit `i` (from the left) is weighted by `8 - i`; a result of 10 is written as `X`.
pub fn check_character(digits: &[u8; 7]) -> char {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| (8 - i as u32) * u32::from(*d))
        .sum();

    match (11 - sum % 11) % 11 {
        10 => 'X',
        check => char::from(b'0' + check as u8),
    }
}

pub fn parse_issn(input: &str) -> Result<Issn> {
    let number = normalize(input);
    let chars: Vec<char> = number.chars().collect();

    if chars.len() != ISSN_LENGTH {
        return Err(IssnError::InvalidLength {
            length: chars.len(),
        });
    }

    let mut digits = [0u8; 7];
    for (slot, c) in digits.iter_mut().zip(&chars[..7]) {
        if !c.is_ascii_digit() {
            return Err(IssnError::InvalidFormat);
        }
        *slot = *c as u8 - b'0';
    }

    let expected = check_character(&digits);
    let found = chars[7];
    if expected != found {
        return Err(IssnError::CheckDigitMismatch { expected, found });
    }

    Ok(Issn::from_validated(number))
}

/// Returns true iff `issn` is a well-formed ISSN with a matching check character.
///
/// The reason for a rejection is logged, never raised.
pub fn is_valid_issn(issn: &str) -> bool {
    match parse_issn(issn) {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("{} (input: {:?})", e, issn);
            false
        }
    }
}
