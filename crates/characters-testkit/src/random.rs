// crates/characters-testkit/src/random.rs
// ============================================================================
// Module: Random Generators
// Description: Random strings and numbers for fixture payloads.
// Purpose: Keep fixture field values unique across suite runs.
// Dependencies: rand
// ============================================================================

//! ## Overview
//! Plain `rand`-backed generators. The decimal generator renders a digit
//! string first so its shape rules hold exactly: the integer part never
//! starts with `0` and the fraction never ends with `0`. Callers that need
//! to assert on the rendered form use [`random_decimal_text`] directly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use rand::Rng;
use rand::distributions::Alphanumeric;
use rand::thread_rng;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Largest decimal digit count that still fits in a `u64`.
const MAX_INTEGER_DIGITS: u32 = 19;

// ============================================================================
// SECTION: Generators
// ============================================================================

/// Returns a random ASCII alphanumeric string of the given length.
#[must_use]
pub fn random_alphanumeric(length: usize) -> String {
    thread_rng().sample_iter(&Alphanumeric).take(length).map(char::from).collect()
}

/// Returns a random non-negative integer of at most `digits` decimal digits.
///
/// `digits` is clamped to `1..=19`. Values may render with fewer digits when
/// leading zeros are drawn.
#[must_use]
pub fn random_integer(digits: u32) -> u64 {
    let digits = digits.clamp(1, MAX_INTEGER_DIGITS);
    let bound = 10_u64.saturating_pow(digits);
    thread_rng().gen_range(0..bound)
}

/// Returns a random decimal with the given integer and fraction digit counts.
///
/// Digit counts are clamped to at least one. See [`random_decimal_text`] for
/// the shape rules of the rendered form.
#[must_use]
pub fn random_decimal(int_digits: u32, frac_digits: u32) -> f64 {
    random_decimal_text(int_digits, frac_digits).parse().unwrap_or_default()
}

/// Renders a random decimal as text before any float conversion.
///
/// The first integer digit is drawn from `1..=9` and the final fraction
/// digit from `1..=9`, so the rendered number carries exactly the requested
/// digit counts with no leading or trailing zero.
#[must_use]
pub fn random_decimal_text(int_digits: u32, frac_digits: u32) -> String {
    let int_digits = int_digits.max(1);
    let frac_digits = frac_digits.max(1);
    let mut rng = thread_rng();
    let mut text = String::new();
    text.push(digit_char(rng.gen_range(1..=9)));
    for _ in 1..int_digits {
        text.push(digit_char(rng.gen_range(0..=9)));
    }
    text.push('.');
    for _ in 1..frac_digits {
        text.push(digit_char(rng.gen_range(0..=9)));
    }
    text.push(digit_char(rng.gen_range(1..=9)));
    text
}

/// Maps a digit value in `0..=9` to its ASCII character.
fn digit_char(digit: u8) -> char {
    char::from(b'0' + (digit % 10))
}
