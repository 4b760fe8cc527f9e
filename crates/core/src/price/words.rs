//! Amounts in words, using the Nepali numbering system.
//!
//! Numbers are decomposed against the regional ladder (सय, हजार, लाख,
//! करोड, ...) rather than powers of a thousand, so `100000` reads
//! `एक लाख`. Two-digit numbers are composed from the tens and units
//! tables (`25 → बीस पाँच`).

use std::fmt::Write;

use mulya_shared::types::{Currency, RoundingMode};
use mulya_shared::{FormatError, FormatResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const UNITS: [&str; 10] = ["", "एक", "दुई", "तीन", "चार", "पाँच", "छ", "सात", "आठ", "नौ"];

const TEENS: [&str; 10] = [
    "दस", "एघार", "बाह्र", "तेह्र", "चौध", "पन्ध्र", "सोह्र", "सत्र", "अठार", "उन्नाइस",
];

const TENS: [&str; 10] = [
    "", "", "बीस", "तीस", "चालीस", "पचास", "साठी", "सत्तरी", "अस्सी", "नब्बे",
];

/// Named magnitude in the regional ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordTier {
    /// Value of one unit of this tier.
    pub value: u64,
    /// Name of the tier.
    pub name: &'static str,
}

/// Regional ladder in ascending order.
pub static WORD_TIERS: [WordTier; 9] = [
    WordTier { value: 100, name: "सय" },
    WordTier { value: 1_000, name: "हजार" },
    WordTier { value: 100_000, name: "लाख" },
    WordTier { value: 10_000_000, name: "करोड" },
    WordTier { value: 1_000_000_000, name: "अर्ब" },
    WordTier { value: 100_000_000_000, name: "खर्ब" },
    WordTier { value: 10_000_000_000_000, name: "नील" },
    WordTier { value: 1_000_000_000_000_000, name: "पद्म" },
    WordTier { value: 100_000_000_000_000_000, name: "शंख" },
];

/// Integer parts at or above this (a hundred शंख) cannot be spelled out.
pub const WORDS_LIMIT: u64 = 10_000_000_000_000_000_000;

/// Word for a zero whole part.
pub const ZERO_WORD: &str = "शून्य";

/// Joins the main-unit and subunit phrases.
pub const CONJUNCTION: &str = "र";

/// Spells out a whole number. Zero yields an empty string.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn number_to_words(n: u64) -> String {
    match n {
        0 => String::new(),
        1..=9 => UNITS[n as usize].to_owned(),
        10..=19 => TEENS[(n - 10) as usize].to_owned(),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_owned(),
                unit => format!("{tens} {}", UNITS[unit as usize]),
            }
        }
        _ => WORD_TIERS
            .iter()
            .rev()
            .find(|tier| n >= tier.value)
            .map_or_else(String::new, |tier| {
                let head = number_to_words(n / tier.value);
                let rest = number_to_words(n % tier.value);
                format!("{head} {} {rest}", tier.name).trim_end().to_owned()
            }),
    }
}

/// Spells out a non-negative amount with its unit and subunit words:
/// `125.50 → एक सय बीस पाँच रुपैया र पचास पैसा`.
///
/// The amount is rounded to two decimals first, so `1.999` reads as two
/// whole units.
///
/// # Errors
///
/// Returns `FormatError::MagnitudeOverflow` when the whole part reaches
/// [`WORDS_LIMIT`].
pub fn amount_in_words(
    magnitude: Decimal,
    currency: Currency,
    rounding: RoundingMode,
) -> FormatResult<String> {
    let rounded = magnitude
        .abs()
        .round_dp_with_strategy(2, rounding.strategy());
    let whole = rounded.trunc();
    let overflow = || FormatError::MagnitudeOverflow(whole.to_string());
    if whole >= Decimal::from(WORDS_LIMIT) {
        return Err(overflow());
    }

    let units = whole.to_u64().ok_or_else(overflow)?;
    let subunits = ((rounded - whole) * Decimal::ONE_HUNDRED)
        .to_u64()
        .ok_or_else(overflow)?;

    let mut words = if units == 0 {
        ZERO_WORD.to_owned()
    } else {
        number_to_words(units)
    };
    words.push(' ');
    words.push_str(currency.unit_word());

    if subunits > 0 {
        let _ = write!(
            words,
            " {CONJUNCTION} {} {}",
            number_to_words(subunits),
            currency.subunit_word()
        );
    }

    Ok(words)
}
