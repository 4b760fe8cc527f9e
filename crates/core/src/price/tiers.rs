//! Short and compact formats: magnitude tiers.

use mulya_shared::types::RoundingMode;
use rust_decimal::Decimal;

use super::full::to_fixed;

/// A magnitude bracket used to abbreviate large amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagnitudeTier {
    /// Smallest value that belongs to this tier; also the divisor.
    pub threshold: u64,
    /// Letter suffix for short format.
    pub suffix: &'static str,
    /// Regional word for compact format.
    pub word: &'static str,
}

/// Tiers in descending order of threshold.
pub static TIERS: [MagnitudeTier; 3] = [
    MagnitudeTier {
        threshold: 10_000_000,
        suffix: "Cr",
        word: "करोड",
    },
    MagnitudeTier {
        threshold: 100_000,
        suffix: "L",
        word: "लाख",
    },
    MagnitudeTier {
        threshold: 1_000,
        suffix: "K",
        word: "हजार",
    },
];

/// Returns the tier a magnitude falls into, or `None` below a thousand.
#[must_use]
pub fn tier_for(magnitude: Decimal) -> Option<&'static MagnitudeTier> {
    TIERS
        .iter()
        .find(|tier| magnitude >= Decimal::from(tier.threshold))
}

/// Scales a magnitude by its tier and renders it with a letter suffix:
/// `1234567 → 12.35L`.
#[must_use]
pub fn format_short(magnitude: Decimal, fraction_digits: u32, rounding: RoundingMode) -> String {
    match tier_for(magnitude) {
        Some(tier) => {
            let scaled = magnitude / Decimal::from(tier.threshold);
            format!("{}{}", to_fixed(scaled, fraction_digits, rounding), tier.suffix)
        }
        None => to_fixed(magnitude, fraction_digits, rounding),
    }
}

/// Scales a magnitude by its tier and renders it with the regional word:
/// `1234567 → 12.35 लाख`.
#[must_use]
pub fn format_compact(magnitude: Decimal, fraction_digits: u32, rounding: RoundingMode) -> String {
    match tier_for(magnitude) {
        Some(tier) => {
            let scaled = magnitude / Decimal::from(tier.threshold);
            format!("{} {}", to_fixed(scaled, fraction_digits, rounding), tier.word)
        }
        None => to_fixed(magnitude, fraction_digits, rounding),
    }
}
