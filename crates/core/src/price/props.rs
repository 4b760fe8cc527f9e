//! Property-based tests for price formatting.
//!
//! - Property 1: Full Format Preserves Order
//! - Property 2: Sign Handling
//! - Property 3: Symbol Stripping
//! - Property 4: Invalid Input Fallback
//! - Property 5: Tier Selection
//! - Property 6: Words Spacing
//! - Property 7: Exact Fraction Digits

use mulya_shared::types::{
    Amount, CURRENCY_GLYPHS, Currency, DisplayFormat, MAX_FRACTION_DIGITS, RoundingMode,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::options::FormatOptions;
use super::service::{PriceFormatter, strip_symbols};
use super::tiers::format_short;
use super::words::{WORDS_LIMIT, number_to_words};

/// Strategy to generate non-negative amounts (0.00 to 100,000,000,000.00).
fn non_negative_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000_000_000i64).prop_map(|paisa| Decimal::new(paisa, 2))
}

/// Strategy to generate positive amounts (0.01 to 100,000,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000_000_000i64).prop_map(|paisa| Decimal::new(paisa, 2))
}

/// Strategy covering the whole `Decimal` range: any 96-bit mantissa, sign
/// and scale.
fn any_decimal() -> impl Strategy<Value = Decimal> {
    (any::<u32>(), any::<u32>(), any::<u32>(), any::<bool>(), 0u32..=28).prop_map(
        |(lo, mid, hi, negative, scale)| Decimal::from_parts(lo, mid, hi, negative, scale),
    )
}

fn rounding_strategy() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![Just(RoundingMode::HalfUp), Just(RoundingMode::HalfEven)]
}

/// Counts the digits after the decimal point, or `None` without one.
fn fraction_len(formatted: &str) -> Option<usize> {
    formatted
        .split_once('.')
        .map(|(_, tail)| tail.chars().take_while(char::is_ascii_digit).count())
}

fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![Just(Currency::Npr), Just(Currency::Usd), Just(Currency::Inr)]
}

fn display_strategy() -> impl Strategy<Value = DisplayFormat> {
    prop_oneof![
        Just(DisplayFormat::Full),
        Just(DisplayFormat::Short),
        Just(DisplayFormat::Compact),
        Just(DisplayFormat::Words),
    ]
}

/// Reads the number back out of a full-format string.
fn parse_full(formatted: &str) -> Decimal {
    strip_symbols(formatted)
        .replace(',', "")
        .parse()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Property 1: Full Format Preserves Order
    // =========================================================================

    /// *For any* `a1 < a2` with two decimals, the numbers printed by full
    /// format keep the same order.
    #[test]
    fn prop_full_format_preserves_order(
        low in non_negative_amount(),
        gap in 1i64..1_000_000_000i64,
        currency in currency_strategy(),
    ) {
        let high = low + Decimal::new(gap, 2);
        let options = FormatOptions::default();

        let low_text = PriceFormatter::format(low, currency, DisplayFormat::Full, &options).unwrap();
        let high_text = PriceFormatter::format(high, currency, DisplayFormat::Full, &options).unwrap();

        prop_assert_eq!(parse_full(&low_text), low);
        prop_assert!(parse_full(&low_text) < parse_full(&high_text));
    }

    // =========================================================================
    // Property 2: Sign Handling
    // =========================================================================

    /// *For any* positive amount, formatting its negation adds exactly one
    /// leading `-` and changes nothing else.
    #[test]
    fn prop_negation_only_adds_sign(
        amount in positive_amount(),
        currency in currency_strategy(),
        display in display_strategy(),
    ) {
        let options = FormatOptions::default();
        let positive = PriceFormatter::format(amount, currency, display, &options).unwrap();
        let negative = PriceFormatter::format(-amount, currency, display, &options).unwrap();

        prop_assert_eq!(negative, format!("-{positive}"));
        prop_assert!(!positive.starts_with('-'));
    }

    // =========================================================================
    // Property 3: Symbol Stripping
    // =========================================================================

    /// *For any* amount, hiding the symbol leaves no currency glyph behind.
    #[test]
    fn prop_hidden_symbol_has_no_glyphs(
        amount in non_negative_amount(),
        negate in any::<bool>(),
        currency in currency_strategy(),
        display in display_strategy(),
    ) {
        let amount = if negate { -amount } else { amount };
        let options = FormatOptions::default().with_symbol(false);
        let text = PriceFormatter::format(amount, currency, display, &options).unwrap();

        for glyph in CURRENCY_GLYPHS {
            prop_assert!(!text.contains(glyph), "{} still contains {}", text, glyph);
        }
        prop_assert_eq!(text.trim(), text.as_str());
    }

    /// *For any* formatted price, stripping twice equals stripping once.
    #[test]
    fn prop_strip_is_idempotent(
        amount in non_negative_amount(),
        currency in currency_strategy(),
        display in display_strategy(),
    ) {
        let options = FormatOptions::default();
        let text = PriceFormatter::format(amount, currency, display, &options).unwrap();
        let once = strip_symbols(&text);
        prop_assert_eq!(strip_symbols(&once), once);
    }

    // =========================================================================
    // Property 4: Invalid Input Fallback
    // =========================================================================

    /// *For any* string, the fallback policy never panics and returns the
    /// fallback display exactly when the string is not a number.
    #[test]
    fn prop_fallback_for_any_string(input in ".*") {
        let options = FormatOptions::default();
        let text = PriceFormatter::format_or_fallback(
            input.as_str(),
            Currency::Npr,
            DisplayFormat::Full,
            &options,
        );

        if Amount::parse(&input).is_err() {
            prop_assert_eq!(text, options.fallback_display);
        } else {
            prop_assert!(text.contains("रू "));
        }
    }

    // =========================================================================
    // Property 5: Tier Selection
    // =========================================================================

    /// *For any* magnitude, short format picks the tier whose threshold is
    /// the largest one not above it.
    #[test]
    fn prop_short_format_tier(amount in non_negative_amount()) {
        let text = format_short(amount, 2, RoundingMode::HalfUp);
        let expected_suffix = if amount >= Decimal::from(10_000_000) {
            "Cr"
        } else if amount >= Decimal::from(100_000) {
            "L"
        } else if amount >= Decimal::from(1_000) {
            "K"
        } else {
            ""
        };

        let suffix = text.trim_start_matches(|ch: char| ch.is_ascii_digit() || ch == '.');
        prop_assert_eq!(suffix, expected_suffix);
    }

    // =========================================================================
    // Property 6: Words Spacing
    // =========================================================================

    /// *For any* whole number below the words limit, the transcription is
    /// non-empty and single-spaced with no padding.
    #[test]
    fn prop_words_are_single_spaced(n in 1u64..WORDS_LIMIT) {
        let words = number_to_words(n);
        prop_assert!(!words.is_empty());
        prop_assert_eq!(words.trim(), words.as_str());
        prop_assert!(!words.contains("  "), "{:?}", words);
    }

    // =========================================================================
    // Property 7: Exact Fraction Digits
    // =========================================================================

    /// *For any* decimal and any allowed digit count, full and short format
    /// print exactly that many digits after the decimal point, and no point
    /// at all for zero digits.
    #[test]
    fn prop_exact_fraction_digits(
        amount in any_decimal(),
        fraction_digits in 0..=MAX_FRACTION_DIGITS,
        rounding in rounding_strategy(),
        currency in currency_strategy(),
    ) {
        let options = FormatOptions::default()
            .with_fraction_digits(fraction_digits)
            .with_rounding(rounding);
        let expected = (fraction_digits > 0).then_some(fraction_digits as usize);

        for display in [DisplayFormat::Full, DisplayFormat::Short, DisplayFormat::Compact] {
            let text = PriceFormatter::format(amount, currency, display, &options).unwrap();
            prop_assert_eq!(fraction_len(&text), expected, "{:?} -> {}", amount, text);
        }
    }
}
