//! Full format: grouped positional numerals.

use mulya_shared::types::RoundingMode;
use rust_decimal::Decimal;

use super::locale;
use super::options::FormatOptions;

/// Renders `value` with exactly `fraction_digits` decimals and no grouping.
///
/// Trailing zeros are padded, so `to_fixed(1.5, 2, _)` is `"1.50"`.
///
/// Padding happens on the text: a 96-bit mantissa cannot carry 20 decimals
/// for large values, and `Decimal::rescale` clamps the scale in that case.
#[must_use]
pub fn to_fixed(value: Decimal, fraction_digits: u32, rounding: RoundingMode) -> String {
    let rounded = value.round_dp_with_strategy(fraction_digits, rounding.strategy());
    let mut fixed = rounded.to_string();

    let wanted = fraction_digits as usize;
    let present = fixed.split_once('.').map_or(0, |(_, fraction)| fraction.len());
    if wanted > 0 && !fixed.contains('.') {
        fixed.push('.');
    }
    fixed.extend(std::iter::repeat_n('0', wanted.saturating_sub(present)));
    fixed
}

/// Renders a non-negative magnitude in the locale chosen by `options`.
#[must_use]
pub fn format_full(magnitude: Decimal, options: &FormatOptions) -> String {
    let profile = locale::resolve(&options.locale);
    let fixed = to_fixed(magnitude, options.fraction_digits, options.rounding);
    profile.render(&fixed, options.grouping)
}
