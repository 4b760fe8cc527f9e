//! Price formatting service.
//!
//! This module ties the renderers together: it coerces the input, applies
//! the sign and currency prefix, and optionally scrubs currency glyphs.

use mulya_shared::FormatResult;
use mulya_shared::types::{CURRENCY_GLYPHS, Currency, DisplayFormat, IntoAmount, Price};
use tracing::{error, warn};

use super::full::format_full;
use super::options::FormatOptions;
use super::tiers::{format_compact, format_short};
use super::words::amount_in_words;

/// Formats prices for display.
pub struct PriceFormatter;

impl PriceFormatter {
    /// Formats an amount.
    ///
    /// The magnitude is rendered by the selected display format, then the
    /// currency prefix and a leading `-` for negative amounts are added.
    /// With `show_symbol` off, currency glyphs are scrubbed afterwards.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if the input is not a finite number
    /// - `FractionDigitsOutOfRange` if the options ask for too many digits
    /// - `MagnitudeOverflow` if words format cannot spell the amount
    ///
    /// # Example
    ///
    /// ```
    /// use mulya_core::price::{FormatOptions, PriceFormatter};
    /// use mulya_shared::types::{Currency, DisplayFormat};
    ///
    /// let options = FormatOptions::default();
    /// let text = PriceFormatter::format("1234567", Currency::Npr, DisplayFormat::Short, &options);
    /// assert_eq!(text.unwrap(), "रू 12.35L");
    /// ```
    pub fn format<A: IntoAmount>(
        amount: A,
        currency: Currency,
        display: DisplayFormat,
        options: &FormatOptions,
    ) -> FormatResult<String> {
        let amount = amount.into_amount()?;
        options.validate()?;

        let magnitude = amount.abs().value();
        let body = match display {
            DisplayFormat::Full => format_full(magnitude, options),
            DisplayFormat::Short => {
                format_short(magnitude, options.fraction_digits, options.rounding)
            }
            DisplayFormat::Compact => {
                format_compact(magnitude, options.fraction_digits, options.rounding)
            }
            DisplayFormat::Words => amount_in_words(magnitude, currency, options.rounding)?,
        };

        let sign = if amount.is_negative() { "-" } else { "" };
        let formatted = format!("{sign}{}{body}", currency.prefix());

        Ok(if options.show_symbol {
            formatted
        } else {
            strip_symbols(&formatted)
        })
    }

    /// Formats a catalog price in its own currency.
    ///
    /// # Errors
    ///
    /// Same as [`PriceFormatter::format`].
    pub fn format_price(
        price: &Price,
        display: DisplayFormat,
        options: &FormatOptions,
    ) -> FormatResult<String> {
        Self::format(price.amount, price.currency, display, options)
    }

    /// Formats an amount, returning `options.fallback_display` instead of
    /// failing.
    ///
    /// For presentation code that must always have something to render.
    /// Bad amounts are logged as warnings; option errors are logged as
    /// errors since every later call will fail the same way.
    pub fn format_or_fallback<A: IntoAmount>(
        amount: A,
        currency: Currency,
        display_format: DisplayFormat,
        options: &FormatOptions,
    ) -> String {
        Self::format(amount, currency, display_format, options).unwrap_or_else(|err| {
            if err.is_input_error() {
                warn!(
                    error = %err,
                    code = err.error_code(),
                    %currency,
                    %display_format,
                    "price formatting failed, showing fallback"
                );
            } else {
                error!(
                    error = %err,
                    code = err.error_code(),
                    %currency,
                    %display_format,
                    "format options rejected, showing fallback"
                );
            }
            options.fallback_display.clone()
        })
    }
}

/// Removes currency glyphs, and the spacing that followed them, from a
/// formatted price. Applying it twice changes nothing.
#[must_use]
pub fn strip_symbols(formatted: &str) -> String {
    let mut out = String::with_capacity(formatted.len());
    let mut rest = formatted;
    while !rest.is_empty() {
        if let Some(glyph) = CURRENCY_GLYPHS.iter().find(|glyph| rest.starts_with(*glyph)) {
            rest = rest[glyph.len()..].trim_start();
            continue;
        }
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            out.push(ch);
        }
        rest = chars.as_str();
    }
    out.trim().to_owned()
}
