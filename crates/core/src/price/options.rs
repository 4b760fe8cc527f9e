//! Per-call formatting options.

use mulya_shared::types::{MAX_FRACTION_DIGITS, RoundingMode};
use mulya_shared::{DEFAULT_LOCALE, FALLBACK_DISPLAY, FormatConfig, FormatError, FormatResult};

/// Options controlling how an amount is rendered.
///
/// Built once and passed by reference; formatting never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Insert digit-group separators in full format.
    pub grouping: bool,
    /// Digits after the decimal point (ignored by words format).
    pub fraction_digits: u32,
    /// Locale tag for full format.
    pub locale: String,
    /// Keep currency glyphs in the output.
    pub show_symbol: bool,
    /// Midpoint rounding rule.
    pub rounding: RoundingMode,
    /// Text returned by the fallback policy.
    pub fallback_display: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            grouping: true,
            fraction_digits: 2,
            locale: DEFAULT_LOCALE.to_string(),
            show_symbol: true,
            rounding: RoundingMode::HalfUp,
            fallback_display: FALLBACK_DISPLAY.to_string(),
        }
    }
}

impl FormatOptions {
    /// Sets digit grouping.
    #[must_use]
    pub fn with_grouping(mut self, grouping: bool) -> Self {
        self.grouping = grouping;
        self
    }

    /// Sets the number of fraction digits.
    #[must_use]
    pub fn with_fraction_digits(mut self, fraction_digits: u32) -> Self {
        self.fraction_digits = fraction_digits;
        self
    }

    /// Sets the locale tag.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Shows or hides currency glyphs.
    #[must_use]
    pub fn with_symbol(mut self, show_symbol: bool) -> Self {
        self.show_symbol = show_symbol;
        self
    }

    /// Sets the rounding rule.
    #[must_use]
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Sets the fallback display text.
    #[must_use]
    pub fn with_fallback_display(mut self, fallback_display: impl Into<String>) -> Self {
        self.fallback_display = fallback_display.into();
        self
    }

    /// Rejects option combinations no renderer can honor.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::FractionDigitsOutOfRange` for too many digits.
    pub fn validate(&self) -> FormatResult<()> {
        if self.fraction_digits > MAX_FRACTION_DIGITS {
            return Err(FormatError::FractionDigitsOutOfRange {
                requested: self.fraction_digits,
                max: MAX_FRACTION_DIGITS,
            });
        }
        Ok(())
    }
}

impl From<&FormatConfig> for FormatOptions {
    fn from(config: &FormatConfig) -> Self {
        Self {
            grouping: config.grouping,
            fraction_digits: config.fraction_digits,
            locale: config.locale.clone(),
            show_symbol: config.show_symbol,
            rounding: config.rounding,
            fallback_display: config.fallback_display.clone(),
        }
    }
}
