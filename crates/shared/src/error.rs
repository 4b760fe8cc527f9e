//! Price formatting error types.

use thiserror::Error;

/// Result type alias using `FormatError`.
pub type FormatResult<T> = Result<T, FormatError>;

/// Errors raised while coercing or formatting an amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Input cannot be coerced to a finite number.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// More fraction digits requested than a display can carry.
    #[error("Fraction digits out of range: {requested} (max {max})")]
    FractionDigitsOutOfRange {
        /// Requested number of digits.
        requested: u32,
        /// Largest supported number of digits.
        max: u32,
    },

    /// Integer part is beyond the largest word tier.
    #[error("Amount too large to spell out: {0}")]
    MagnitudeOverflow(String),

    /// Unrecognized currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Unrecognized display format name.
    #[error("Unknown display format: {0}")]
    UnknownDisplayFormat(String),

    /// Unrecognized rounding mode name.
    #[error("Unknown rounding mode: {0}")]
    UnknownRoundingMode(String),
}

impl FormatError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::FractionDigitsOutOfRange { .. } => "FRACTION_DIGITS_OUT_OF_RANGE",
            Self::MagnitudeOverflow(_) => "MAGNITUDE_OVERFLOW",
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::UnknownDisplayFormat(_) => "UNKNOWN_DISPLAY_FORMAT",
            Self::UnknownRoundingMode(_) => "UNKNOWN_ROUNDING_MODE",
        }
    }

    /// Returns true if the error came from the amount itself rather than
    /// from the requested presentation.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidAmount(_) | Self::MagnitudeOverflow(_))
    }
}
