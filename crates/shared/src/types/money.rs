//! Amount, currency, and price value types.
//!
//! CRITICAL: Never use floating-point for prices.
//! `Amount` wraps `rust_decimal::Decimal`; floats are only accepted at the
//! coercion boundary and rejected when non-finite.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{FormatError, FormatResult};

/// Glyphs removed from a formatted price when the symbol is hidden.
pub const CURRENCY_GLYPHS: [&str; 3] = ["रू", "₹", "$"];

/// A signed, finite decimal quantity of money.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Creates an amount from a decimal value.
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Parses a decimal string such as `"1234.50"`, `" +12 "` or `"1.5e3"`.
    ///
    /// Digit separators are not accepted, so `"1_000"` and `"1,000"` are
    /// both invalid.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::InvalidAmount` if the input is not a number.
    pub fn parse(input: &str) -> FormatResult<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let double_sign = digits.len() != trimmed.len() && digits.starts_with(['+', '-']);
        if double_sign || digits.contains('_') {
            return Err(FormatError::InvalidAmount(input.to_owned()));
        }

        digits
            .parse::<Decimal>()
            .or_else(|_| Decimal::from_scientific(digits))
            .map(Self)
            .map_err(|_| FormatError::InvalidAmount(input.to_owned()))
    }

    /// Converts a float, rejecting NaN, infinities and out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::InvalidAmount` if the value is not representable.
    pub fn from_f64(value: f64) -> FormatResult<Self> {
        if !value.is_finite() {
            return Err(FormatError::InvalidAmount(value.to_string()));
        }
        Decimal::from_f64(value)
            .map(Self)
            .ok_or_else(|| FormatError::InvalidAmount(value.to_string()))
    }

    /// Returns the inner decimal value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is strictly below zero.
    ///
    /// A negative zero (`"-0.00"`) is not negative.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the magnitude of the amount.
    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::str::FromStr for Amount {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Values that can be coerced into an [`Amount`].
///
/// Catalog APIs hand prices over as numbers or as decimal strings; both go
/// through this trait before formatting.
pub trait IntoAmount {
    /// Performs the coercion.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::InvalidAmount` if the value is not a finite number.
    fn into_amount(self) -> FormatResult<Amount>;
}

impl IntoAmount for Amount {
    fn into_amount(self) -> FormatResult<Amount> {
        Ok(self)
    }
}

impl IntoAmount for Decimal {
    fn into_amount(self) -> FormatResult<Amount> {
        Ok(Amount(self))
    }
}

impl IntoAmount for i64 {
    fn into_amount(self) -> FormatResult<Amount> {
        Ok(Amount(Decimal::from(self)))
    }
}

impl IntoAmount for u64 {
    fn into_amount(self) -> FormatResult<Amount> {
        Ok(Amount(Decimal::from(self)))
    }
}

impl IntoAmount for f64 {
    fn into_amount(self) -> FormatResult<Amount> {
        Amount::from_f64(self)
    }
}

impl IntoAmount for &str {
    fn into_amount(self) -> FormatResult<Amount> {
        Amount::parse(self)
    }
}

impl IntoAmount for &String {
    fn into_amount(self) -> FormatResult<Amount> {
        Amount::parse(self)
    }
}

impl IntoAmount for String {
    fn into_amount(self) -> FormatResult<Amount> {
        Amount::parse(&self)
    }
}

/// Currencies a storefront can price in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Nepalese Rupee
    #[default]
    Npr,
    /// US Dollar
    Usd,
    /// Indian Rupee
    Inr,
}

impl Currency {
    /// All supported currencies.
    pub const ALL: [Self; 3] = [Self::Npr, Self::Usd, Self::Inr];

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Npr => "NPR",
            Self::Usd => "USD",
            Self::Inr => "INR",
        }
    }

    /// Bare currency glyph.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Npr => "रू",
            Self::Usd => "$",
            Self::Inr => "₹",
        }
    }

    /// Text placed in front of a formatted amount.
    ///
    /// The rupee abbreviation is a word and takes a trailing space; single
    /// glyphs attach directly to the digits.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Npr => "रू ",
            Self::Usd => "$",
            Self::Inr => "₹",
        }
    }

    /// Word for the main unit in spelled-out amounts.
    #[must_use]
    pub const fn unit_word(self) -> &'static str {
        match self {
            Self::Npr | Self::Inr => "रुपैया",
            Self::Usd => "डलर",
        }
    }

    /// Word for the hundredth subunit in spelled-out amounts.
    #[must_use]
    pub const fn subunit_word(self) -> &'static str {
        match self {
            Self::Npr | Self::Inr => "पैसा",
            Self::Usd => "सेन्ट",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NPR" => Ok(Self::Npr),
            "USD" => Ok(Self::Usd),
            "INR" => Ok(Self::Inr),
            _ => Err(FormatError::UnknownCurrency(s.to_owned())),
        }
    }
}

/// A catalog price: an amount with its currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// The amount in main currency units (rupees, not paisa).
    pub amount: Amount,
    /// Currency the amount is denominated in.
    pub currency: Currency,
}

impl Price {
    /// Creates a new price.
    #[must_use]
    pub const fn new(amount: Amount, currency: Currency) -> Self {
        Self { amount, currency }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[rstest]
    #[case("1234.56", dec!(1234.56))]
    #[case("  42 ", dec!(42))]
    #[case("+7.5", dec!(7.5))]
    #[case("-0.25", dec!(-0.25))]
    #[case("1.5e3", dec!(1500))]
    #[case("0", dec!(0))]
    fn test_amount_parse(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(Amount::parse(input).unwrap().value(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("not-a-number")]
    #[case("12abc")]
    #[case("1.2.3")]
    #[case("+-5")]
    #[case("NaN")]
    #[case("Infinity")]
    #[case("1_000")]
    #[case("1,000")]
    #[case("_5")]
    fn test_amount_parse_rejects(#[case] input: &str) {
        let err = Amount::parse(input).unwrap_err();
        assert_eq!(err, FormatError::InvalidAmount(input.to_owned()));
    }

    #[test]
    fn test_amount_from_f64() {
        assert_eq!(Amount::from_f64(1234.5).unwrap().value(), dec!(1234.5));
        assert_eq!(Amount::from_f64(-3.0).unwrap().value(), dec!(-3));
        assert!(Amount::from_f64(f64::NAN).is_err());
        assert!(Amount::from_f64(f64::INFINITY).is_err());
        assert!(Amount::from_f64(f64::NEG_INFINITY).is_err());
        assert!(Amount::from_f64(f64::MAX).is_err());
    }

    #[test]
    fn test_amount_sign() {
        assert!(Amount::new(dec!(-0.01)).is_negative());
        assert!(!Amount::new(dec!(0.01)).is_negative());
        assert!(!Amount::parse("-0.00").unwrap().is_negative());
        assert_eq!(Amount::new(dec!(-12.5)).abs().value(), dec!(12.5));
    }

    #[test]
    fn test_into_amount() {
        assert_eq!("99.99".into_amount().unwrap().value(), dec!(99.99));
        assert_eq!(String::from("5").into_amount().unwrap().value(), dec!(5));
        assert_eq!(150i64.into_amount().unwrap().value(), dec!(150));
        assert_eq!(150u64.into_amount().unwrap().value(), dec!(150));
        assert_eq!(dec!(1.01).into_amount().unwrap().value(), dec!(1.01));
        assert!(f64::NAN.into_amount().is_err());
    }

    #[test]
    fn test_currency_prefix() {
        assert_eq!(Currency::Npr.prefix(), "रू ");
        assert_eq!(Currency::Usd.prefix(), "$");
        assert_eq!(Currency::Inr.prefix(), "₹");
        for currency in Currency::ALL {
            assert!(CURRENCY_GLYPHS.contains(&currency.symbol()));
            assert!(currency.prefix().starts_with(currency.symbol()));
        }
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!(Currency::from_str("NPR").unwrap(), Currency::Npr);
        assert_eq!(Currency::from_str("npr").unwrap(), Currency::Npr);
        assert_eq!(Currency::from_str("USD").unwrap(), Currency::Usd);
        assert_eq!(Currency::from_str(" inr ").unwrap(), Currency::Inr);
        assert!(Currency::from_str("XXX").is_err());
        assert!(Currency::from_str("").is_err());
    }

    #[test]
    fn test_currency_serde_uses_iso_codes() {
        assert_eq!(serde_json::to_string(&Currency::Npr).unwrap(), "\"NPR\"");
        let parsed: Currency = serde_json::from_str("\"INR\"").unwrap();
        assert_eq!(parsed, Currency::Inr);
    }

    #[test]
    fn test_price_from_catalog_json() {
        let price: Price =
            serde_json::from_str(r#"{"amount": "-10.50", "currency": "USD"}"#).unwrap();
        assert_eq!(price, Price::new(Amount::new(dec!(-10.50)), Currency::Usd));
        assert!(price.amount.is_negative());
    }
}
