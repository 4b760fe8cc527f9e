//! Common value types used across the workspace.

pub mod display;
pub mod money;

pub use display::{DisplayFormat, MAX_FRACTION_DIGITS, RoundingMode};
pub use money::{Amount, CURRENCY_GLYPHS, Currency, IntoAmount, Price};
