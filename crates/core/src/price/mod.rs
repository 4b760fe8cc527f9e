//! Price display: grouped numerals, magnitude abbreviations, and amounts in
//! words.

pub mod full;
pub mod locale;
pub mod options;
pub mod service;
pub mod tiers;
pub mod words;

#[cfg(test)]
mod props;

pub use locale::{DigitScript, Grouping, LocaleProfile};
pub use options::FormatOptions;
pub use service::{PriceFormatter, strip_symbols};
pub use tiers::MagnitudeTier;
pub use words::{WORDS_LIMIT, amount_in_words, number_to_words};
