//! Display selectors: which renderer to use and how to round.

use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Largest number of fraction digits a display may request.
pub const MAX_FRACTION_DIGITS: u32 = 20;

/// Rendering algorithm applied to an amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    /// Grouped numerals, e.g. `12,34,567.89`.
    #[default]
    Full,
    /// Magnitude letter suffix, e.g. `12.35L`.
    Short,
    /// Spelled-out magnitude word, e.g. `12.35 लाख`.
    Compact,
    /// Full transcription in words.
    Words,
}

impl DisplayFormat {
    /// All display formats.
    pub const ALL: [Self; 4] = [Self::Full, Self::Short, Self::Compact, Self::Words];

    /// Lowercase name used in configuration and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Short => "short",
            Self::Compact => "compact",
            Self::Words => "words",
        }
    }
}

impl std::fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DisplayFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "short" => Ok(Self::Short),
            "compact" => Ok(Self::Compact),
            "words" => Ok(Self::Words),
            _ => Err(FormatError::UnknownDisplayFormat(s.to_owned())),
        }
    }
}

/// Midpoint rule used when an amount is cut to its display precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round half away from zero (`1.5 → 2`, `2.5 → 3`).
    #[default]
    HalfUp,
    /// Banker's rounding (`1.5 → 2`, `2.5 → 2`).
    HalfEven,
}

impl RoundingMode {
    /// The matching `rust_decimal` strategy.
    #[must_use]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }

    /// Snake-case name used in configuration and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HalfUp => "half_up",
            Self::HalfEven => "half_even",
        }
    }
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoundingMode {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "half_up" => Ok(Self::HalfUp),
            "half_even" | "bankers" => Ok(Self::HalfEven),
            _ => Err(FormatError::UnknownRoundingMode(s.to_owned())),
        }
    }
}
