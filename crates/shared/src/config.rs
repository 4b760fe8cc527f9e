//! Formatting defaults loaded from files and the environment.

use std::path::Path;

use serde::Deserialize;

use crate::error::{FormatError, FormatResult};
use crate::types::{Currency, DisplayFormat, MAX_FRACTION_DIGITS, RoundingMode};

/// Display string used when an amount cannot be formatted.
pub const FALLBACK_DISPLAY: &str = "Rs. 0.00";

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "ne-NP";

/// Default formatting settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormatConfig {
    /// Currency used when the caller does not pick one.
    #[serde(default)]
    pub currency: Currency,
    /// Display format used when the caller does not pick one.
    #[serde(default)]
    pub display_format: DisplayFormat,
    /// Insert digit-group separators in full format.
    #[serde(default = "default_true")]
    pub grouping: bool,
    /// Digits after the decimal point.
    #[serde(default = "default_fraction_digits")]
    pub fraction_digits: u32,
    /// Locale tag for full format.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Show the currency symbol.
    #[serde(default = "default_true")]
    pub show_symbol: bool,
    /// Midpoint rounding rule.
    #[serde(default)]
    pub rounding: RoundingMode,
    /// Text shown in place of an amount that cannot be formatted.
    #[serde(default = "default_fallback_display")]
    pub fallback_display: String,
}

fn default_true() -> bool {
    true
}

fn default_fraction_digits() -> u32 {
    2
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_fallback_display() -> String {
    FALLBACK_DISPLAY.to_string()
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            display_format: DisplayFormat::default(),
            grouping: true,
            fraction_digits: default_fraction_digits(),
            locale: default_locale(),
            show_symbol: true,
            rounding: RoundingMode::default(),
            fallback_display: default_fallback_display(),
        }
    }
}

impl FormatConfig {
    /// Loads configuration from `config/` and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Loads configuration from `<dir>/default`, `<dir>/<RUN_MODE>` and
    /// `MULYA__*` environment variables, later sources winning.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or a value has the wrong type.
    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let default_file = dir.join("default");
        let mode_file = dir.join(run_mode);

        let config = config::Config::builder()
            .add_source(config::File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(config::File::with_name(&mode_file.to_string_lossy()).required(false))
            .add_source(
                config::Environment::with_prefix("MULYA")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Checks values that serde cannot constrain.
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
