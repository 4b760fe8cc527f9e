//! Mulya command-line price formatter.
//!
//! Formats each amount given on the command line. Defaults come from
//! `config/` and `MULYA__*` environment variables; flags override them.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use mulya_core::price::{FormatOptions, PriceFormatter};
use mulya_shared::FormatConfig;
use mulya_shared::types::{Currency, DisplayFormat, RoundingMode};

#[derive(Parser, Debug)]
#[command(name = "mulya", version, about = "Format prices in Nepali and Indian notation")]
struct Cli {
    /// Amounts to format, as decimal numbers
    #[arg(required = true, allow_negative_numbers = true)]
    amounts: Vec<String>,
    /// Currency: NPR, USD or INR
    #[arg(short, long)]
    currency: Option<Currency>,
    /// Display format: full, short, compact or words
    #[arg(short, long)]
    format: Option<DisplayFormat>,
    /// Digits after the decimal point
    #[arg(short, long)]
    decimals: Option<u32>,
    /// Locale for full format, e.g. ne-NP, en-IN, en-US
    #[arg(short, long)]
    locale: Option<String>,
    /// Rounding: half_up or half_even
    #[arg(long)]
    rounding: Option<RoundingMode>,
    /// Print digits without group separators
    #[arg(long)]
    no_grouping: bool,
    /// Leave out the currency symbol
    #[arg(long)]
    no_symbol: bool,
    /// Fail on the first invalid amount instead of printing the fallback
    #[arg(long)]
    strict: bool,
    /// Print one JSON object per amount
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Layers command-line flags over configured defaults.
    fn options(&self, config: &FormatConfig) -> FormatOptions {
        let mut options = FormatOptions::from(config);
        if let Some(decimals) = self.decimals {
            options.fraction_digits = decimals;
        }
        if let Some(locale) = &self.locale {
            options.locale.clone_from(locale);
        }
        if let Some(rounding) = self.rounding {
            options.rounding = rounding;
        }
        if self.no_grouping {
            options.grouping = false;
        }
        if self.no_symbol {
            options.show_symbol = false;
        }
        options
    }

    fn render(
        &self,
        amount: &str,
        config: &FormatConfig,
        options: &FormatOptions,
    ) -> Result<String> {
        let currency = self.currency.unwrap_or(config.currency);
        let display = self.format.unwrap_or(config.display_format);

        if self.strict {
            PriceFormatter::format(amount, currency, display, options)
                .with_context(|| format!("cannot format {amount:?}"))
        } else {
            Ok(PriceFormatter::format_or_fallback(
                amount, currency, display, options,
            ))
        }
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout is reserved for formatted prices
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "mulya=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = FormatConfig::load().context("failed to load format configuration")?;
    config.validate()?;
    let options = cli.options(&config);
    options.validate()?;
    debug!(?options, "resolved format options");

    for amount in &cli.amounts {
        let output = cli.render(amount, &config, &options)?;
        if cli.json {
            println!(
                "{}",
                serde_json::json!({ "input": amount, "output": output })
            );
        } else {
            println!("{output}");
        }
    }

    Ok(())
}
