//! Shared types, errors, and configuration for Mulya.
//!
//! This crate provides common types used across all other crates:
//! - Amount and price types with decimal precision
//! - Currency, display format, and rounding selectors
//! - Formatting error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{DEFAULT_LOCALE, FALLBACK_DISPLAY, FormatConfig};
pub use error::{FormatError, FormatResult};
