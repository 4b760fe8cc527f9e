//! Price formatting logic for Mulya.
//!
//! This crate contains pure formatting logic with ZERO I/O dependencies.
//! Every function is synchronous and stateless, so it is safe to call from
//! any number of threads.
//!
//! # Modules
//!
//! - `price` - Full, short, compact, and words renderings of an amount

pub mod price;
