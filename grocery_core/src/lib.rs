#![forbid(unsafe_code)]

//! Core domain model and business logic for the Grocer assistant.
//!
//! This crate provides:
//! - Domain types (item names, purchases, inventory, suggestions)
//! - Catalog of substitutions, staples and shelf lives
//! - The grocery ledger
//! - Expiry classification
//! - The replenishment suggestion engine

pub mod types;
pub mod error;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod logging;
pub mod ledger;
pub mod expiry;
pub mod engine;
pub mod assistant;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog, Catalog};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use ledger::{parse_selection, Ledger};
pub use engine::suggest;
pub use assistant::Assistant;
