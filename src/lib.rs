//! Bundle Valuation - card pricing aggregation engine
//!
//! Computes bundle totals from per-card price snapshots under a selected
//! pricing strategy (trending, average or low) and percentage multiplier,
//! builds the fixed percentage-scaled price table used as a negotiation aid,
//! and validates bundles before the caller persists them.
//!
//! Everything here is pure and synchronous: records come in already resolved
//! from an external store, results go back out as plain values. Fetching
//! market data, persistence and rendering belong to the surrounding
//! application.

pub mod bundle;
pub mod error;
pub mod formatters;
pub mod models;
pub mod price_table;

// Re-export commonly used items
pub use bundle::{
    add_card, compute_bundle_statistics, compute_bundle_total, remove_card, set_multiplier,
    set_strategy, update_bundle_total, validate_bundle,
};
pub use error::{Result, ValuationError, MULTIPLIER_RANGE};
pub use formatters::{format_percentage, format_price};
pub use models::{Bundle, BundleStatistics, PriceTableRow, PricingStrategy, ValuationRecord};
pub use price_table::generate_price_table;
