//! Error types for bundle valuation

use thiserror::Error;

/// The valuation engine's allowed multiplier range (10% to 100%)
pub const MULTIPLIER_RANGE: (f64, f64) = (0.1, 1.0);

/// Unified error type for valuation operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValuationError {
    /// Percentage multiplier outside [0.1, 1.0]. Never clamped: coercing a
    /// bad multiplier would silently misprice a negotiation, so the caller
    /// bug must surface here.
    #[error("percentage multiplier {value} is outside the allowed range {}-{}", MULTIPLIER_RANGE.0, MULTIPLIER_RANGE.1)]
    InvalidMultiplier { value: f64 },
}

/// Result alias for valuation operations
pub type Result<T> = std::result::Result<T, ValuationError>;
