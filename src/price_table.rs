//! Percentage-scaled reference table for a single card, used as a
//! negotiation aid ("at 70% this card is worth ...").

use crate::models::{PriceTableRow, ValuationRecord};

/// The fixed row percentages, highest first. Not configurable.
const PERCENTAGE_STEPS: [u32; 10] = [100, 90, 80, 70, 60, 50, 40, 30, 20, 10];

/// Builds the 10-row price table for one record.
///
/// Each row scales all three tiers by its percentage; an absent tier shows
/// as 0 in every row, matching the aggregator's missing-data policy. Pure
/// and cheap (always exactly 10 rows), so callers can regenerate it on
/// every render instead of caching.
pub fn generate_price_table(record: &ValuationRecord) -> Vec<PriceTableRow> {
    PERCENTAGE_STEPS
        .iter()
        .map(|&percentage| {
            let factor = f64::from(percentage) / 100.0;
            PriceTableRow {
                percentage,
                trending_value: record.trending_price.unwrap_or(0.0) * factor,
                average_value: record.average_price.unwrap_or(0.0) * factor,
                low_value: record.low_price.unwrap_or(0.0) * factor,
            }
        })
        .collect()
}
