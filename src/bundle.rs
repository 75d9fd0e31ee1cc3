//! Bundle aggregation: totals, cross-strategy statistics, immutable updates
//! and save-time validation.
//!
//! All functions here are pure over their inputs. "Update" operations return
//! a new [`Bundle`] value; callers holding bundles in shared state should
//! replace the whole value rather than mutate fields in place.

use std::collections::HashMap;

use chrono::Utc;
use log::{debug, warn};

use crate::error::{Result, ValuationError, MULTIPLIER_RANGE};
use crate::models::{Bundle, BundleStatistics, PricingStrategy, ValuationRecord};

/// Sums the selected price tier across `records` and applies `multiplier`.
///
/// A record whose selected tier is absent contributes 0 rather than aborting
/// the aggregation: partial market data is expected. No currency rounding is
/// applied; display formatting is the presentation layer's job.
///
/// # Errors
/// [`ValuationError::InvalidMultiplier`] if `multiplier` falls outside
/// [0.1, 1.0].
pub fn compute_bundle_total(
    records: &[ValuationRecord],
    strategy: PricingStrategy,
    multiplier: f64,
) -> Result<f64> {
    check_multiplier(multiplier)?;

    let sum: f64 = records
        .iter()
        .map(|record| record.price_for(strategy).unwrap_or(0.0))
        .sum();

    Ok(sum * multiplier)
}

/// Computes comparison statistics for a bundle against the full record store.
///
/// The three per-strategy totals are 100%-basis sums (the bundle's multiplier
/// is deliberately not applied), so a caller can show what each strategy
/// would yield at full price. `selected_total` is the bundle's cached
/// `calculated_total` passed through verbatim; keeping that cache fresh is
/// the caller's job via [`update_bundle_total`].
pub fn compute_bundle_statistics(
    bundle: &Bundle,
    all_records: &[ValuationRecord],
) -> BundleStatistics {
    let members = resolve_members(bundle, all_records);

    let total_for = |strategy: PricingStrategy| -> f64 {
        members
            .iter()
            .map(|record| record.price_for(strategy).unwrap_or(0.0))
            .sum()
    };

    // "Valid" means a trending price is present. A card priced only by
    // average or low does not count; this is a data-completeness signal for
    // the trending feed, not a "has any price" count.
    let valid_card_count = members
        .iter()
        .filter(|record| record.trending_price.is_some())
        .count();

    BundleStatistics {
        trending_total: total_for(PricingStrategy::Trending),
        average_total: total_for(PricingStrategy::Average),
        low_total: total_for(PricingStrategy::Low),
        selected_total: bundle.calculated_total,
        card_count: bundle.card_ids.len(),
        valid_card_count,
    }
}

/// Recomputes a bundle's cached total and returns the refreshed bundle.
///
/// This is the only operation that advances `calculated_total`; callers must
/// invoke it after every change to `card_ids`, `pricing_strategy` or
/// `percentage_multiplier`. The input bundle is left untouched.
///
/// # Errors
/// [`ValuationError::InvalidMultiplier`] if the bundle carries an
/// out-of-range multiplier.
pub fn update_bundle_total(bundle: &Bundle, all_records: &[ValuationRecord]) -> Result<Bundle> {
    let members = resolve_members(bundle, all_records);
    let total = compute_bundle_total(
        &members,
        bundle.pricing_strategy,
        bundle.percentage_multiplier,
    )?;

    debug!(
        "Recomputed total for bundle '{}': {} cards, {} strategy, total {:.2}",
        bundle.name,
        members.len(),
        bundle.pricing_strategy.as_str(),
        total
    );

    Ok(Bundle {
        calculated_total: total,
        updated_at: Utc::now(),
        ..bundle.clone()
    })
}

/// Returns a new bundle with `card_id` appended and the total recomputed.
/// Adding the same id again is allowed; it then counts twice.
pub fn add_card(bundle: &Bundle, card_id: &str, all_records: &[ValuationRecord]) -> Result<Bundle> {
    let mut updated = bundle.clone();
    updated.card_ids.push(card_id.to_string());
    update_bundle_total(&updated, all_records)
}

/// Returns a new bundle with the first occurrence of `card_id` removed and
/// the total recomputed. Removing an id that is not in the bundle is a no-op
/// apart from the recompute.
pub fn remove_card(
    bundle: &Bundle,
    card_id: &str,
    all_records: &[ValuationRecord],
) -> Result<Bundle> {
    let mut updated = bundle.clone();
    if let Some(position) = updated.card_ids.iter().position(|id| id == card_id) {
        updated.card_ids.remove(position);
    }
    update_bundle_total(&updated, all_records)
}

/// Returns a new bundle priced under `strategy`, total recomputed
pub fn set_strategy(
    bundle: &Bundle,
    strategy: PricingStrategy,
    all_records: &[ValuationRecord],
) -> Result<Bundle> {
    let mut updated = bundle.clone();
    updated.pricing_strategy = strategy;
    update_bundle_total(&updated, all_records)
}

/// Returns a new bundle with `multiplier` applied, total recomputed.
///
/// # Errors
/// [`ValuationError::InvalidMultiplier`] if `multiplier` falls outside
/// [0.1, 1.0]; the original bundle is unaffected.
pub fn set_multiplier(
    bundle: &Bundle,
    multiplier: f64,
    all_records: &[ValuationRecord],
) -> Result<Bundle> {
    let mut updated = bundle.clone();
    updated.percentage_multiplier = multiplier;
    update_bundle_total(&updated, all_records)
}

/// Validates a bundle before the caller persists it.
///
/// Checks every rule independently (no short-circuiting) so a form can show
/// all problems at once. Returns human-readable violation messages; an empty
/// vector means the bundle is valid. Never fails.
pub fn validate_bundle(bundle: &Bundle) -> Vec<String> {
    let mut errors = Vec::new();

    if bundle.name.trim().is_empty() {
        let error_msg = "Bundle name must not be empty".to_string();
        warn!("Bundle '{}': {error_msg}", bundle.id);
        errors.push(error_msg);
    }

    if bundle.card_ids.is_empty() {
        let error_msg = "Bundle must contain at least one card".to_string();
        warn!("Bundle '{}': {error_msg}", bundle.id);
        errors.push(error_msg);
    }

    let (min, max) = MULTIPLIER_RANGE;
    if bundle.percentage_multiplier < min || bundle.percentage_multiplier > max {
        let error_msg = format!(
            "Percentage multiplier {} must be between {min} and {max}",
            bundle.percentage_multiplier
        );
        warn!("Bundle '{}': {error_msg}", bundle.id);
        errors.push(error_msg);
    }

    errors
}

fn check_multiplier(multiplier: f64) -> Result<()> {
    let (min, max) = MULTIPLIER_RANGE;
    if multiplier < min || multiplier > max {
        return Err(ValuationError::InvalidMultiplier { value: multiplier });
    }
    Ok(())
}

/// Resolves the bundle's card ids against the record store, once per
/// occurrence. Ids the store does not know are skipped; a duplicated id that
/// resolves contributes a clone per occurrence (list semantics).
fn resolve_members(bundle: &Bundle, all_records: &[ValuationRecord]) -> Vec<ValuationRecord> {
    let by_id: HashMap<&str, &ValuationRecord> = all_records
        .iter()
        .map(|record| (record.id.as_str(), record))
        .collect();

    bundle
        .card_ids
        .iter()
        .filter_map(|id| by_id.get(id.as_str()).map(|&record| record.clone()))
        .collect()
}
