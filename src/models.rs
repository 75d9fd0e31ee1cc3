use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The price tier a bundle total is computed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingStrategy {
    Trending,
    Average,
    Low,
}

impl PricingStrategy {
    /// Returns the strategy name as used in stored bundles (e.g., "trending")
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingStrategy::Trending => "trending",
            PricingStrategy::Average => "average",
            PricingStrategy::Low => "low",
        }
    }

    /// Parse a stored strategy name (e.g., "trending") into a PricingStrategy
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trending" => Some(PricingStrategy::Trending),
            "average" => Some(PricingStrategy::Average),
            "low" => Some(PricingStrategy::Low),
            _ => None,
        }
    }

    /// Returns all strategies, in comparison-report order
    pub fn all() -> &'static [PricingStrategy] {
        &[
            PricingStrategy::Trending,
            PricingStrategy::Average,
            PricingStrategy::Low,
        ]
    }
}

/// Pricing snapshot for a single identified card.
///
/// Each price tier is independently optional: `None` means the market-data
/// collaborator has no figure yet, which is valid state and distinct from a
/// price of zero. No ordering is guaranteed between tiers (trending can sit
/// below low during a crash).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRecord {
    pub id: String,
    pub card_name: String,
    #[serde(default)]
    pub set_name: Option<String>,
    #[serde(default)]
    pub card_number: Option<String>,
    #[serde(default)]
    pub trending_price: Option<f64>,
    #[serde(default)]
    pub average_price: Option<f64>,
    #[serde(default)]
    pub low_price: Option<f64>,
}

impl ValuationRecord {
    /// Creates a record with no price data yet
    pub fn new(id: &str, card_name: &str) -> Self {
        Self {
            id: id.to_string(),
            card_name: card_name.to_string(),
            set_name: None,
            card_number: None,
            trending_price: None,
            average_price: None,
            low_price: None,
        }
    }

    /// Returns the tier value selected by `strategy`, if the market data
    /// collaborator has supplied one
    pub fn price_for(&self, strategy: PricingStrategy) -> Option<f64> {
        match strategy {
            PricingStrategy::Trending => self.trending_price,
            PricingStrategy::Average => self.average_price,
            PricingStrategy::Low => self.low_price,
        }
    }

    /// Composite lookup key: `name|set|number`, each part trimmed.
    ///
    /// Two scans of the same physical card share this key, so the storage
    /// collaborator can aggregate price history across scans. It is NOT a
    /// unique record id; `id` is.
    pub fn identifier(&self) -> String {
        format!(
            "{}|{}|{}",
            self.card_name.trim(),
            self.set_name.as_deref().unwrap_or("").trim(),
            self.card_number.as_deref().unwrap_or("").trim()
        )
    }
}

/// A named collection of cards priced together for a sale or trade.
///
/// `card_ids` has list semantics: the same id may appear more than once and
/// contributes once per occurrence. `calculated_total` is a cache; it is only
/// advanced by [`crate::bundle::update_bundle_total`], which callers must
/// invoke after changing `card_ids`, `pricing_strategy` or
/// `percentage_multiplier`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub id: String,
    pub name: String,
    pub card_ids: Vec<String>,
    pub pricing_strategy: PricingStrategy,
    /// Fraction of the summed tier value offered, in [0.1, 1.0]
    pub percentage_multiplier: f64,
    pub calculated_total: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bundle {
    /// Creates an empty bundle with a fresh id, trending strategy and a
    /// 100% multiplier
    pub fn new(name: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            card_ids: Vec::new(),
            pricing_strategy: PricingStrategy::Trending,
            percentage_multiplier: 1.0,
            calculated_total: 0.0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Cross-strategy comparison totals for one bundle, all on a 100% basis
/// (the multiplier is deliberately not applied here)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleStatistics {
    pub trending_total: f64,
    pub average_total: f64,
    pub low_total: f64,
    /// The bundle's cached `calculated_total`, passed through verbatim
    pub selected_total: f64,
    /// Number of card id occurrences in the bundle
    pub card_count: usize,
    /// Resolved members carrying a trending price. Data-completeness signal
    /// only: a card priced solely by average or low does not count.
    pub valid_card_count: usize,
}

/// One row of the percentage-scaled negotiation table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTableRow {
    pub percentage: u32,
    pub trending_value: f64,
    pub average_value: f64,
    pub low_value: f64,
}
