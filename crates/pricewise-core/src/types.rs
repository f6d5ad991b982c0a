//! # Domain Types
//!
//! Inputs and outputs of the comparison engine.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Engine Types                                    │
//! │                                                                         │
//! │  INPUT                                OUTPUT                            │
//! │  ┌─────────────────┐                  ┌─────────────────┐               │
//! │  │   StorePrice    │ ───per item───►  │ ComparisonStats │               │
//! │  │  store_name     │                  │  cheapest/max   │               │
//! │  │  price (f64)    │                  │  avg, savings   │               │
//! │  └─────────────────┘                  └─────────────────┘               │
//! │  ┌─────────────────┐                  ┌─────────────────┐               │
//! │  │ ItemComparison  │ ───per list───►  │  StoreTotals    │──► StoreRanking│
//! │  │  quantity       │                  │  [StoreSummary] │──► Savings    │
//! │  │  prices[]       │                  └─────────────────┘    Summary    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All prices here are plain `f64` in whatever unit the caller chose
//! (major units in practice). Field names serialize as camelCase for the
//! web front end, and every type exports a TypeScript binding.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::format::PriceTier;
use crate::NO_DATA_STORE;

// =============================================================================
// Store Price
// =============================================================================

/// One recorded (store, price) fact for an item, in engine units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StorePrice {
    pub store_name: String,
    pub price: f64,
}

impl StorePrice {
    pub fn new(store_name: impl Into<String>, price: f64) -> Self {
        StorePrice {
            store_name: store_name.into(),
            price,
        }
    }
}

// =============================================================================
// Item Comparison Input
// =============================================================================

/// A list item with every price observed for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemComparison {
    pub item_id: i64,
    pub item_name: String,
    /// Scales the unit price into a line total.
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Order is irrelevant except for tie-breaking.
    pub prices: Vec<StorePrice>,
}

impl ItemComparison {
    /// Returns the first price recorded at `store`, by exact name.
    pub fn price_at(&self, store: &str) -> Option<f64> {
        self.prices
            .iter()
            .find(|p| p.store_name == store)
            .map(|p| p.price)
    }
}

// =============================================================================
// Comparison Statistics
// =============================================================================

/// Min/max/average/savings over one item's observations.
///
/// ## Invariants (non-empty input)
/// - `cheapest_price <= average_price <= most_expensive_price`
/// - `savings == most_expensive_price - cheapest_price`, `savings >= 0`
/// - `0 <= savings_percent <= 100`; exactly 100 when the cheapest price is 0
///   (or when rounding swamps a tiny cheapest price)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonStats {
    pub cheapest_store: String,
    pub cheapest_price: f64,
    pub most_expensive_store: String,
    pub most_expensive_price: f64,
    pub average_price: f64,
    pub savings: f64,
    pub savings_percent: f64,
}

impl ComparisonStats {
    /// The "no data" result: sentinel store names, every number zero.
    pub fn no_data() -> Self {
        ComparisonStats {
            cheapest_store: NO_DATA_STORE.to_string(),
            cheapest_price: 0.0,
            most_expensive_store: NO_DATA_STORE.to_string(),
            most_expensive_price: 0.0,
            average_price: 0.0,
            savings: 0.0,
            savings_percent: 0.0,
        }
    }

    /// False for the [`ComparisonStats::no_data`] result.
    pub fn has_data(&self) -> bool {
        self.cheapest_store != NO_DATA_STORE
    }
}

impl Default for ComparisonStats {
    fn default() -> Self {
        ComparisonStats::no_data()
    }
}

// =============================================================================
// Store Summary
// =============================================================================

/// Aggregated cost and coverage for one store across a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StoreSummary {
    pub store_name: String,
    /// Σ price × quantity over items priced at this store.
    pub total_cost: f64,
    /// Number of list items with a price at this store.
    pub item_count: u32,
    /// `total_cost / item_count`, or 0 when nothing is priced here.
    pub average_item_price: f64,
}

impl StoreSummary {
    /// An empty summary for a store with no priced items.
    pub fn empty(store_name: impl Into<String>) -> Self {
        StoreSummary {
            store_name: store_name.into(),
            total_cost: 0.0,
            item_count: 0,
            average_item_price: 0.0,
        }
    }
}

// =============================================================================
// Store Totals
// =============================================================================

/// Store summaries keyed by store name, in insertion order.
///
/// Iteration order is the order the target stores were given in. Rankings
/// scan in this order, so it decides ties between equal totals. Inserting a
/// store name that is already present is ignored (first occurrence wins).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(from = "Vec<StoreSummary>")]
pub struct StoreTotals(Vec<StoreSummary>);

impl From<Vec<StoreSummary>> for StoreTotals {
    fn from(summaries: Vec<StoreSummary>) -> Self {
        summaries.into_iter().collect()
    }
}

impl StoreTotals {
    pub fn new() -> Self {
        StoreTotals(Vec::new())
    }

    /// Adds a summary unless the store is already present.
    ///
    /// Returns `false` when the store was a duplicate.
    pub fn insert(&mut self, summary: StoreSummary) -> bool {
        if self.contains(&summary.store_name) {
            return false;
        }
        self.0.push(summary);
        true
    }

    pub fn get(&self, store: &str) -> Option<&StoreSummary> {
        self.0.iter().find(|s| s.store_name == store)
    }

    pub fn contains(&self, store: &str) -> bool {
        self.get(store).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StoreSummary> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Stores in iteration order.
    pub fn store_names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.store_name.as_str())
    }
}

impl FromIterator<StoreSummary> for StoreTotals {
    fn from_iter<I: IntoIterator<Item = StoreSummary>>(iter: I) -> Self {
        let mut totals = StoreTotals::new();
        for summary in iter {
            totals.insert(summary);
        }
        totals
    }
}

impl<'a> IntoIterator for &'a StoreTotals {
    type Item = &'a StoreSummary;
    type IntoIter = std::slice::Iter<'a, StoreSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// Rankings and Savings
// =============================================================================

/// A store picked by a cheapest/most-expensive lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoreRanking {
    pub store: String,
    pub cost: f64,
}

/// Difference between the most- and least-expensive store totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SavingsSummary {
    pub amount: f64,
    /// Percent of the most-expensive total.
    pub percent: f64,
}

// =============================================================================
// List Comparison Report
// =============================================================================

/// One observed price with its tier inside the item's price range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TieredPrice {
    pub store_name: String,
    pub price: f64,
    pub tier: PriceTier,
}

/// Per-item section of a [`ListComparison`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemReport {
    pub item_id: i64,
    pub item_name: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub stats: ComparisonStats,
    pub prices: Vec<TieredPrice>,
}

/// Everything the comparison page shows for a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ListComparison {
    pub items: Vec<ItemReport>,
    pub store_totals: StoreTotals,
    pub cheapest_store: Option<StoreRanking>,
    pub most_expensive_store: Option<StoreRanking>,
    pub savings: SavingsSummary,
}

// =============================================================================
// Unit Tests
// =============================================================================
