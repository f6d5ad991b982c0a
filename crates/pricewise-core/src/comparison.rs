//! # Comparison Engine
//!
//! Pure functions from price observations to comparison statistics.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  [StorePrice] ──► calculate_item_stats ──► ComparisonStats (per item)  │
//! │                                                                         │
//! │  [ItemComparison] + [store] ──► calculate_store_totals ──► StoreTotals │
//! │                                                    │                    │
//! │                      ┌─────────────────────────────┼──────────────┐     │
//! │                      ▼                             ▼              ▼     │
//! │            find_cheapest_store      find_most_expensive_store  calculate│
//! │              Option<StoreRanking>     Option<StoreRanking>     _savings │
//! │                                                                         │
//! │  compare_list: all of the above in one report                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is total. Empty input produces the documented
//! fallback (`"-"`, zeros, `None`), and every percentage is guarded against
//! a zero denominator. Prices are in whatever unit the caller chose; the
//! output uses the same unit.

use crate::format::price_tier;
use crate::types::{
    ComparisonStats, ItemComparison, ItemReport, ListComparison, SavingsSummary, StorePrice,
    StoreRanking, StoreSummary, StoreTotals, TieredPrice,
};

/// `part / whole × 100`, or 0 when `whole` is 0.
fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

// =============================================================================
// Item Statistics
// =============================================================================

/// Computes cheapest/most-expensive/average/savings for one item.
///
/// ## Tie-breaking
/// Prices are stable-sorted ascending, so among equal cheapest prices the
/// first one in input order wins, and among equal top prices the last one
/// in input order is reported as most expensive.
///
/// ## Example
/// ```rust
/// use pricewise_core::comparison::calculate_item_stats;
/// use pricewise_core::StorePrice;
///
/// let stats = calculate_item_stats(&[
///     StorePrice::new("Store A", 10.0),
///     StorePrice::new("Store B", 15.0),
///     StorePrice::new("Store C", 12.0),
/// ]);
///
/// assert_eq!(stats.cheapest_store, "Store A");
/// assert_eq!(stats.most_expensive_store, "Store B");
/// assert_eq!(stats.savings, 5.0);
/// assert!((stats.average_price - 12.333).abs() < 0.001);
///
/// let empty = calculate_item_stats(&[]);
/// assert_eq!(empty.cheapest_store, "-");
/// ```
pub fn calculate_item_stats(prices: &[StorePrice]) -> ComparisonStats {
    if prices.is_empty() {
        return ComparisonStats::no_data();
    }

    let mut sorted: Vec<&StorePrice> = prices.iter().collect();
    sorted.sort_by(|a, b| a.price.total_cmp(&b.price));

    let cheapest = sorted[0];
    let most_expensive = sorted[sorted.len() - 1];

    let sum: f64 = prices.iter().map(|p| p.price).sum();
    // Summation error must not push the mean outside [min, max].
    let average = (sum / prices.len() as f64)
        .max(cheapest.price)
        .min(most_expensive.price);

    let savings = most_expensive.price - cheapest.price;

    ComparisonStats {
        cheapest_store: cheapest.store_name.clone(),
        cheapest_price: cheapest.price,
        most_expensive_store: most_expensive.store_name.clone(),
        most_expensive_price: most_expensive.price,
        average_price: average,
        savings,
        savings_percent: percent_of(savings, most_expensive.price),
    }
}

// =============================================================================
// Store Totals
// =============================================================================

/// Sums what the list costs at each target store.
///
/// For every store, each item contributes `price × quantity` if it has a
/// price at that store (first match by exact name) and nothing otherwise.
/// Every target store appears in the result, even with no coverage, in the
/// order given. Repeated store names are counted once.
///
/// ## Example
/// ```rust
/// use pricewise_core::comparison::calculate_store_totals;
/// use pricewise_core::{ItemComparison, StorePrice};
///
/// let milk = ItemComparison {
///     item_id: 1,
///     item_name: "Milk".into(),
///     quantity: 2,
///     unit: None,
///     prices: vec![StorePrice::new("A", 3.0), StorePrice::new("B", 4.0)],
/// };
///
/// let totals = calculate_store_totals(&[milk], &["A", "B", "C"]);
/// assert_eq!(totals.get("A").unwrap().total_cost, 6.0);
/// assert_eq!(totals.get("C").unwrap().item_count, 0);
/// ```
pub fn calculate_store_totals<S: AsRef<str>>(
    items: &[ItemComparison],
    stores: &[S],
) -> StoreTotals {
    let mut totals = StoreTotals::new();

    for store in stores {
        let store = store.as_ref();
        if totals.contains(store) {
            continue;
        }

        let mut summary = StoreSummary::empty(store);
        for item in items {
            if let Some(price) = item.price_at(store) {
                summary.total_cost += price * item.quantity as f64;
                summary.item_count += 1;
            }
        }
        if summary.item_count > 0 {
            summary.average_item_price = summary.total_cost / summary.item_count as f64;
        }

        totals.insert(summary);
    }

    totals
}

// =============================================================================
// Cross-Store Ranking
// =============================================================================

/// Linear scan; a later store replaces the pick only when `better` holds,
/// so exact ties keep the earlier store.
fn pick_store(totals: &StoreTotals, better: impl Fn(f64, f64) -> bool) -> Option<StoreRanking> {
    let mut iter = totals.iter();
    let mut best = iter.next()?;
    for summary in iter {
        if better(summary.total_cost, best.total_cost) {
            best = summary;
        }
    }
    Some(StoreRanking {
        store: best.store_name.clone(),
        cost: best.total_cost,
    })
}

/// Store with the lowest total. Ties go to the earlier store.
///
/// Returns `None` for empty totals.
pub fn find_cheapest_store(totals: &StoreTotals) -> Option<StoreRanking> {
    pick_store(totals, |candidate, best| candidate < best)
}

/// Store with the highest total. Ties go to the earlier store.
///
/// Returns `None` for empty totals.
pub fn find_most_expensive_store(totals: &StoreTotals) -> Option<StoreRanking> {
    pick_store(totals, |candidate, best| candidate > best)
}

/// Difference between the most- and least-expensive store totals.
///
/// `percent` is relative to the most-expensive total and is 0 when that
/// total is 0. Empty totals give `{ amount: 0, percent: 0 }`.
///
/// ## Example
/// ```rust
/// use pricewise_core::comparison::calculate_savings;
/// use pricewise_core::{StoreSummary, StoreTotals};
///
/// let totals: StoreTotals = [("A", 50.0), ("B", 45.0), ("C", 55.0)]
///     .into_iter()
///     .map(|(store, total)| StoreSummary { total_cost: total, ..StoreSummary::empty(store) })
///     .collect();
///
/// let savings = calculate_savings(&totals);
/// assert_eq!(savings.amount, 10.0);
/// assert!((savings.percent - 18.18).abs() < 0.01);
/// ```
pub fn calculate_savings(totals: &StoreTotals) -> SavingsSummary {
    let (Some(cheapest), Some(most_expensive)) = (
        find_cheapest_store(totals),
        find_most_expensive_store(totals),
    ) else {
        return SavingsSummary::default();
    };

    let amount = most_expensive.cost - cheapest.cost;
    SavingsSummary {
        amount,
        percent: percent_of(amount, most_expensive.cost),
    }
}

// =============================================================================
// List Comparison
// =============================================================================

/// Builds the full comparison report for a list.
///
/// Each observed price is tiered within its own item's price range.
pub fn compare_list<S: AsRef<str>>(items: &[ItemComparison], stores: &[S]) -> ListComparison {
    let reports = items
        .iter()
        .map(|item| {
            let stats = calculate_item_stats(&item.prices);
            let prices = item
                .prices
                .iter()
                .map(|p| TieredPrice {
                    store_name: p.store_name.clone(),
                    price: p.price,
                    tier: price_tier(p.price, stats.cheapest_price, stats.most_expensive_price),
                })
                .collect();

            ItemReport {
                item_id: item.item_id,
                item_name: item.item_name.clone(),
                quantity: item.quantity,
                unit: item.unit.clone(),
                stats,
                prices,
            }
        })
        .collect();

    let store_totals = calculate_store_totals(items, stores);

    ListComparison {
        items: reports,
        cheapest_store: find_cheapest_store(&store_totals),
        most_expensive_store: find_most_expensive_store(&store_totals),
        savings: calculate_savings(&store_totals),
        store_totals,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
