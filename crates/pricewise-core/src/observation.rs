//! # Observation Boundary
//!
//! Stored prices are integer cents with a currency and a timestamp. The
//! engine works on plain numbers. This module is the one place where the
//! two meet.
//!
//! ## Conversion Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  item_prices rows                                                       │
//! │  (store, 399, "USD", 2024-03-01) ─┐                                     │
//! │  (store, 429, "USD", 2024-03-08) ─┤                                     │
//! │                                   ▼                                     │
//! │                       latest_per_store      one row per store           │
//! │                                   ▼                                     │
//! │                       to_store_prices       currency check, ÷ 100       │
//! │                                   ▼                                     │
//! │                       StorePrice { store, 4.29 }  ──► comparison        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Deduplication is optional: the engine compares whatever it is given.
//! [`ItemRecord::to_comparison`] applies it because a list view wants the
//! current price per store, not every price ever recorded.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::comparison::calculate_item_stats;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{ItemComparison, StorePrice};
use crate::validation::{
    validate_item_name, validate_price_cents, validate_quantity, validate_store_name, validate_unit,
};
use crate::DEFAULT_CURRENCY;

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

// =============================================================================
// Price Observation
// =============================================================================

/// One recorded price for an item at a store, as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceObservation {
    pub store_name: String,
    /// Price in cents.
    pub price_cents: Money,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Missing timestamps sort before any real one.
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl PriceObservation {
    pub fn new(
        store_name: impl Into<String>,
        price_cents: Money,
        currency: impl Into<String>,
        recorded_at: Option<DateTime<Utc>>,
    ) -> Self {
        PriceObservation {
            store_name: store_name.into(),
            price_cents,
            currency: currency.into(),
            recorded_at,
        }
    }

    /// Case-insensitive currency check.
    pub fn is_in_currency(&self, currency: &str) -> bool {
        self.currency.eq_ignore_ascii_case(currency)
    }

    /// Converts to engine input in major units.
    pub fn to_store_price(&self) -> StorePrice {
        StorePrice::new(self.store_name.clone(), self.price_cents.to_major())
    }
}

/// Keeps the newest observation for each store.
///
/// Output is ordered by each store's first appearance. When timestamps are
/// equal (or both missing) the later observation in the input wins.
///
/// ## Example
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use pricewise_core::money::Money;
/// use pricewise_core::observation::{latest_per_store, PriceObservation};
///
/// let march = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
/// let april = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
///
/// let rows = vec![
///     PriceObservation::new("Mega", Money::from_cents(729), "ILS", Some(april)),
///     PriceObservation::new("Mega", Money::from_cents(699), "ILS", Some(march)),
/// ];
///
/// let latest = latest_per_store(&rows);
/// assert_eq!(latest.len(), 1);
/// assert_eq!(latest[0].price_cents.cents(), 729);
/// ```
pub fn latest_per_store(observations: &[PriceObservation]) -> Vec<PriceObservation> {
    let mut latest: Vec<PriceObservation> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for observation in observations {
        match index.get(observation.store_name.as_str()) {
            Some(&i) => {
                if observation.recorded_at >= latest[i].recorded_at {
                    latest[i] = observation.clone();
                }
            }
            None => {
                index.insert(observation.store_name.as_str(), latest.len());
                latest.push(observation.clone());
            }
        }
    }

    latest
}

/// Converts observations to engine input after checking they all use the
/// working currency.
///
/// ## Errors
/// [`CoreError::CurrencyMismatch`] on the first observation in another
/// currency. Nothing is converted between currencies.
pub fn to_store_prices(
    observations: &[PriceObservation],
    currency: &str,
) -> CoreResult<Vec<StorePrice>> {
    observations
        .iter()
        .map(|observation| {
            if !observation.is_in_currency(currency) {
                return Err(CoreError::CurrencyMismatch {
                    expected: currency.to_string(),
                    found: observation.currency.clone(),
                    store: observation.store_name.clone(),
                });
            }
            Ok(observation.to_store_price())
        })
        .collect()
}

// =============================================================================
// Item Record
// =============================================================================

/// A stored list item together with its recorded prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub observations: Vec<PriceObservation>,
}

fn default_quantity() -> i64 {
    1
}

impl ItemRecord {
    /// Validates the record and builds engine input in major units.
    ///
    /// Keeps only the newest observation per store.
    pub fn to_comparison(&self, currency: &str) -> CoreResult<ItemComparison> {
        validate_item_name(&self.name)?;
        validate_unit(self.unit.as_deref())?;
        let quantity = validate_quantity(self.quantity)?;
        for observation in &self.observations {
            validate_store_name(&observation.store_name)?;
            validate_price_cents(observation.price_cents.cents())?;
        }

        let latest = latest_per_store(&self.observations);

        Ok(ItemComparison {
            item_id: self.id,
            item_name: self.name.clone(),
            quantity,
            unit: self.unit.clone(),
            prices: to_store_prices(&latest, currency)?,
        })
    }
}

// =============================================================================
// Per-Item Price Comparison
// =============================================================================

/// Server-side summary of one item's prices, in major units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceComparison {
    pub item_name: String,
    pub cheapest_store: String,
    pub cheapest_price: f64,
    pub most_expensive_store: String,
    pub most_expensive_price: f64,
    pub average_price: f64,
    /// One entry per store in first-appearance order; a repeated store
    /// shows its last listed price.
    pub prices_by_store: Vec<StorePrice>,
}

/// Summarises stored observations for one item.
///
/// Converts cents to major units and delegates the statistics to
/// [`calculate_item_stats`], so both views of an item agree.
pub fn price_comparison(item_name: &str, observations: &[PriceObservation]) -> PriceComparison {
    let prices: Vec<StorePrice> = observations
        .iter()
        .map(PriceObservation::to_store_price)
        .collect();
    let stats = calculate_item_stats(&prices);

    let mut prices_by_store: Vec<StorePrice> = Vec::new();
    for price in &prices {
        match prices_by_store
            .iter_mut()
            .find(|p| p.store_name == price.store_name)
        {
            Some(existing) => existing.price = price.price,
            None => prices_by_store.push(price.clone()),
        }
    }

    PriceComparison {
        item_name: item_name.to_string(),
        cheapest_store: stats.cheapest_store,
        cheapest_price: stats.cheapest_price,
        most_expensive_store: stats.most_expensive_store,
        most_expensive_price: stats.most_expensive_price,
        average_price: stats.average_price,
        prices_by_store,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use chrono::TimeZone;

    fn at(day: u32) -> Option<DateTime<Utc>> {
        Some(Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap())
    }

    fn usd(store: &str, cents: i64, day: u32) -> PriceObservation {
        PriceObservation::new(store, Money::from_cents(cents), "USD", at(day))
    }

    #[test]
    fn test_to_store_price_converts_cents() {
        let price = usd("Kroger", 399, 1).to_store_price();
        assert_eq!(price, StorePrice::new("Kroger", 3.99));
    }

    #[test]
    fn test_latest_per_store_keeps_newest() {
        let rows = vec![
            usd("Target", 500, 1),
            usd("Walmart", 450, 2),
            usd("Target", 520, 9),
            usd("Target", 480, 4),
        ];

        let latest = latest_per_store(&rows);

        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].store_name, "Target");
        assert_eq!(latest[0].price_cents.cents(), 520);
        assert_eq!(latest[1].store_name, "Walmart");
    }

    #[test]
    fn test_latest_per_store_tie_goes_to_later_row() {
        let rows = vec![
            usd("Target", 500, 3),
            usd("Target", 510, 3),
            PriceObservation::new("Costco", Money::from_cents(900), "USD", None),
            PriceObservation::new("Costco", Money::from_cents(880), "USD", None),
        ];

        let latest = latest_per_store(&rows);
        assert_eq!(latest[0].price_cents.cents(), 510);
        assert_eq!(latest[1].price_cents.cents(), 880);
    }

    #[test]
    fn test_latest_per_store_timestamp_beats_missing() {
        let rows = vec![
            usd("Safeway", 300, 1),
            PriceObservation::new("Safeway", Money::from_cents(100), "USD", None),
        ];

        assert_eq!(latest_per_store(&rows)[0].price_cents.cents(), 300);
    }

    #[test]
    fn test_to_store_prices_rejects_other_currency() {
        let rows = vec![
            usd("Target", 500, 1),
            PriceObservation::new("Mega", Money::from_cents(729), "ILS", at(1)),
        ];

        let err = to_store_prices(&rows, "USD").unwrap_err();
        assert_eq!(
            err,
            CoreError::CurrencyMismatch {
                expected: "USD".to_string(),
                found: "ILS".to_string(),
                store: "Mega".to_string(),
            }
        );
    }

    #[test]
    fn test_to_store_prices_currency_is_case_insensitive() {
        let rows = vec![PriceObservation::new("Tesco", Money::from_cents(250), "gbp", None)];
        let prices = to_store_prices(&rows, "GBP").unwrap();
        assert_eq!(prices[0].price, 2.5);
    }

    #[test]
    fn test_item_record_to_comparison() {
        let record = ItemRecord {
            id: 3,
            name: "Eggs".to_string(),
            quantity: 2,
            unit: Some("dozen".to_string()),
            observations: vec![
                usd("Target", 399, 1),
                usd("Target", 429, 8),
                usd("Kroger", 379, 2),
            ],
        };

        let item = record.to_comparison("USD").unwrap();

        assert_eq!(item.item_id, 3);
        assert_eq!(item.quantity, 2);
        assert_eq!(item.unit.as_deref(), Some("dozen"));
        assert_eq!(
            item.prices,
            vec![StorePrice::new("Target", 4.29), StorePrice::new("Kroger", 3.79)]
        );
    }

    #[test]
    fn test_item_record_validation() {
        let mut record = ItemRecord {
            id: 1,
            name: "Milk".to_string(),
            quantity: 0,
            unit: None,
            observations: vec![],
        };
        assert_eq!(
            record.to_comparison("USD"),
            Err(CoreError::Validation(ValidationError::MustBePositive {
                field: "quantity".to_string()
            }))
        );

        record.quantity = 1;
        record.observations = vec![usd("Target", -5, 1)];
        assert!(matches!(
            record.to_comparison("USD"),
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));

        record.observations = vec![usd(" ", 100, 1)];
        assert!(matches!(
            record.to_comparison("USD"),
            Err(CoreError::Validation(ValidationError::Required { .. }))
        ));
    }

    #[test]
    fn test_item_record_json_defaults() {
        let record: ItemRecord = serde_json::from_str(
            r#"{
                "id": 9,
                "name": "Bread",
                "observations": [{ "storeName": "Mega", "priceCents": 529 }]
            }"#,
        )
        .unwrap();

        assert_eq!(record.quantity, 1);
        assert_eq!(record.observations[0].currency, "USD");
        assert_eq!(record.observations[0].recorded_at, None);
        assert_eq!(record.observations[0].price_cents, Money::from_cents(529));
    }

    #[test]
    fn test_price_comparison_matches_item_stats() {
        let rows = vec![usd("Target", 1000, 1), usd("Walmart", 1500, 1), usd("Kroger", 1200, 1)];

        let summary = price_comparison("Coffee", &rows);

        assert_eq!(summary.item_name, "Coffee");
        assert_eq!(summary.cheapest_store, "Target");
        assert_eq!(summary.cheapest_price, 10.0);
        assert_eq!(summary.most_expensive_store, "Walmart");
        assert_eq!(summary.most_expensive_price, 15.0);
        assert!((summary.average_price - 12.333).abs() < 0.001);
        assert_eq!(summary.prices_by_store.len(), 3);
    }

    #[test]
    fn test_price_comparison_repeated_store_shows_last_price() {
        let rows = vec![usd("Target", 1000, 1), usd("Walmart", 900, 1), usd("Target", 800, 2)];

        let summary = price_comparison("Coffee", &rows);

        assert_eq!(
            summary.prices_by_store,
            vec![StorePrice::new("Target", 8.0), StorePrice::new("Walmart", 9.0)]
        );
        assert_eq!(summary.cheapest_store, "Target");
    }

    #[test]
    fn test_price_comparison_without_observations() {
        let summary = price_comparison("Saffron", &[]);
        assert_eq!(summary.cheapest_store, "-");
        assert_eq!(summary.average_price, 0.0);
        assert!(summary.prices_by_store.is_empty());
    }
}
