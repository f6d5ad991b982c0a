//! # Comparison Request
//!
//! The JSON document handed to `pricewise compare`:
//!
//! ```json
//! {
//!   "stores": ["Rami Levy", "Mega"],
//!   "country": "IL",
//!   "city": "Tel Aviv",
//!   "items": [
//!     {
//!       "id": 1,
//!       "name": "Milk",
//!       "quantity": 2,
//!       "unit": "liters",
//!       "observations": [
//!         { "storeName": "Mega", "priceCents": 690, "currency": "ILS" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! ## Target Stores
//! ```text
//! "stores" given? ──yes──► use it as is
//!        │ no
//!        ▼
//! any observed stores? ──yes──► every observed store, first appearance first
//!        │ no
//!        ▼
//! store directory for the location (request > coordinates > config)
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use pricewise_core::observation::ItemRecord;
use pricewise_core::stores::{detect_country, stores_for_location};
use pricewise_core::ItemComparison;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// A list to compare, with the prices recorded for each item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRequest {
    #[serde(default)]
    pub stores: Option<Vec<String>>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub items: Vec<ItemRecord>,
}

impl ComparisonRequest {
    pub fn from_path(path: &Path) -> CliResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| CliError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Country and city for the store directory.
    ///
    /// An explicit country wins over coordinates; coordinates win over the
    /// configured country. The city only applies alongside an explicit or
    /// configured country.
    pub fn location(&self, config: &CliConfig) -> (String, Option<String>) {
        if let Some(country) = &self.country {
            return (country.clone(), self.city.clone());
        }

        if let (Some(_), Some(_)) = (self.latitude, self.longitude) {
            let detected = detect_country(self.latitude, self.longitude);
            debug!(country = detected, "Detected country from coordinates");
            return (detected.to_string(), None);
        }

        (
            config.country.clone(),
            self.city.clone().or_else(|| config.city.clone()),
        )
    }

    /// Validates every item and converts it to engine input in `currency`.
    ///
    /// Observations recorded in another currency are dropped with a warning.
    pub fn comparison_items(&self, currency: &str) -> CliResult<Vec<ItemComparison>> {
        self.items
            .iter()
            .map(|record| {
                let (kept, skipped): (Vec<_>, Vec<_>) = record
                    .observations
                    .iter()
                    .cloned()
                    .partition(|observation| observation.is_in_currency(currency));

                for observation in &skipped {
                    warn!(
                        item = %record.name,
                        store = %observation.store_name,
                        currency = %observation.currency,
                        expected = currency,
                        "Skipping price in another currency"
                    );
                }
                if kept.is_empty() {
                    warn!(item = %record.name, "No prices recorded for item");
                }

                let record = ItemRecord {
                    observations: kept,
                    ..record.clone()
                };
                record
                    .to_comparison(currency)
                    .map_err(|source| CliError::InvalidItem {
                        name: record.name.clone(),
                        source,
                    })
            })
            .collect()
    }

    /// Stores to total across, in report order.
    pub fn target_stores(&self, items: &[ItemComparison], config: &CliConfig) -> Vec<String> {
        if let Some(stores) = &self.stores {
            return stores.clone();
        }

        let mut observed: Vec<String> = Vec::new();
        for price in items.iter().flat_map(|item| &item.prices) {
            if !observed.contains(&price.store_name) {
                observed.push(price.store_name.clone());
            }
        }
        if !observed.is_empty() {
            return observed;
        }

        let (country, city) = self.location(config);
        debug!(%country, ?city, "No observed stores, using store directory");
        stores_for_location(&country, city.as_deref())
            .iter()
            .map(|store| store.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            log_level: "info".to_string(),
            country: "US".to_string(),
            city: None,
        }
    }

    fn request(json: &str) -> ComparisonRequest {
        serde_json::from_str(json).unwrap()
    }

    const TWO_STORES: &str = r#"{
        "items": [
            {
                "id": 1,
                "name": "Milk",
                "quantity": 2,
                "observations": [
                    { "storeName": "Target", "priceCents": 399 },
                    { "storeName": "Walmart", "priceCents": 349 }
                ]
            },
            {
                "id": 2,
                "name": "Bread",
                "observations": [
                    { "storeName": "Kroger", "priceCents": 250 },
                    { "storeName": "Target", "priceCents": 299 },
                    { "storeName": "Mega", "priceCents": 990, "currency": "ILS" }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_comparison_items_skips_other_currency() {
        let items = request(TWO_STORES).comparison_items("USD").unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[1].prices.len(), 2);
        assert_eq!(items[1].price_at("Mega"), None);
        assert_eq!(items[1].price_at("Kroger"), Some(2.5));
    }

    #[test]
    fn test_comparison_items_reports_invalid_item() {
        let req = request(r#"{ "items": [{ "id": 1, "name": "Milk", "quantity": 0 }] }"#);

        let err = req.comparison_items("USD").unwrap_err();
        assert!(matches!(err, CliError::InvalidItem { ref name, .. } if name == "Milk"));
    }

    #[test]
    fn test_target_stores_from_observations() {
        let req = request(TWO_STORES);
        let items = req.comparison_items("USD").unwrap();

        assert_eq!(
            req.target_stores(&items, &config()),
            vec!["Target", "Walmart", "Kroger"]
        );
    }

    #[test]
    fn test_target_stores_explicit_list_wins() {
        let mut req = request(TWO_STORES);
        req.stores = Some(vec!["Costco".to_string(), "Target".to_string()]);
        let items = req.comparison_items("USD").unwrap();

        assert_eq!(req.target_stores(&items, &config()), vec!["Costco", "Target"]);
    }

    #[test]
    fn test_target_stores_falls_back_to_directory() {
        let req = request(r#"{ "country": "IL", "city": "Jerusalem", "items": [] }"#);

        assert_eq!(
            req.target_stores(&[], &config()),
            vec!["Rami Levy", "Mega", "Yochananof"]
        );
    }

    #[test]
    fn test_location_priority() {
        let cfg = CliConfig {
            city: Some("NY".to_string()),
            ..config()
        };

        let from_config = request(r#"{ "items": [] }"#);
        assert_eq!(
            from_config.location(&cfg),
            ("US".to_string(), Some("NY".to_string()))
        );

        let from_coordinates =
            request(r#"{ "latitude": 48.85, "longitude": 2.35, "items": [] }"#);
        assert_eq!(from_coordinates.location(&cfg), ("FR".to_string(), None));

        let explicit = request(
            r#"{ "country": "GB", "latitude": 48.85, "longitude": 2.35, "items": [] }"#,
        );
        assert_eq!(explicit.location(&cfg).0, "GB");
    }

    #[test]
    fn test_location_from_coordinates_ignores_city() {
        // a city only makes sense next to the country it belongs to
        let req = request(
            r#"{ "city": "Jerusalem", "latitude": 40.71, "longitude": -74.0, "items": [] }"#,
        );

        assert_eq!(req.location(&config()), ("US".to_string(), None));
        assert_eq!(
            req.target_stores(&[], &config()),
            stores_for_location("US", None)
        );
    }

    #[test]
    fn test_from_path_reports_missing_file() {
        let err =
            ComparisonRequest::from_path(Path::new("/nonexistent/list.json")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
