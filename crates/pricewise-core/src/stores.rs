//! # Store Directory
//!
//! Suggested stores by location, coarse country detection, and share tokens
//! for shared lists.
//!
//! The directory is a small built-in table, not a live lookup:
//!
//! ```text
//! ┌──────────┬──────────────────────────────────────────────┬─────────────────────┐
//! │ Country  │ Default stores                               │ City overrides      │
//! ├──────────┼──────────────────────────────────────────────┼─────────────────────┤
//! │ US       │ Walmart, Target, Costco, Whole Foods, ...    │ CA, TX, NY          │
//! │ IL       │ Rami Levy, Tiv Taam, Mega, Yochananof, ...   │ Tel Aviv, Jerusalem │
//! │ GB       │ Tesco, Sainsbury's, Asda, ...                │                     │
//! │ DE       │ Edeka, Rewe, Aldi, ...                       │                     │
//! │ FR       │ Carrefour, Auchan, Leclerc, ...              │                     │
//! └──────────┴──────────────────────────────────────────────┴─────────────────────┘
//! ```

use uuid::Uuid;

/// Country used when nothing better is known.
pub const DEFAULT_COUNTRY: &str = "US";

struct CountryStores {
    code: &'static str,
    default: &'static [&'static str],
    cities: &'static [(&'static str, &'static [&'static str])],
}

const DIRECTORY: &[CountryStores] = &[
    CountryStores {
        code: "US",
        default: &["Walmart", "Target", "Costco", "Whole Foods", "Kroger", "Safeway"],
        cities: &[
            ("CA", &["Whole Foods", "Trader Joe's", "Sprouts", "Safeway"]),
            ("TX", &["HEB", "Walmart", "Target"]),
            ("NY", &["Whole Foods", "Trader Joe's", "Key Food"]),
        ],
    },
    CountryStores {
        code: "IL",
        default: &["Rami Levy", "Tiv Taam", "Mega", "Yochananof", "Osher Ad"],
        cities: &[
            ("Tel Aviv", &["Rami Levy", "Tiv Taam", "Mega"]),
            ("Jerusalem", &["Rami Levy", "Mega", "Yochananof"]),
        ],
    },
    CountryStores {
        code: "GB",
        default: &["Tesco", "Sainsbury's", "Asda", "Morrisons", "Waitrose"],
        cities: &[],
    },
    CountryStores {
        code: "DE",
        default: &["Edeka", "Rewe", "Aldi", "Lidl", "Kaufland"],
        cities: &[],
    },
    CountryStores {
        code: "FR",
        default: &["Carrefour", "Auchan", "Leclerc", "Monoprix", "Casino"],
        cities: &[],
    },
];

/// Latitude/longitude boxes, checked in order. Boxes overlap (GB and FR at
/// 50–51°N), so order matters.
const COUNTRY_BOUNDS: &[(&str, (f64, f64), (f64, f64))] = &[
    ("IL", (29.0, 34.0), (33.0, 36.0)),
    ("US", (24.0, 50.0), (-125.0, -66.0)),
    ("GB", (50.0, 59.0), (-8.0, 2.0)),
    ("DE", (47.0, 55.0), (6.0, 15.0)),
    ("FR", (42.0, 51.0), (-5.0, 8.0)),
];

fn find_country(code: &str) -> Option<&'static CountryStores> {
    DIRECTORY
        .iter()
        .find(|country| country.code.eq_ignore_ascii_case(code.trim()))
}

/// Returns the suggested stores for a country and optional city.
///
/// An unknown country gets the US list; an unknown city gets its country's
/// default list. City names match case-insensitively.
///
/// ## Example
/// ```rust
/// use pricewise_core::stores::stores_for_location;
///
/// assert!(stores_for_location("IL", None).contains(&"Rami Levy"));
/// assert_eq!(stores_for_location("US", Some("tx")), &["HEB", "Walmart", "Target"]);
/// assert_eq!(stores_for_location("ZZ", None), stores_for_location("US", None));
/// ```
pub fn stores_for_location(country: &str, city: Option<&str>) -> &'static [&'static str] {
    let Some(entry) = find_country(country).or_else(|| find_country(DEFAULT_COUNTRY)) else {
        return &[];
    };

    city.map(str::trim)
        .and_then(|city| {
            entry
                .cities
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(city))
        })
        .map(|(_, stores)| *stores)
        .unwrap_or(entry.default)
}

/// Country codes with a store list.
pub fn supported_countries() -> impl Iterator<Item = &'static str> {
    DIRECTORY.iter().map(|country| country.code)
}

/// Guesses a country code from coordinates.
///
/// Falls back to [`DEFAULT_COUNTRY`] when either coordinate is missing or
/// the point is outside every known box.
pub fn detect_country(latitude: Option<f64>, longitude: Option<f64>) -> &'static str {
    let (Some(lat), Some(lon)) = (latitude, longitude) else {
        return DEFAULT_COUNTRY;
    };

    COUNTRY_BOUNDS
        .iter()
        .find(|(_, (lat_min, lat_max), (lon_min, lon_max))| {
            (*lat_min..=*lat_max).contains(&lat) && (*lon_min..=*lon_max).contains(&lon)
        })
        .map(|(code, _, _)| *code)
        .unwrap_or(DEFAULT_COUNTRY)
}

/// Generates a token for sharing a list by link.
///
/// 32 lowercase hex characters (a random UUID v4 without hyphens).
pub fn generate_share_token() -> String {
    Uuid::new_v4().simple().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stores_for_known_country() {
        let stores = stores_for_location("IL", None);
        assert!(stores.contains(&"Rami Levy"));
        assert_eq!(stores.len(), 5);
        assert_eq!(stores_for_location("gb", None)[0], "Tesco");
    }

    #[test]
    fn test_stores_for_city_override() {
        assert_eq!(
            stores_for_location("IL", Some("Tel Aviv")),
            &["Rami Levy", "Tiv Taam", "Mega"]
        );
        assert_eq!(
            stores_for_location("IL", Some("jerusalem")),
            &["Rami Levy", "Mega", "Yochananof"]
        );
    }

    #[test]
    fn test_stores_fallbacks() {
        // unknown city → country default
        assert_eq!(
            stores_for_location("IL", Some("Haifa")),
            stores_for_location("IL", None)
        );
        // unknown country → US default
        let us = stores_for_location("US", None);
        assert_eq!(stores_for_location("JP", Some("Tokyo")), us);
        assert!(us.contains(&"Walmart"));
    }

    #[test]
    fn test_supported_countries() {
        let codes: Vec<_> = supported_countries().collect();
        assert_eq!(codes, vec!["US", "IL", "GB", "DE", "FR"]);
    }

    #[test]
    fn test_detect_country() {
        assert_eq!(detect_country(Some(32.08), Some(34.78)), "IL"); // Tel Aviv
        assert_eq!(detect_country(Some(40.71), Some(-74.0)), "US"); // New York
        assert_eq!(detect_country(Some(51.5), Some(-0.12)), "GB"); // London
        assert_eq!(detect_country(Some(52.52), Some(13.4)), "DE"); // Berlin
        assert_eq!(detect_country(Some(48.85), Some(2.35)), "FR"); // Paris
    }

    #[test]
    fn test_detect_country_defaults_to_us() {
        assert_eq!(detect_country(None, None), "US");
        assert_eq!(detect_country(Some(35.68), None), "US");
        assert_eq!(detect_country(Some(35.68), Some(139.69)), "US"); // Tokyo
    }

    #[test]
    fn test_share_token_shape() {
        let token = generate_share_token();
        assert_eq!(token.len(), 32);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_share_tokens_are_unique() {
        assert_ne!(generate_share_token(), generate_share_token());
    }
}
