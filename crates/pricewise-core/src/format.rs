//! # Presentation Helpers
//!
//! Display strings and price tiers for comparison results. Purely cosmetic:
//! nothing here converts between currencies.
//!
//! ## Price Tiers
//! ```text
//! position = (price - min) / (max - min)
//!
//!   min                                                          max
//!    ├────────────────────┼────────────────────┼────────────────────┤
//!    0                  0.33                 0.67                   1
//!    │      Cheap         │        Mid         │     Expensive      │
//!
//!  min == max  →  Cheap (no variation to rank)
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Upper bound (exclusive) of the cheap tier, as a position in the range.
pub const CHEAP_TIER_MAX: f64 = 0.33;

/// Upper bound (exclusive) of the mid tier.
pub const MID_TIER_MAX: f64 = 0.67;

// =============================================================================
// Currency Formatting
// =============================================================================

/// Currency display settings.
///
/// ## Example
/// ```rust
/// use pricewise_core::format::CurrencyFormat;
///
/// let shekel = CurrencyFormat::new("₪", 2);
/// assert_eq!(shekel.format(6.99), "₪6.99");
///
/// let yen = CurrencyFormat::new("¥", 0);
/// assert_eq!(yen.format(1200.0), "¥1200");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimals: u8,
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>, decimals: u8) -> Self {
        CurrencyFormat {
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Renders a major-unit amount, e.g. `10.5` → `"$10.50"`.
    ///
    /// Negative amounts put the sign before the symbol (`"-$1.50"`). An
    /// amount that rounds to zero never shows a sign.
    pub fn format(&self, amount: f64) -> String {
        let digits = format!("{:.*}", self.decimals as usize, amount.abs());
        let rounds_to_zero = digits.chars().all(|c| c == '0' || c == '.');
        let sign = if amount < 0.0 && !rounds_to_zero {
            "-"
        } else {
            ""
        };
        format!("{}{}{}", sign, self.symbol, digits)
    }
}

impl Default for CurrencyFormat {
    /// US dollars, two decimals.
    fn default() -> Self {
        CurrencyFormat::new("$", 2)
    }
}

/// Formats a price as `$` plus two decimals.
///
/// ## Example
/// ```rust
/// use pricewise_core::format::format_price;
///
/// assert_eq!(format_price(10.0), "$10.00");
/// assert_eq!(format_price(10.5), "$10.50");
/// assert_eq!(format_price(0.99), "$0.99");
/// ```
pub fn format_price(price: f64) -> String {
    CurrencyFormat::default().format(price)
}

/// Formats a percentage with one decimal and a `%` suffix.
///
/// ## Example
/// ```rust
/// use pricewise_core::format::format_percent;
///
/// assert_eq!(format_percent(33.333), "33.3%");
/// assert_eq!(format_percent(0.0), "0.0%");
/// ```
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

// =============================================================================
// Price Tier
// =============================================================================

/// Where a price falls within the observed range for an item.
///
/// Ordered from cheapest to most expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    /// Bottom third of the range.
    Cheap,
    /// Middle third.
    Mid,
    /// Top third.
    Expensive,
}

impl PriceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::Cheap => "cheap",
            PriceTier::Mid => "mid",
            PriceTier::Expensive => "expensive",
        }
    }
}

impl std::fmt::Display for PriceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies `price` within `[min, max]`.
///
/// A zero-width (or inverted) range classifies as [`PriceTier::Cheap`].
///
/// ## Example
/// ```rust
/// use pricewise_core::format::{price_tier, PriceTier};
///
/// assert_eq!(price_tier(15.0, 10.0, 30.0), PriceTier::Cheap);
/// assert_eq!(price_tier(20.0, 10.0, 30.0), PriceTier::Mid);
/// assert_eq!(price_tier(30.0, 10.0, 30.0), PriceTier::Expensive);
/// assert_eq!(price_tier(10.0, 10.0, 10.0), PriceTier::Cheap);
/// ```
pub fn price_tier(price: f64, min: f64, max: f64) -> PriceTier {
    let range = max - min;
    let position = if range > 0.0 {
        (price - min) / range
    } else {
        0.0
    };

    if position < CHEAP_TIER_MAX {
        PriceTier::Cheap
    } else if position < MID_TIER_MAX {
        PriceTier::Mid
    } else {
        PriceTier::Expensive
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
