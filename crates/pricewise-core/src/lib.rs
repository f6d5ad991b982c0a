//! # pricewise-core: Pure Price Comparison Engine
//!
//! This crate turns raw per-store price observations into comparison
//! statistics. It has zero I/O dependencies; storage, authentication and
//! rendering belong to the caller.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pricewise Data Flow                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │         Request handler / CLI (loads stored price rows)         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ PriceObservation (cents)               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ pricewise-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   observation ──► comparison ──► format                         │   │
//! │  │   cents → major   stats, totals   "$10.50", "33.3%", tiers      │   │
//! │  │                   rankings, savings                             │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ListComparison (serde / ts-rs)         │
//! │                                ▼                                        │
//! │                       JSON response / text report                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Engine inputs and outputs (StorePrice, ComparisonStats, ...)
//! - [`money`] - Integer-cent money type used for stored prices
//! - [`comparison`] - Item statistics, store totals, rankings and savings
//! - [`observation`] - Stored observations and the cents → major boundary
//! - [`format`] - Currency/percent strings and price tiers
//! - [`validation`] - Input checks for the boundary layer
//! - [`parse`] - Pasted shopping-list text splitting
//! - [`stores`] - Static store directory and share tokens
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Total Functions**: the engine never fails; degenerate input yields
//!    defined fallback values (`"-"`, `0`, `None`)
//! 2. **Unit Agnostic**: the engine works in whatever unit it is handed;
//!    conversion from stored cents happens once, in [`observation`]
//! 3. **Deterministic Ties**: equal prices and totals resolve by input order
//!
//! ## Example Usage
//!
//! ```rust
//! use pricewise_core::comparison::calculate_item_stats;
//! use pricewise_core::format::{format_percent, format_price};
//! use pricewise_core::StorePrice;
//!
//! let prices = vec![
//!     StorePrice::new("Store A", 10.0),
//!     StorePrice::new("Store B", 15.0),
//!     StorePrice::new("Store C", 12.0),
//! ];
//!
//! let stats = calculate_item_stats(&prices);
//! assert_eq!(stats.cheapest_store, "Store A");
//! assert_eq!(format_price(stats.savings), "$5.00");
//! assert_eq!(format_percent(stats.savings_percent), "33.3%");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod comparison;
pub mod error;
pub mod format;
pub mod money;
pub mod observation;
pub mod parse;
pub mod stores;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Store name reported when an item has no price observations.
pub const NO_DATA_STORE: &str = "-";

/// Working currency when none is configured (ISO 4217).
pub const DEFAULT_CURRENCY: &str = "USD";

/// Maximum length of list, item and store names.
///
/// Matches the `varchar(255)` columns of the storage layer.
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum length of a unit label ("kg", "bottles", ...).
pub const MAX_UNIT_LENGTH: usize = 50;

/// Maximum quantity of a single list item.
///
/// Prevents accidental over-ordering (typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
