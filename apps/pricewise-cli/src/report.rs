//! # Text Reports
//!
//! Plain-text rendering of a [`ListComparison`] for the terminal.
//!
//! ```text
//! Milk x2 liters
//!   Target                $3.99  expensive
//!   Walmart               $3.49  cheap
//!   Cheapest at Walmart, save $0.50 (12.5%), average $3.74
//!
//! Store totals
//!   Target                $7.98  1 item   avg $7.98
//!   Walmart               $6.98  1 item   avg $6.98
//!
//! Cheapest store:        Walmart ($6.98)
//! Most expensive store:  Target ($7.98)
//! Potential savings:     $1.00 (12.5%)
//! ```

use std::fmt;

use pricewise_core::format::{format_percent, CurrencyFormat};
use pricewise_core::{ItemReport, ListComparison, StoreRanking};

/// Width of the store-name column.
const STORE_COLUMN: usize = 16;

/// Width of the amount column.
const AMOUNT_COLUMN: usize = 10;

/// [`fmt::Display`] adapter that renders a comparison with a currency format.
pub struct TextReport<'a> {
    report: &'a ListComparison,
    currency: &'a CurrencyFormat,
}

impl<'a> TextReport<'a> {
    pub fn new(report: &'a ListComparison, currency: &'a CurrencyFormat) -> Self {
        TextReport { report, currency }
    }

    fn write_item(&self, f: &mut fmt::Formatter<'_>, item: &ItemReport) -> fmt::Result {
        write!(f, "{}", item.item_name)?;
        if item.quantity != 1 {
            write!(f, " x{}", item.quantity)?;
        }
        if let Some(unit) = &item.unit {
            write!(f, " {}", unit)?;
        }
        writeln!(f)?;

        if !item.stats.has_data() {
            return writeln!(f, "  no prices recorded");
        }

        for price in &item.prices {
            writeln!(
                f,
                "  {:<STORE_COLUMN$} {:>AMOUNT_COLUMN$}  {}",
                price.store_name,
                self.currency.format(price.price),
                price.tier
            )?;
        }

        writeln!(
            f,
            "  Cheapest at {}, save {} ({}), average {}",
            item.stats.cheapest_store,
            self.currency.format(item.stats.savings),
            format_percent(item.stats.savings_percent),
            self.currency.format(item.stats.average_price)
        )
    }

    fn write_ranking(
        &self,
        f: &mut fmt::Formatter<'_>,
        label: &str,
        ranking: Option<&StoreRanking>,
    ) -> fmt::Result {
        match ranking {
            Some(ranking) => writeln!(
                f,
                "{:<22} {} ({})",
                label,
                ranking.store,
                self.currency.format(ranking.cost)
            ),
            None => writeln!(f, "{:<22} -", label),
        }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.report.items {
            self.write_item(f, item)?;
            writeln!(f)?;
        }

        writeln!(f, "Store totals")?;
        if self.report.store_totals.is_empty() {
            writeln!(f, "  no stores to compare")?;
        }
        for summary in &self.report.store_totals {
            let noun = if summary.item_count == 1 { "item" } else { "items" };
            writeln!(
                f,
                "  {:<STORE_COLUMN$} {:>AMOUNT_COLUMN$}  {} {:<5}  avg {}",
                summary.store_name,
                self.currency.format(summary.total_cost),
                summary.item_count,
                noun,
                self.currency.format(summary.average_item_price)
            )?;
        }
        writeln!(f)?;

        self.write_ranking(f, "Cheapest store:", self.report.cheapest_store.as_ref())?;
        self.write_ranking(
            f,
            "Most expensive store:",
            self.report.most_expensive_store.as_ref(),
        )?;
        writeln!(
            f,
            "{:<22} {} ({})",
            "Potential savings:",
            self.currency.format(self.report.savings.amount),
            format_percent(self.report.savings.percent)
        )
    }
}
