//! Receipt
//!
//! Plain-text rendering of a cart: one table row per line, followed by the
//! item count and total.

use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{Alignment, Style, Theme, object::Columns},
};
use thiserror::Error;

use crate::{cart::Cart, pricing::format_price, views::cart_summary::EMPTY_CART_MESSAGE};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error
    #[error("IO error")]
    IO,
}

/// One receipt row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    /// Name before the hyphen
    pub item: String,

    /// Name after the hyphen, blank if none
    pub weight: String,

    /// Units
    pub quantity: u32,

    /// Formatted unit price
    pub unit_price: String,

    /// Formatted line total
    pub line_total: String,
}

/// Receipt for a cart snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    lines: Vec<ReceiptLine>,
    item_count: u64,
    total: String,
}

impl Receipt {
    /// Build a receipt from the cart's current lines.
    pub fn from_cart(cart: &Cart) -> Self {
        let lines = cart
            .iter()
            .map(|line| {
                let name = line.display_name();

                ReceiptLine {
                    item: name.title.to_string(),
                    weight: name.weight.unwrap_or_default().to_string(),
                    quantity: line.quantity(),
                    unit_price: format_price(line.price()),
                    line_total: format_price(line.line_total()),
                }
            })
            .collect();

        Self {
            lines,
            item_count: cart.item_count(),
            total: format_price(cart.total()),
        }
    }

    /// Receipt rows in cart order.
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Total units.
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    /// Formatted total.
    pub fn total(&self) -> &str {
        &self.total
    }

    /// Write the receipt as a table.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::IO`] if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        if self.lines.is_empty() {
            return writeln!(out, "{EMPTY_CART_MESSAGE}").map_err(|_err| ReceiptError::IO);
        }

        let mut builder = Builder::default();

        builder.push_record(["Item", "Weight", "Qty", "Unit Price", "Total"]);

        for line in &self.lines {
            builder.push_record([
                line.item.clone(),
                line.weight.clone(),
                line.quantity.to_string(),
                line.unit_price.clone(),
                line.line_total.clone(),
            ]);
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(
            1,
            HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
        );

        table.with(theme);
        table.modify(Columns::new(2..5), Alignment::right());

        writeln!(out, "\n{table}").map_err(|_err| ReceiptError::IO)?;

        writeln!(out, " Items: {}", self.item_count).map_err(|_err| ReceiptError::IO)?;
        writeln!(out, " Total: {}", self.total).map_err(|_err| ReceiptError::IO)?;

        Ok(())
    }
}
