//! Receipt

use std::io;

use rust_decimal::Decimal;
use rusty_money::{Money, iso};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    cart::Cart,
    pricing::{Totals, compute_totals},
};

/// Errors that can occur when rendering a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Writing to the output failed.
    #[error("IO error")]
    IO,
}

/// Printable summary of a cart and its totals.
#[derive(Debug, Clone)]
pub struct CartReceipt<'a> {
    cart: &'a Cart,
    totals: Totals,
}

impl<'a> CartReceipt<'a> {
    /// Create a receipt for the given cart.
    pub fn new(cart: &'a Cart) -> Self {
        Self {
            cart,
            totals: compute_totals(cart),
        }
    }

    /// Totals shown on the receipt.
    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    /// Render the receipt as a table followed by the summary lines.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::IO`] if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        if self.cart.is_empty() {
            return writeln!(out, "Your cart is empty").map_err(|_err| ReceiptError::IO);
        }

        if let Some(restaurant) = self.cart.restaurant() {
            writeln!(out, "From {}", restaurant.name).map_err(|_err| ReceiptError::IO)?;
        }

        let mut builder = Builder::default();

        builder.push_record(["Item", "Qty", "Price", "Line Total"]);

        for line in self.cart {
            builder.push_record([
                line.name.clone(),
                line.quantity.to_string(),
                usd(line.unit_price),
                usd(line.line_total()),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..4), Alignment::right());

        writeln!(out, "{table}").map_err(|_err| ReceiptError::IO)?;

        write_summary(&mut out, &self.totals)?;

        if self.cart.has_multiple_restaurants() {
            writeln!(
                out,
                "Warning: this cart contains items from more than one restaurant"
            )
            .map_err(|_err| ReceiptError::IO)?;
        }

        Ok(())
    }
}

fn write_summary(out: &mut impl io::Write, totals: &Totals) -> Result<(), ReceiptError> {
    let lines = [
        ("Subtotal:", usd(totals.subtotal)),
        ("Delivery Fee:", usd(totals.delivery_fee)),
        ("Tax:", usd(totals.tax)),
        ("Total:", usd(totals.total)),
    ];

    let label_width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = lines.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

    for (label, value) in lines {
        writeln!(out, " {label:<label_width$} {value:>value_width$}")
            .map_err(|_err| ReceiptError::IO)?;
    }

    writeln!(out, " Items: {}", totals.item_count).map_err(|_err| ReceiptError::IO)
}

/// Format an amount as US dollars.
pub fn usd(amount: Decimal) -> String {
    Money::from_decimal(amount, iso::USD).to_string()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::items::{LineItemDescriptor, RestaurantRef};

    use super::*;

    fn line(id: &str, restaurant: &str, price: Decimal) -> LineItemDescriptor {
        LineItemDescriptor {
            id: id.to_string(),
            name: format!("{id} dish"),
            unit_price: price,
            image: None,
            restaurant: RestaurantRef::new(restaurant, "Diner", Decimal::new(500, 2)),
        }
    }

    fn render(cart: &Cart) -> Result<String, Box<dyn std::error::Error>> {
        let mut out = Vec::new();
        CartReceipt::new(cart).write_to(&mut out)?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn renders_lines_and_totals() -> TestResult {
        let mut cart = Cart::new();
        cart.add(line("pancakes", "r1", Decimal::new(1000, 2)), 2);
        cart.add(line("coffee", "r1", Decimal::new(350, 2)), 1);

        let output = render(&cart)?;

        assert!(output.contains("From Diner"));
        assert!(output.contains("pancakes dish"));
        assert!(output.contains("coffee dish"));
        assert!(output.contains("Subtotal:"));
        assert!(output.contains("23.50"));
        assert!(output.contains("30.50"));
        assert!(output.contains("Items: 3"));
        assert!(!output.contains("Warning"));

        Ok(())
    }

    #[test]
    fn warns_about_mixed_restaurants() -> TestResult {
        let mut cart = Cart::new();
        cart.add(line("pancakes", "r1", Decimal::ONE), 1);
        cart.add(line("sushi", "r2", Decimal::ONE), 1);

        let output = render(&cart)?;

        assert!(output.contains("more than one restaurant"));

        Ok(())
    }

    #[test]
    fn empty_cart_has_short_message() -> TestResult {
        let output = render(&Cart::new())?;

        assert_eq!(output, "Your cart is empty\n");

        Ok(())
    }

    #[test]
    fn usd_uses_dollar_sign() {
        assert!(usd(Decimal::new(1999, 2)).contains('$'));
        assert!(usd(Decimal::new(1999, 2)).contains("19.99"));
    }
}
