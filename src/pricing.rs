//! Pricing

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::cart::Cart;

/// Number of decimal places every currency figure is rounded to.
const CENT_PLACES: u32 = 2;

/// Sales tax applied to the subtotal (8.5%).
pub fn tax_rate() -> Percentage {
    Percentage::from(Decimal::new(85, 3))
}

/// Monetary summary of a cart. Derived on demand, never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    /// Sum of every line total
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,

    /// Delivery fee of the cart's restaurant
    #[serde(with = "rust_decimal::serde::float")]
    pub delivery_fee: Decimal,

    /// Tax on the subtotal
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,

    /// Amount payable
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,

    /// Number of units across all lines
    pub item_count: u64,
}

/// Calculates the totals of a cart.
///
/// The delivery fee is taken from the first line only. `total` is summed from the
/// unrounded subtotal, fee and tax, and each of the four figures is then rounded to
/// cents on its own, half away from zero. Amounts too large to represent saturate
/// at [`Decimal::MAX`] or [`Decimal::MIN`]; see [`checked_totals`] to detect this.
pub fn compute_totals(cart: &Cart) -> Totals {
    let subtotal = cart
        .items()
        .iter()
        .fold(Decimal::ZERO, |sum, line| sum.saturating_add(line.line_total()));

    let delivery_fee = first_delivery_fee(cart);
    let tax = tax_rate() * subtotal;
    let total = subtotal.saturating_add(delivery_fee).saturating_add(tax);

    rounded(subtotal, delivery_fee, tax, total, item_count(cart))
}

/// Calculates the totals of a cart, returning `None` if any amount overflows.
pub fn checked_totals(cart: &Cart) -> Option<Totals> {
    let subtotal = cart
        .items()
        .iter()
        .try_fold(Decimal::ZERO, |sum, line| {
            sum.checked_add(line.checked_line_total()?)
        })?;

    let delivery_fee = first_delivery_fee(cart);
    let tax = tax_rate() * subtotal;
    let total = subtotal.checked_add(delivery_fee)?.checked_add(tax)?;

    Some(rounded(subtotal, delivery_fee, tax, total, item_count(cart)))
}

fn first_delivery_fee(cart: &Cart) -> Decimal {
    cart.restaurant()
        .map_or(Decimal::ZERO, |restaurant| restaurant.delivery_fee)
}

fn item_count(cart: &Cart) -> u64 {
    cart.items()
        .iter()
        .map(|line| u64::from(line.quantity))
        .sum()
}

fn rounded(
    subtotal: Decimal,
    delivery_fee: Decimal,
    tax: Decimal,
    total: Decimal,
    item_count: u64,
) -> Totals {
    Totals {
        subtotal: round_cents(subtotal),
        delivery_fee: round_cents(delivery_fee),
        tax: round_cents(tax),
        total: round_cents(total),
        item_count,
    }
}

/// Rounds an amount to whole cents, half away from zero.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CENT_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
