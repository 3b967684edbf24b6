//! Items

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshot of the restaurant that owns a line item, taken when it was added.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantRef {
    /// Restaurant identifier
    pub id: String,

    /// Restaurant display name
    pub name: String,

    /// Delivery fee charged by the restaurant
    #[serde(with = "rust_decimal::serde::float")]
    pub delivery_fee: Decimal,
}

impl RestaurantRef {
    /// Creates a new restaurant snapshot
    pub fn new(id: impl Into<String>, name: impl Into<String>, delivery_fee: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            delivery_fee,
        }
    }
}

/// Everything needed to put a menu item into the cart, minus the quantity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineItemDescriptor {
    /// Menu item identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Price of a single unit
    pub unit_price: Decimal,

    /// Optional image reference
    pub image: Option<String>,

    /// Owning restaurant
    pub restaurant: RestaurantRef,
}

/// A distinct menu item in the cart, with its own quantity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Menu item identifier, the identity used when merging
    pub id: String,

    /// Display name
    pub name: String,

    /// Price of a single unit
    #[serde(rename = "price", with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,

    /// Number of units
    pub quantity: u32,

    /// Optional image reference
    #[serde(default)]
    pub image: Option<String>,

    /// Owning restaurant at the time the item was added
    pub restaurant: RestaurantRef,
}

impl CartLineItem {
    /// Creates a line item from a descriptor and a quantity
    pub fn new(descriptor: LineItemDescriptor, quantity: u32) -> Self {
        let LineItemDescriptor {
            id,
            name,
            unit_price,
            image,
            restaurant,
        } = descriptor;

        Self {
            id,
            name,
            unit_price,
            quantity,
            image,
            restaurant,
        }
    }

    /// Returns the unrounded price of all units of this line, saturating at
    /// [`Decimal::MAX`] or [`Decimal::MIN`]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }

    /// Returns the unrounded price of all units of this line, or `None` if it
    /// cannot be represented
    pub fn checked_line_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }
}
