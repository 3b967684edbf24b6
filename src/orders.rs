//! Orders
//!
//! The payload handed to the order-creation collaborator, and the order status
//! vocabulary shared with it.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::{cart::Cart, pricing::compute_totals};

/// Errors building an order request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderRequestError {
    /// There is nothing in the cart to order.
    #[error("cart is empty")]
    EmptyCart,

    /// A required customer field is missing or blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Lifecycle status of a placed order.
///
/// Deserializing is lenient: unknown keys read as [`OrderStatus::Placed`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Received, not yet acknowledged by the restaurant
    #[default]
    Placed,

    /// Accepted by the restaurant
    Confirmed,

    /// Being cooked
    Preparing,

    /// Waiting for a courier
    Ready,

    /// With the courier
    OutForDelivery,

    /// Handed to the customer
    Delivered,

    /// Will not be fulfilled
    Cancelled,
}

/// Unrecognised order status key.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown order status: {0}")]
pub struct UnknownOrderStatus(pub String);

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Placed,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Key used by the content store.
    pub fn key(self) -> &'static str {
        match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Customer facing label.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Placed => "Order Placed",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready for Pickup",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Parse a status key, treating anything unknown as [`OrderStatus::Placed`].
    pub fn from_key_lenient(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.key() == key)
            .ok_or_else(|| UnknownOrderStatus(key.to_string()))
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        let status = OrderStatus::from_key_lenient(&key);

        if status.key() != key {
            warn!(key = %key, "reading unknown order status as placed");
        }

        Ok(status)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Who the order is for and where it goes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerDetails {
    /// Customer name (required)
    pub name: String,

    /// Contact phone (required)
    pub phone: String,

    /// Delivery address (required)
    pub address: String,

    /// Free-form notes for the restaurant
    pub special_instructions: Option<String>,
}

impl CustomerDetails {
    /// Check that every required field has content.
    ///
    /// # Errors
    ///
    /// Returns [`OrderRequestError::MissingField`] naming the first blank field.
    pub fn validate(&self) -> Result<(), OrderRequestError> {
        [
            ("customer_name", &self.name),
            ("customer_phone", &self.phone),
            ("delivery_address", &self.address),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map_or(Ok(()), |(field, _)| Err(OrderRequestError::MissingField(field)))
    }
}

/// One ordered line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Menu item name at order time
    pub item_name: String,

    /// Units ordered
    pub quantity: u32,

    /// Unit price
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// `price * quantity`
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}

/// Payload for creating an order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Human readable order number
    pub order_number: String,

    /// Customer name
    pub customer_name: String,

    /// Customer phone
    pub customer_phone: String,

    /// Delivery address
    pub delivery_address: String,

    /// Restaurant fulfilling the order
    pub restaurant_id: String,

    /// Ordered lines
    pub items: Vec<OrderItem>,

    /// Rounded subtotal
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,

    /// Rounded delivery fee
    #[serde(with = "rust_decimal::serde::float")]
    pub delivery_fee: Decimal,

    /// Rounded tax
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,

    /// Rounded amount payable
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,

    /// Notes for the restaurant, empty when none were given
    pub special_instructions: String,
}

impl OrderRequest {
    /// Build the order for everything in `cart`.
    ///
    /// The restaurant is the one of the first cart line.
    ///
    /// # Errors
    ///
    /// Returns [`OrderRequestError::EmptyCart`] for an empty cart and
    /// [`OrderRequestError::MissingField`] when customer details are incomplete.
    pub fn from_cart(
        cart: &Cart,
        customer: &CustomerDetails,
        order_number: impl Into<String>,
    ) -> Result<Self, OrderRequestError> {
        let restaurant = cart.restaurant().ok_or(OrderRequestError::EmptyCart)?;

        customer.validate()?;

        let totals = compute_totals(cart);

        let items = cart
            .items()
            .iter()
            .map(|line| OrderItem {
                item_name: line.name.clone(),
                quantity: line.quantity,
                price: line.unit_price,
                subtotal: line.line_total(),
            })
            .collect();

        Ok(Self {
            order_number: order_number.into(),
            customer_name: customer.name.clone(),
            customer_phone: customer.phone.clone(),
            delivery_address: customer.address.clone(),
            restaurant_id: restaurant.id.clone(),
            items,
            subtotal: totals.subtotal,
            delivery_fee: totals.delivery_fee,
            tax: totals.tax,
            total_amount: totals.total,
            special_instructions: customer.special_instructions.clone().unwrap_or_default(),
        })
    }
}

/// Order number derived from a Unix timestamp in milliseconds, e.g. `ORD-1718000000000`.
pub fn order_number(unix_millis: i64) -> String {
    format!("ORD-{unix_millis}")
}
