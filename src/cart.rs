//! Cart

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::{
    items::{CartLineItem, LineItemDescriptor, RestaurantRef},
    pricing::{Totals, compute_totals},
};

/// Ordered list of line items, unique by item id.
///
/// Serializes as a bare JSON array so it can be stored in the same layout the
/// storefront has always used.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Create a new, empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cart holding the given line items, in order.
    pub fn with_items(items: impl Into<Vec<CartLineItem>>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// Add `quantity` units of an item.
    ///
    /// An existing line with the same id keeps its position and fields and only has its
    /// quantity increased. Anything else is appended at the end.
    pub fn add(&mut self, item: LineItemDescriptor, quantity: u32) {
        if let Some(existing) = self.items.iter_mut().find(|line| line.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartLineItem::new(item, quantity));
        }
    }

    /// Replace the quantity of an item in place, removing it when `quantity` is not positive.
    pub fn set_quantity(&mut self, item_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(item_id);
        } else if let Some(line) = self.get_mut(item_id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Remove an item by id. Unknown ids are ignored.
    pub fn remove(&mut self, item_id: &str) {
        self.items.retain(|line| line.id != item_id);
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get a line item by id.
    pub fn get(&self, item_id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|line| line.id == item_id)
    }

    fn get_mut(&mut self, item_id: &str) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|line| line.id == item_id)
    }

    /// Line items in cart order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Get the number of distinct line items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Calculate the totals for the cart.
    pub fn totals(&self) -> Totals {
        compute_totals(self)
    }

    /// Whether the cart holds items from more than one restaurant.
    ///
    /// Carts with fewer than two items never count as mixed.
    pub fn has_multiple_restaurants(&self) -> bool {
        if self.items.len() <= 1 {
            return false;
        }

        let restaurants: FxHashSet<&str> = self
            .items
            .iter()
            .map(|line| line.restaurant.id.as_str())
            .collect();

        restaurants.len() > 1
    }

    /// The restaurant of the first item, if any. The remaining items are not checked.
    pub fn restaurant(&self) -> Option<&RestaurantRef> {
        self.items.first().map(|line| &line.restaurant)
    }
}

impl From<Vec<CartLineItem>> for Cart {
    fn from(items: Vec<CartLineItem>) -> Self {
        Self::with_items(items)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLineItem;
    type IntoIter = std::slice::Iter<'a, CartLineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    fn descriptor(id: &str, restaurant: &str) -> LineItemDescriptor {
        LineItemDescriptor {
            id: id.to_string(),
            name: id.to_uppercase(),
            unit_price: Decimal::new(500, 2),
            image: None,
            restaurant: RestaurantRef::new(restaurant, restaurant, Decimal::new(199, 2)),
        }
    }

    fn ids(cart: &Cart) -> Vec<&str> {
        cart.items().iter().map(|line| line.id.as_str()).collect()
    }

    #[test]
    fn add_appends_new_items_in_order() {
        let mut cart = Cart::new();

        cart.add(descriptor("a", "r1"), 1);
        cart.add(descriptor("b", "r1"), 2);
        cart.add(descriptor("c", "r1"), 3);

        assert_eq!(ids(&cart), ["a", "b", "c"]);
    }

    #[test]
    fn add_merges_quantities_for_same_id() -> TestResult {
        let mut cart = Cart::new();

        cart.add(descriptor("a", "r1"), 1);
        cart.add(descriptor("a", "r1"), 2);
        cart.add(descriptor("a", "r1"), 4);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("a").ok_or("missing item")?.quantity, 7);

        Ok(())
    }

    #[test]
    fn add_merge_keeps_position_and_original_fields() -> TestResult {
        let mut cart = Cart::new();

        cart.add(descriptor("a", "r1"), 1);
        cart.add(descriptor("b", "r1"), 1);

        let mut renamed = descriptor("a", "r2");
        renamed.name = "Renamed".to_string();
        renamed.unit_price = Decimal::new(999, 2);

        cart.add(renamed, 1);

        let line = cart.get("a").ok_or("missing item")?;

        assert_eq!(ids(&cart), ["a", "b"]);
        assert_eq!(line.name, "A");
        assert_eq!(line.unit_price, Decimal::new(500, 2));
        assert_eq!(line.restaurant.id, "r1");
        assert_eq!(line.quantity, 2);

        Ok(())
    }

    #[test]
    fn set_quantity_replaces_in_place() -> TestResult {
        let mut cart = Cart::new();

        cart.add(descriptor("a", "r1"), 1);
        cart.add(descriptor("b", "r1"), 1);
        cart.set_quantity("a", 5);

        assert_eq!(ids(&cart), ["a", "b"]);
        assert_eq!(cart.get("a").ok_or("missing item")?.quantity, 5);

        Ok(())
    }

    #[test]
    fn set_quantity_zero_or_negative_removes() {
        let mut cart = Cart::new();

        cart.add(descriptor("a", "r1"), 1);
        cart.add(descriptor("b", "r1"), 1);
        cart.set_quantity("a", 0);
        cart.set_quantity("b", -5);

        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_for_unknown_id_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add(descriptor("a", "r1"), 1);

        let before = cart.clone();

        cart.set_quantity("missing", 3);
        cart.set_quantity("missing", 0);

        assert_eq!(cart, before);
    }

    #[test]
    fn remove_unknown_id_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add(descriptor("a", "r1"), 1);

        let before = cart.clone();
        cart.remove("missing");

        assert_eq!(cart, before);
    }

    #[test]
    fn has_multiple_restaurants_requires_two_items() {
        let mut cart = Cart::new();
        assert!(!cart.has_multiple_restaurants());

        cart.add(descriptor("a", "r1"), 1);
        assert!(!cart.has_multiple_restaurants());

        cart.add(descriptor("b", "r1"), 1);
        assert!(!cart.has_multiple_restaurants());

        cart.add(descriptor("c", "r2"), 1);
        assert!(cart.has_multiple_restaurants());
    }

    #[test]
    fn restaurant_comes_from_first_item() {
        let mut cart = Cart::new();
        assert_eq!(cart.restaurant(), None);

        cart.add(descriptor("a", "r2"), 1);
        cart.add(descriptor("b", "r1"), 1);

        assert_eq!(cart.restaurant().map(|r| r.id.as_str()), Some("r2"));
    }

    #[test]
    fn serializes_as_json_array() -> TestResult {
        let mut cart = Cart::new();
        cart.add(descriptor("a", "r1"), 2);

        let json = serde_json::to_string(&cart)?;
        let restored: Cart = serde_json::from_str(&json)?;

        assert!(json.starts_with('['));
        assert_eq!(restored, cart);

        Ok(())
    }
}
