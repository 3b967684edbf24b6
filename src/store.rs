//! Cart Store
//!
//! The persisted, single-restaurant shopping cart. Every mutation reads the current
//! cart from storage, applies the change, writes it back and returns the new state.
//! Storage failures are logged and swallowed: reads degrade to an empty cart, and a
//! failed write still returns the in-memory result.

use tracing::{debug, warn};

use crate::{
    cart::Cart,
    items::{LineItemDescriptor, RestaurantRef},
    pricing::{Totals, checked_totals, compute_totals},
    storage::Storage,
};

/// Storage key the cart lives under.
pub const CART_STORAGE_KEY: &str = "doordash-cart";

/// Persisted cart backed by a [`Storage`] slot.
#[derive(Debug, Clone)]
pub struct CartStore<S> {
    storage: S,
}

impl<S: Storage> CartStore<S> {
    /// Create a store over the given storage backend.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the persisted cart, or an empty cart when nothing usable is stored.
    ///
    /// A stored cart whose totals cannot be represented counts as unusable.
    pub fn load(&self) -> Cart {
        let stored = match self.storage.get(CART_STORAGE_KEY) {
            Ok(Some(stored)) => stored,
            Ok(None) => return Cart::new(),
            Err(error) => {
                warn!(%error, "failed to read cart from storage");

                return Cart::new();
            }
        };

        let cart: Cart = match serde_json::from_str(&stored) {
            Ok(cart) => cart,
            Err(error) => {
                warn!(%error, "discarding unreadable stored cart");

                return Cart::new();
            }
        };

        if checked_totals(&cart).is_none() {
            warn!(lines = cart.len(), "discarding stored cart whose totals overflow");

            return Cart::new();
        }

        cart
    }

    /// Add `quantity` units of an item, merging with an existing line of the same id.
    pub fn add(&self, item: LineItemDescriptor, quantity: u32) -> Cart {
        debug!(item_id = %item.id, quantity, "adding item to cart");

        self.update(|cart| cart.add(item, quantity))
    }

    /// Set an item's quantity. Zero or negative quantities remove the item.
    pub fn set_quantity(&self, item_id: &str, quantity: i64) -> Cart {
        debug!(item_id, quantity, "setting cart item quantity");

        self.update(|cart| cart.set_quantity(item_id, quantity))
    }

    /// Remove an item. Unknown ids leave the cart unchanged.
    pub fn remove(&self, item_id: &str) -> Cart {
        debug!(item_id, "removing item from cart");

        self.update(|cart| cart.remove(item_id))
    }

    /// Empty the cart.
    pub fn clear(&self) {
        debug!("clearing cart");

        self.save(&Cart::new());
    }

    /// Totals of the currently persisted cart.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.load())
    }

    /// Whether the persisted cart mixes restaurants.
    pub fn has_multiple_restaurants(&self) -> bool {
        self.load().has_multiple_restaurants()
    }

    /// Restaurant of the first persisted item.
    pub fn restaurant(&self) -> Option<RestaurantRef> {
        self.load().restaurant().cloned()
    }

    fn update(&self, mutate: impl FnOnce(&mut Cart)) -> Cart {
        let mut cart = self.load();

        mutate(&mut cart);
        self.save(&cart);

        cart
    }

    fn save(&self, cart: &Cart) {
        let serialized = match serde_json::to_string(cart) {
            Ok(serialized) => serialized,
            Err(error) => {
                warn!(%error, "failed to serialize cart");

                return;
            }
        };

        if let Err(error) = self.storage.set(CART_STORAGE_KEY, &serialized) {
            warn!(%error, "failed to write cart to storage");
        }
    }
}
