//! Checkout service.

use std::{fmt, sync::Arc};

use dasher::{
    orders::{CustomerDetails, OrderRequest, order_number},
    store::CartStore,
};
use jiff::Timestamp;
use tracing::{error, info, warn};

use crate::{
    context::SharedStorage,
    domain::{
        checkout::errors::CheckoutError,
        orders::{OrdersService, models::Order},
    },
};

/// Turns the persisted cart into a placed order.
#[derive(Clone)]
pub struct CheckoutService {
    cart: CartStore<SharedStorage>,
    orders: Arc<dyn OrdersService>,
}

impl fmt::Debug for CheckoutService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutService")
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}

impl CheckoutService {
    #[must_use]
    pub fn new(cart: CartStore<SharedStorage>, orders: Arc<dyn OrdersService>) -> Self {
        Self { cart, orders }
    }

    /// Place an order for everything in the cart.
    ///
    /// The cart is cleared only once the order has been created. On any failure
    /// the cart is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Request`] for an empty cart or incomplete
    /// customer details, and [`CheckoutError::OrderCreationFailed`] when the
    /// orders service rejects the order.
    pub async fn place_order(&self, customer: &CustomerDetails) -> Result<Order, CheckoutError> {
        let cart = self.cart.load();

        if cart.has_multiple_restaurants() {
            warn!("checking out a cart with items from more than one restaurant");
        }

        let number = order_number(Timestamp::now().as_millisecond());
        let request = OrderRequest::from_cart(&cart, customer, number)?;

        let order = self
            .orders
            .create_order(request)
            .await
            .map_err(|err| {
                error!(error = %err, "order creation failed");

                CheckoutError::OrderCreationFailed(err)
            })?;

        self.cart.clear();

        info!(
            order = %order.uuid,
            order_number = %order.request.order_number,
            total = %order.request.total_amount,
            "order placed"
        );

        Ok(order)
    }
}
