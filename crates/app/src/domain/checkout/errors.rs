//! Checkout errors.

use dasher::orders::OrderRequestError;
use thiserror::Error;

use crate::domain::orders::OrdersServiceError;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("invalid order: {0}")]
    Request(#[from] OrderRequestError),

    #[error("order creation failed")]
    OrderCreationFailed(#[source] OrdersServiceError),
}
