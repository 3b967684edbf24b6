//! Order Models

use dasher::orders::{OrderRequest, OrderStatus};
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::uuids::TypedUuid;

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Order Model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub uuid: OrderUuid,
    pub request: OrderRequest,
    pub status: OrderStatus,
    pub order_date: Date,
}
