//! Orders service.

use async_trait::async_trait;
use dasher::orders::{OrderRequest, OrderStatus};
use jiff::Zoned;
use mockall::automock;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::{
    context::SharedStorage,
    domain::orders::{
        errors::OrdersServiceError,
        models::{Order, OrderUuid},
    },
};

/// Storage key holding every order as one JSON array.
pub const ORDERS_STORAGE_KEY: &str = "doordash-orders";

/// Orders kept in a key-value storage slot.
#[derive(Debug)]
pub struct StoredOrdersService {
    storage: SharedStorage,
    write_lock: Mutex<()>,
}

impl StoredOrdersService {
    #[must_use]
    pub fn new(storage: SharedStorage) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    fn read_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        match self.storage.get(ORDERS_STORAGE_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn write_orders(&self, orders: &[Order]) -> Result<(), OrdersServiceError> {
        let raw = serde_json::to_string(orders)?;

        self.storage.set(ORDERS_STORAGE_KEY, &raw)?;

        Ok(())
    }
}

#[async_trait]
impl OrdersService for StoredOrdersService {
    async fn create_order(&self, request: OrderRequest) -> Result<Order, OrdersServiceError> {
        let _guard = self.write_lock.lock().await;

        let mut orders = self.read_orders()?;

        let order = Order {
            uuid: OrderUuid::now_v7(),
            request,
            status: OrderStatus::Placed,
            order_date: Zoned::now().date(),
        };

        orders.push(order.clone());
        self.write_orders(&orders)?;

        info!(
            order = %order.uuid,
            order_number = %order.request.order_number,
            "order stored"
        );

        Ok(order)
    }

    async fn get_order(&self, uuid: OrderUuid) -> Result<Order, OrdersServiceError> {
        self.read_orders()?
            .into_iter()
            .find(|order| order.uuid == uuid)
            .ok_or(OrdersServiceError::NotFound)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        let mut orders = self.read_orders()?;

        orders.sort_by(|a, b| b.uuid.cmp(&a.uuid));

        Ok(orders)
    }

    async fn update_order_status(
        &self,
        uuid: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError> {
        let _guard = self.write_lock.lock().await;

        let mut orders = self.read_orders()?;

        let order = orders
            .iter_mut()
            .find(|order| order.uuid == uuid)
            .ok_or(OrdersServiceError::NotFound)?;

        order.status = status;

        let updated = order.clone();

        self.write_orders(&orders)?;

        debug!(order = %uuid, status = status.key(), "order status updated");

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Store a new order in the `placed` status.
    async fn create_order(&self, request: OrderRequest) -> Result<Order, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(&self, uuid: OrderUuid) -> Result<Order, OrdersServiceError>;

    /// All orders, newest first.
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;

    /// Move an order to another status.
    async fn update_order_status(
        &self,
        uuid: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError>;
}
