//! App Context

use std::{fmt, sync::Arc};

use dasher::{
    catalog::{Catalog, CatalogError},
    storage::{FileStorage, Storage},
    store::CartStore,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    config::StorageConfig,
    domain::{
        catalog::{CatalogService, FixtureCatalogService},
        checkout::CheckoutService,
        orders::{OrdersService, StoredOrdersService},
    },
};

/// Storage backend shared by the cart and the orders service.
pub type SharedStorage = Arc<dyn Storage>;

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to load catalog: {0}")]
    Catalog(#[source] CatalogError),
}

#[derive(Clone)]
pub struct AppContext {
    pub cart: CartStore<SharedStorage>,
    pub catalog: Arc<dyn CatalogService>,
    pub orders: Arc<dyn OrdersService>,
    pub checkout: CheckoutService,
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("cart", &self.cart)
            .field("checkout", &self.checkout)
            .finish_non_exhaustive()
    }
}

impl AppContext {
    /// Wire services over an existing storage backend and catalog.
    pub fn new(storage: SharedStorage, catalog: Catalog) -> Self {
        let cart = CartStore::new(storage.clone());
        let orders: Arc<dyn OrdersService> = Arc::new(StoredOrdersService::new(storage));

        Self {
            checkout: CheckoutService::new(cart.clone(), orders.clone()),
            cart,
            catalog: Arc::new(FixtureCatalogService::new(catalog)),
            orders,
        }
    }

    /// Build application context from storage settings.
    ///
    /// A missing catalog file yields an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog file exists but cannot be loaded.
    pub fn from_config(config: &StorageConfig) -> Result<Self, AppInitError> {
        let catalog = if config.catalog.exists() {
            Catalog::from_path(&config.catalog).map_err(AppInitError::Catalog)?
        } else {
            warn!(path = %config.catalog.display(), "catalog file not found, using an empty catalog");

            Catalog::default()
        };

        debug!(dir = %config.storage_dir.display(), "using file storage");

        Ok(Self::new(
            Arc::new(FileStorage::new(&config.storage_dir)),
            catalog,
        ))
    }
}
