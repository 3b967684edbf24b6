//! Catalog service errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogServiceError {
    #[error("restaurant not found: {0}")]
    RestaurantNotFound(String),

    #[error("menu item not found: {0}")]
    MenuItemNotFound(String),

    #[error("menu item is not available: {0}")]
    Unavailable(String),
}
