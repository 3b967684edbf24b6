//! Dasher prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::Cart,
    catalog::{Catalog, CatalogError, Category, Cuisine, Image, MenuItem, Restaurant},
    items::{CartLineItem, LineItemDescriptor, RestaurantRef},
    orders::{
        CustomerDetails, OrderItem, OrderRequest, OrderRequestError, OrderStatus,
        UnknownOrderStatus, order_number,
    },
    pricing::{Totals, checked_totals, compute_totals, round_cents, tax_rate},
    receipt::{CartReceipt, ReceiptError},
    storage::{FileStorage, MemoryStorage, Storage, StorageError},
    store::{CART_STORAGE_KEY, CartStore},
};
