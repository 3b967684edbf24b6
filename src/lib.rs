//! Dasher
//!
//! Dasher is the cart, pricing and order-request engine behind a food-delivery storefront:
//! a persisted single-restaurant shopping cart, deterministic order totals and the catalog
//! rules used to fill it.

pub mod cart;
pub mod catalog;
pub mod items;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod storage;
pub mod store;
