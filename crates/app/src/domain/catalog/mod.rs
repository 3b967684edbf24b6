//! Catalog

pub mod errors;
pub mod models;
pub mod service;

pub use errors::CatalogServiceError;
pub use service::*;
