//! Test context for service-level tests.

use std::sync::Arc;

use dasher::{catalog::CatalogError, storage::MemoryStorage};

use crate::context::AppContext;

use super::helpers::catalog;

pub(crate) struct TestContext {
    pub storage: Arc<MemoryStorage>,
    pub app: AppContext,
}

impl TestContext {
    /// Services over in-memory storage and the shared test catalog.
    pub fn new() -> Result<Self, CatalogError> {
        let storage = Arc::new(MemoryStorage::new());

        Ok(Self {
            app: AppContext::new(storage.clone(), catalog()?),
            storage,
        })
    }
}
