use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard};

use crate::domain::product::model::Product;

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub loading: bool,
}

/// In-memory catalog shared by every request.
///
/// Starts empty and loading; `finish_loading` is called once by the catalog
/// loader, whatever the outcome of the fetch.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    inner: Arc<RwLock<CatalogSnapshot>>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(CatalogSnapshot {
                products: Vec::new(),
                loading: true,
            })),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, CatalogSnapshot> {
        self.inner.read().await
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.read().await.loading
    }

    pub async fn finish_loading(&self, products: Vec<Product>) {
        let mut snapshot = self.inner.write().await;
        snapshot.products = products;
        snapshot.loading = false;
    }
}
