use async_trait::async_trait;

#[async_trait]
pub trait LoadCatalogUseCase: Send + Sync {
    /// Fetches the catalog once and stores it. A failed fetch leaves the
    /// catalog empty; it is logged, never returned. Returns the number of
    /// products stored.
    async fn execute(&self) -> usize;
}
