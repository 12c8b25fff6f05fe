use async_trait::async_trait;

use crate::order::{Order, PricedOrder};

/// Errors from the order store.
///
/// None of these are fatal to the process; every failure path returns
/// to the immediate caller. `CorruptRecord` flags a stored document
/// that failed strict decoding and should be surfaced to operators.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid order id: {0}")]
    InvalidId(String),

    #[error("order not found: {0}")]
    NotFound(String),

    #[error("corrupt order record: {0}")]
    CorruptRecord(String),

    #[error("order store failure: {0}")]
    Internal(String),
}

/// Repository trait for order data access.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a priced order, assigning a fresh unique id. Returns the
    /// full order including the assigned id. Line items are persisted
    /// exactly as given.
    async fn create(&self, order: &PricedOrder) -> Result<Order, StoreError>;

    /// Fetch one order. `InvalidId` if `id` is not a well-formed
    /// identifier for this store, `NotFound` if well-formed but absent.
    async fn fetch(&self, id: &str) -> Result<Order, StoreError>;

    /// Every stored order, in insertion order. A failure mid-iteration
    /// discards the partial result and returns the error.
    async fn list_all(&self) -> Result<Vec<Order>, StoreError>;
}
