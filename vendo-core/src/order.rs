use serde::{Deserialize, Serialize};

/// A requested line item: which product, how many.
///
/// Input-only; never persisted standalone. Quantity is carried verbatim
/// through validation and persistence (see `OrderLine`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLineRequest {
    pub product_id: String,
    pub quantity: i32,
}

/// A line item as it appears inside a persisted order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: String,
    pub quantity: i32,
}

/// A validated, priced order that has not yet been persisted.
///
/// Produced by the placement orchestrator once the user and every
/// referenced product have been confirmed to exist. `total_price` is a
/// snapshot of catalog prices at validation time and is never
/// recomputed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricedOrder {
    pub user_id: String,
    pub lines: Vec<OrderLine>,
    pub total_price: f64,
}

/// The single source of truth for a customer's purchase.
///
/// `id` is assigned exactly once, by the store at creation. Orders are
/// immutable after creation; only create/fetch/list exist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub lines: Vec<OrderLine>,
    pub total_price: f64,
}
