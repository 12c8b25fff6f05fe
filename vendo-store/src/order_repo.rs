use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use uuid::Uuid;

use vendo_core::order::{Order, OrderLine, PricedOrder};
use vendo_core::repository::{OrderRepository, StoreError};

use crate::collection::DocumentCollection;

/// Order repository over a loosely-typed document collection.
///
/// Stored layout (field names are a storage contract):
/// `{_id, user_id, products: [{product_id, quantity}], total_price}`.
/// Reads decode every field with explicit type checks; a missing or
/// wrong-typed field yields `CorruptRecord` instead of a crash. An
/// absent or null `products` field decodes as an empty line list.
pub struct DocumentOrderRepository {
    collection: Arc<dyn DocumentCollection>,
}

impl DocumentOrderRepository {
    pub fn new(collection: Arc<dyn DocumentCollection>) -> Self {
        Self { collection }
    }
}

fn corrupt(field: &str, expected: &str) -> StoreError {
    StoreError::CorruptRecord(format!("field `{field}` is missing or not {expected}"))
}

fn require_str<'a>(doc: &'a Value, field: &str) -> Result<&'a str, StoreError> {
    doc.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| corrupt(field, "a string"))
}

fn decode_line(raw: &Value) -> Result<OrderLine, StoreError> {
    let product_id = require_str(raw, "product_id")?;
    let quantity = raw
        .get("quantity")
        .and_then(Value::as_i64)
        .and_then(|q| i32::try_from(q).ok())
        .ok_or_else(|| corrupt("quantity", "an integer"))?;

    Ok(OrderLine {
        product_id: product_id.to_string(),
        quantity,
    })
}

fn decode_order(doc: &Value) -> Result<Order, StoreError> {
    let id = require_str(doc, "_id")?;
    let user_id = require_str(doc, "user_id")?;

    let lines = match doc.get("products") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(raw)) => raw.iter().map(decode_line).collect::<Result<_, _>>()?,
        Some(_) => return Err(corrupt("products", "an array")),
    };

    let total_price = doc
        .get("total_price")
        .and_then(Value::as_f64)
        .ok_or_else(|| corrupt("total_price", "a number"))?;

    Ok(Order {
        id: id.to_string(),
        user_id: user_id.to_string(),
        lines,
        total_price,
    })
}

fn encode_order(order: &PricedOrder) -> Value {
    let products: Vec<Value> = order
        .lines
        .iter()
        .map(|line| {
            json!({
                "product_id": line.product_id,
                "quantity": line.quantity,
            })
        })
        .collect();

    json!({
        "user_id": order.user_id,
        "products": products,
        "total_price": order.total_price,
    })
}

#[async_trait]
impl OrderRepository for DocumentOrderRepository {
    async fn create(&self, order: &PricedOrder) -> Result<Order, StoreError> {
        let id = self.collection.insert(encode_order(order)).await?;

        Ok(Order {
            id: id.to_string(),
            user_id: order.user_id.clone(),
            lines: order.lines.clone(),
            total_price: order.total_price,
        })
    }

    async fn fetch(&self, id: &str) -> Result<Order, StoreError> {
        let parsed = Uuid::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))?;

        let doc = self
            .collection
            .find(parsed)
            .await?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        decode_order(&doc)
    }

    async fn list_all(&self) -> Result<Vec<Order>, StoreError> {
        // A failure mid-iteration aborts the whole listing; partial
        // results are never returned truncated.
        self.collection
            .list()
            .await?
            .iter()
            .map(decode_order)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::collection::MemoryCollection;

    fn repo() -> (DocumentOrderRepository, Arc<MemoryCollection>) {
        let collection = Arc::new(MemoryCollection::new());
        (DocumentOrderRepository::new(collection.clone()), collection)
    }

    fn priced(user_id: &str, lines: &[(&str, i32)], total_price: f64) -> PricedOrder {
        PricedOrder {
            user_id: user_id.to_string(),
            lines: lines
                .iter()
                .map(|(id, quantity)| OrderLine {
                    product_id: id.to_string(),
                    quantity: *quantity,
                })
                .collect(),
            total_price,
        }
    }

    #[tokio::test]
    async fn create_then_fetch_round_trips() {
        let (repo, _) = repo();

        let created = repo
            .create(&priced("u1", &[("p1", 2), ("p2", 7)], 19.98))
            .await
            .unwrap();

        assert!(!created.id.is_empty());
        let fetched = repo.fetch(&created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let (repo, _) = repo();

        let a = repo.create(&priced("u1", &[("p1", 1)], 1.0)).await.unwrap();
        let b = repo.create(&priced("u2", &[("p2", 1)], 2.0)).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, a.id);
        assert_eq!(all[1].id, b.id);
    }

    #[tokio::test]
    async fn missing_products_field_decodes_as_empty_lines() {
        let (repo, collection) = repo();

        let id = collection
            .insert(serde_json::json!({"user_id": "u1", "total_price": 5.0}))
            .await
            .unwrap();

        let order = repo.fetch(&id.to_string()).await.unwrap();
        assert!(order.lines.is_empty());
        assert_eq!(order.total_price, 5.0);
    }

    #[tokio::test]
    async fn non_numeric_total_price_is_corrupt_not_a_crash() {
        let (repo, collection) = repo();

        let id = collection
            .insert(serde_json::json!({
                "user_id": "u1",
                "products": [],
                "total_price": "lots",
            }))
            .await
            .unwrap();

        let err = repo.fetch(&id.to_string()).await.unwrap_err();
        assert!(matches!(err, StoreError::CorruptRecord(_)));
    }

    #[tokio::test]
    async fn wrong_typed_user_id_is_corrupt() {
        let (repo, collection) = repo();

        let id = collection
            .insert(serde_json::json!({
                "user_id": 42,
                "products": [],
                "total_price": 1.0,
            }))
            .await
            .unwrap();

        let err = repo.fetch(&id.to_string()).await.unwrap_err();
        assert!(matches!(err, StoreError::CorruptRecord(_)));
    }

    #[tokio::test]
    async fn malformed_line_is_corrupt() {
        let (repo, collection) = repo();

        let id = collection
            .insert(serde_json::json!({
                "user_id": "u1",
                "products": [{"product_id": "p1"}],
                "total_price": 1.0,
            }))
            .await
            .unwrap();

        let err = repo.fetch(&id.to_string()).await.unwrap_err();
        assert!(matches!(err, StoreError::CorruptRecord(_)));
    }

    #[tokio::test]
    async fn integral_total_price_decodes_as_float() {
        let (repo, collection) = repo();

        let id = collection
            .insert(serde_json::json!({
                "user_id": "u1",
                "products": [],
                "total_price": 20,
            }))
            .await
            .unwrap();

        let order = repo.fetch(&id.to_string()).await.unwrap();
        assert_eq!(order.total_price, 20.0);
    }

    #[tokio::test]
    async fn malformed_id_is_invalid_not_missing() {
        let (repo, _) = repo();

        let err = repo.fetch("not-a-uuid").await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidId(_)));
    }

    #[tokio::test]
    async fn absent_id_is_not_found() {
        let (repo, _) = repo();

        let err = repo.fetch(&Uuid::new_v4().to_string()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn corrupt_document_poisons_list_all() {
        let (repo, collection) = repo();

        repo.create(&priced("u1", &[("p1", 1)], 1.0)).await.unwrap();
        collection
            .insert(serde_json::json!({"user_id": "u2", "total_price": "bad"}))
            .await
            .unwrap();

        let err = repo.list_all().await.unwrap_err();
        assert!(matches!(err, StoreError::CorruptRecord(_)));
    }
}
