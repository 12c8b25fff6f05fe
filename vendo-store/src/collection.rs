use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgPool, Row};
use tokio::sync::RwLock;
use uuid::Uuid;
use vendo_core::repository::StoreError;

/// A loosely-typed document collection: field presence and types are
/// not enforced by any schema, so readers must decode defensively.
///
/// `insert` assigns a fresh id and writes it into the document under
/// `_id` before storing, so every document read back carries its id.
/// `list` returns documents in insertion order.
#[async_trait]
pub trait DocumentCollection: Send + Sync {
    async fn insert(&self, doc: Value) -> Result<Uuid, StoreError>;
    async fn find(&self, id: Uuid) -> Result<Option<Value>, StoreError>;
    async fn list(&self) -> Result<Vec<Value>, StoreError>;
}

fn stamp_id(doc: &mut Value, id: Uuid) -> Result<(), StoreError> {
    let map = doc
        .as_object_mut()
        .ok_or_else(|| StoreError::Internal("document is not a JSON object".to_string()))?;
    map.insert("_id".to_string(), Value::String(id.to_string()));
    Ok(())
}

/// Postgres-backed collection: one JSONB document per row, a `seq`
/// column preserving insertion order for listing.
pub struct PgCollection {
    pool: PgPool,
}

impl PgCollection {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_err(err: sqlx::Error) -> StoreError {
    StoreError::Internal(err.to_string())
}

#[async_trait]
impl DocumentCollection for PgCollection {
    async fn insert(&self, mut doc: Value) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        stamp_id(&mut doc, id)?;

        sqlx::query("INSERT INTO order_documents (id, doc) VALUES ($1, $2)")
            .bind(id)
            .bind(&doc)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(id)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Value>, StoreError> {
        let row = sqlx::query("SELECT doc FROM order_documents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        row.map(|r| r.try_get::<Value, _>("doc").map_err(db_err))
            .transpose()
    }

    async fn list(&self) -> Result<Vec<Value>, StoreError> {
        let rows = sqlx::query("SELECT doc FROM order_documents ORDER BY seq")
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        rows.into_iter()
            .map(|r| r.try_get::<Value, _>("doc").map_err(db_err))
            .collect()
    }
}

/// In-memory collection with the same contract. Used by tests in place
/// of Postgres; insertion order falls out of the backing Vec.
#[derive(Default)]
pub struct MemoryCollection {
    docs: RwLock<Vec<(Uuid, Value)>>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentCollection for MemoryCollection {
    async fn insert(&self, mut doc: Value) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        stamp_id(&mut doc, id)?;
        self.docs.write().await.push((id, doc));
        Ok(id)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Value>, StoreError> {
        Ok(self
            .docs
            .read()
            .await
            .iter()
            .find(|(doc_id, _)| *doc_id == id)
            .map(|(_, doc)| doc.clone()))
    }

    async fn list(&self) -> Result<Vec<Value>, StoreError> {
        Ok(self.docs.read().await.iter().map(|(_, doc)| doc.clone()).collect())
    }
}
