use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A user as reported by the user directory service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
}

/// A product as reported by the catalog service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// A collaborator service failed for a reason other than "not found":
/// unreachable, timed out, or returned an unexpected response.
#[derive(Debug, thiserror::Error)]
#[error("{service} unavailable: {message}")]
pub struct DependencyError {
    pub service: &'static str,
    pub message: String,
}

impl DependencyError {
    pub fn new(service: &'static str, message: impl Into<String>) -> Self {
        Self {
            service,
            message: message.into(),
        }
    }
}

/// Read side of the user directory service. Existence checks only;
/// the directory's write-side CRUD is not consumed here.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// `Ok(None)` means the user does not exist.
    async fn get_user(&self, id: &str) -> Result<Option<UserRecord>, DependencyError>;
}

/// Read side of the product catalog service.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// `Ok(None)` means the product does not exist.
    async fn get_product(&self, id: &str) -> Result<Option<ProductRecord>, DependencyError>;
}
