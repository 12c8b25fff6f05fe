use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use vendo_core::collaborators::{
    DependencyError, ProductCatalog, ProductRecord, UserDirectory, UserRecord,
};

fn build_client(service: &'static str) -> Result<reqwest::Client, DependencyError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| DependencyError::new(service, format!("failed to create HTTP client: {e}")))
}

/// User directory consumed over HTTP. A 404 means the user does not
/// exist; anything else non-success is a dependency failure.
pub struct HttpUserDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserDirectory {
    pub fn new(base_url: impl Into<String>) -> Result<Self, DependencyError> {
        Ok(Self {
            client: build_client("user-directory")?,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn get_user(&self, id: &str) -> Result<Option<UserRecord>, DependencyError> {
        let url = format!("{}/api/users/{}", self.base_url, id);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DependencyError::new("user-directory", e.to_string()))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(DependencyError::new(
                "user-directory",
                format!("unexpected status {}", resp.status()),
            ));
        }

        let user = resp
            .json::<UserRecord>()
            .await
            .map_err(|e| DependencyError::new("user-directory", e.to_string()))?;
        Ok(Some(user))
    }
}

/// Product catalog consumed over HTTP, same not-found convention.
pub struct HttpProductCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProductCatalog {
    pub fn new(base_url: impl Into<String>) -> Result<Self, DependencyError> {
        Ok(Self {
            client: build_client("product-catalog")?,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl ProductCatalog for HttpProductCatalog {
    async fn get_product(&self, id: &str) -> Result<Option<ProductRecord>, DependencyError> {
        let url = format!("{}/api/products/{}", self.base_url, id);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DependencyError::new("product-catalog", e.to_string()))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(DependencyError::new(
                "product-catalog",
                format!("unexpected status {}", resp.status()),
            ));
        }

        let product = resp
            .json::<ProductRecord>()
            .await
            .map_err(|e| DependencyError::new("product-catalog", e.to_string()))?;
        Ok(Some(product))
    }
}
