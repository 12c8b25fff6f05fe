use std::sync::Arc;

use vendo_core::collaborators::{DependencyError, ProductCatalog, UserDirectory};
use vendo_core::order::{OrderLine, OrderLineRequest, PricedOrder};

/// Placement validation failures.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("product not found: {0}")]
    ProductNotFound(String),

    #[error(transparent)]
    Dependency(#[from] DependencyError),
}

/// Turns a raw order request into a priced, verified order.
///
/// Validation is read-only and strictly sequential: the user directory
/// is consulted once, then the catalog once per line in input order,
/// stopping at the first line that fails. The caller therefore always
/// learns exactly which product (if any) was missing, and the number of
/// catalog calls is bounded by the index of the first invalid line.
pub struct PlacementOrchestrator {
    directory: Arc<dyn UserDirectory>,
    catalog: Arc<dyn ProductCatalog>,
}

impl PlacementOrchestrator {
    pub fn new(directory: Arc<dyn UserDirectory>, catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { directory, catalog }
    }

    /// Validate the referenced user and products and price the order.
    ///
    /// Prices are read from the catalog once, here; the resulting
    /// `total_price` is a snapshot and is never recomputed. Line
    /// quantities are copied verbatim from the request. Nothing is
    /// retried: every collaborator failure is terminal for the request.
    pub async fn place_order(
        &self,
        user_id: &str,
        lines: &[OrderLineRequest],
    ) -> Result<PricedOrder, OrderError> {
        self.directory
            .get_user(user_id)
            .await?
            .ok_or_else(|| OrderError::UserNotFound(user_id.to_string()))?;

        let mut priced_lines = Vec::with_capacity(lines.len());
        let mut total_price = 0.0_f64;

        for line in lines {
            let product = self
                .catalog
                .get_product(&line.product_id)
                .await?
                .ok_or_else(|| OrderError::ProductNotFound(line.product_id.clone()))?;

            // The catalog price feeds the running total only; the
            // persisted line carries just the id and quantity.
            total_price += product.price * f64::from(line.quantity);
            priced_lines.push(OrderLine {
                product_id: line.product_id.clone(),
                quantity: line.quantity,
            });
        }

        tracing::debug!(user_id, total_price, lines = priced_lines.len(), "order validated");

        Ok(PricedOrder {
            user_id: user_id.to_string(),
            lines: priced_lines,
            total_price,
        })
    }
}
