use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use vendo_core::order::{Order, OrderLineRequest};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: String,
    // An absent or empty lines array is accepted; it validates
    // trivially and persists with a total of zero.
    #[serde(default)]
    pub lines: Vec<OrderLineBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineBody {
    pub product_id: String,
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub user_id: String,
    pub lines: Vec<OrderLineResponse>,
    pub total_price: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineResponse {
    pub product_id: String,
    pub quantity: i32,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            lines: order
                .lines
                .into_iter()
                .map(|line| OrderLineResponse {
                    product_id: line.product_id,
                    quantity: line.quantity,
                })
                .collect(),
            total_price: order.total_price,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /orders
/// Validate the referenced user and products, price the order, persist it.
pub async fn create_order(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), AppError> {
    let lines: Vec<OrderLineRequest> = req
        .lines
        .into_iter()
        .map(|line| OrderLineRequest {
            product_id: line.product_id,
            quantity: line.quantity,
        })
        .collect();

    let priced = state.orchestrator.place_order(&req.user_id, &lines).await?;

    // Persistence starts only after validation fully succeeded. A store
    // failure here simply fails the request; validation was read-only,
    // so there is nothing to roll back.
    let order = state.order_repo.create(&priced).await?;

    tracing::info!(order_id = %order.id, user_id = %order.user_id, "order created");

    Ok((StatusCode::CREATED, Json(order.into())))
}

/// GET /orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = state.order_repo.fetch(&order_id).await?;
    Ok(Json(order.into()))
}

/// GET /orders
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let orders = state.order_repo.list_all().await?;
    Ok(Json(orders.into_iter().map(Into::into).collect()))
}
