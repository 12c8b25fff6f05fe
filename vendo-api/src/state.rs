use std::sync::Arc;

use vendo_core::repository::OrderRepository;
use vendo_order::PlacementOrchestrator;

#[derive(Clone)]
pub struct AppState {
    pub order_repo: Arc<dyn OrderRepository>,
    pub orchestrator: Arc<PlacementOrchestrator>,
}
