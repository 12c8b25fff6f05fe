use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vendo_api::clients::{HttpProductCatalog, HttpUserDirectory};
use vendo_api::{app, AppState};
use vendo_order::PlacementOrchestrator;
use vendo_store::{DbClient, DocumentOrderRepository, PgCollection};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vendo_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = vendo_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Vendo API on port {}", config.server.port);

    let db = DbClient::new(&config.database.url)
        .await
        .expect("Failed to connect to database");
    db.migrate().await.expect("Failed to run migrations");

    let collection = Arc::new(PgCollection::new(db.pool.clone()));
    let order_repo = Arc::new(DocumentOrderRepository::new(collection));

    let directory = Arc::new(
        HttpUserDirectory::new(&config.collaborators.user_directory_url)
            .expect("Failed to build user directory client"),
    );
    let catalog = Arc::new(
        HttpProductCatalog::new(&config.collaborators.product_catalog_url)
            .expect("Failed to build product catalog client"),
    );
    let orchestrator = Arc::new(PlacementOrchestrator::new(directory, catalog));

    let app_state = AppState {
        order_repo,
        orchestrator,
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
