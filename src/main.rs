use phone_storefront::router::create_app_router;
use phone_storefront::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("phone_storefront=info,tower_http=info")),
        )
        .init();

    // Initialize application state
    let state = Arc::new(AppState::new());

    // Warm the catalog cache. A failure here is not fatal: read paths
    // retry on first touch and POST /api/catalog/refresh is the manual
    // retry affordance.
    if let Err(err) = state.refresh_catalog().await {
        error!(error = %err, "initial catalog load failed");
    }

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Configure the server address
    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    info!("Server running on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind server address");
    axum::serve(listener, app).await.expect("server error");
}
