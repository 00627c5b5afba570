//! Entry point for the `roster-gateway` HTTP server.

use std::sync::Arc;

use roster_core::{seed_activities, ActivityRegistry};
use roster_gateway::routes::create_router;
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let addr = std::env::var("ROSTER_LISTEN_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8000".to_owned());
    let static_dir = std::env::var("ROSTER_STATIC_DIR")
        .unwrap_or_else(|_| "static".to_owned());

    let registry = Arc::new(ActivityRegistry::new(seed_activities()));
    let app = create_router(registry, &static_dir);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, static_dir = %static_dir, "roster-gateway listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
