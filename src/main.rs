use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use webmusic_api::controllers::CatalogController;
use webmusic_api::providers::YtMusicClient;
use webmusic_api::routers::api_routes;
use webmusic_api::secrets::SECRET_MANAGER;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_target(false)
        .init();

    let provider = YtMusicClient::new(SECRET_MANAGER.get("YTMUSIC_API_URL"))
        .context("failed to build catalog provider client")?;
    info!("Catalog provider at {}", provider.base_url());
    let gateway = CatalogController::new(Arc::new(provider));

    // CORS configuration: any client may call this API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app: Router = Router::new()
        .nest("/api", api_routes())
        .with_state(gateway);

    // Static front-end, mounted only when the directory exists
    let frontend_dir = SECRET_MANAGER.get("FRONTEND_DIR");
    if !frontend_dir.is_empty() && Path::new(&frontend_dir).is_dir() {
        app = app.fallback_service(
            ServeDir::new(&frontend_dir).append_index_html_on_directories(true),
        );
        info!("Serving front-end from {}", frontend_dir);
    }

    let app = app.layer(cors).layer(TraceLayer::new_for_http());

    let port = SECRET_MANAGER.get("PORT");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .with_context(|| format!("failed to bind 0.0.0.0:{port}"))?;
    info!("🎵 Web Music API listening on 0.0.0.0:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}
