use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing::info;

use agent_backend::{
    config::Config,
    routes::create_router,
    services::completion::OpenAiClient,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        )
        .init();

    let config = Config::from_env()?;
    let client = Arc::new(OpenAiClient::new(&config));
    let state = Arc::new(AppState::new(client));

    let app = create_router()
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, model = %config.model, "agent backend listening");
    axum::serve(listener, app).await?;

    Ok(())
}
