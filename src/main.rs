use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use traffic_ai::config::Config;
use traffic_ai::routes;
use traffic_ai::services::openai::OpenAiClient;
use traffic_ai::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();
    let client = OpenAiClient::from_config(&config).context("building HTTP client")?;
    let port = config.port;
    let state = Arc::new(AppState::new(config, Arc::new(client)));

    let app = routes::create_router().with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!("🚦 Traffic AI server running on http://localhost:{port}");
    axum::serve(listener, app).await?;
    Ok(())
}
