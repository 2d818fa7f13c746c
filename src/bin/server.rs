//! investment-game HTTP server binary.
//!
//! # Environment Variables
//!
//! - `PORT`: HTTP port (default: 8080)
//! - `GAME_CONFIG`: YAML engine config (optional)
//! - `GAME_MAX_ROUNDS`, `GAME_SEED`, `GAME_ADVISORY_TIMEOUT_MS`,
//!   `GAME_ADVISOR_ENABLED`: overrides on top of the config file
//! - `OPENAI_API_KEY`: advisor key (name configurable via `advisor.api_key_env`)
//! - `RUST_LOG`: Tracing filter (default: "info,investment_game=debug")
//!
//! # Usage
//!
//! ```bash
//! GAME_SEED=7 cargo run --bin server
//! ```

use anyhow::Context;
use investment_game::config::EngineConfig;
use investment_game::server::{app_router, AppState};
use investment_game::session::GameSession;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,investment_game=debug".into()),
        )
        .init();

    let config = EngineConfig::from_env().context("Failed to load engine config")?;
    tracing::info!(
        max_rounds = config.max_rounds,
        seed = ?config.seed,
        advisor = config.advisor.enabled,
        "engine configured"
    );
    let session = GameSession::from_config(config).context("Failed to build game session")?;

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{}", port);
    let app = app_router(AppState::new(session));

    tracing::info!("investment-game server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health              - liveness probe");
    tracing::info!("  POST /start_simulation    - reset and start");
    tracing::info!("  POST /continue_simulation - play one round");
    tracing::info!("  GET  /state               - session snapshot");
    tracing::info!("  GET|PUT /agents/:role/modifiers");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    axum::serve(listener, app).await.context("Server failed")?;
    Ok(())
}
