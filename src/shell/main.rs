use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use time_tracker::shared::core::clock::SystemClock;
use time_tracker::shell::config::AppConfig;
use time_tracker::shell::http::router;
use time_tracker::shell::state::AppState;
use time_tracker::shell::workers::spawn_sync_worker;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let state = AppState::new(
        &config.remote_api,
        config.jwt_secret.as_bytes(),
        Arc::new(SystemClock),
    )?;

    match config.sync_interval {
        Some(period) => {
            spawn_sync_worker(state.sync_handler.clone(), period);
            tracing::info!(period_secs = period.as_secs(), "background sync enabled");
        }
        None => tracing::info!("background sync disabled"),
    }

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, remote = %config.remote_api.base_url, "time tracker listening");
    axum::serve(listener, app).await?;
    Ok(())
}
