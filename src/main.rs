use std::sync::Arc;

use cinema_api::{AppState, config::Config, db, routes, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,cinema_api=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let db = db::connect_and_migrate(&config).await?;
    let state = Arc::new(AppState::new(config.clone(), db));

    if config.seed_demo_data {
        seed::seed_demo_data(&state).await?;
    }

    let app = routes::build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
