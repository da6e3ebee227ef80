use std::net::SocketAddr;

use hiriscope_backend::{
    config::{get_config, init_config},
    database::pool::{create_pool, run_migrations},
    routes::build_router,
    AppState,
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    run_migrations(&pool).await?;

    let app = build_router(AppState::new(pool));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
