use clap::Parser;
use eyre::WrapErr;
use fireguard_server::{AppState, ServerConfig, serve};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutting down");
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init_tracing();

    let config = ServerConfig::parse();
    config.log();

    let state = AppState::from_config(&config)?;

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.listen_addr))?;

    serve(listener, state, shutdown_signal())
        .await
        .wrap_err("server error")
}
