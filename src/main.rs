mod config;
mod routes;

use config::{HostConfig, HostConfigError};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("config: {0}")]
    Config(#[from] HostConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env()?;
    tracing::info!(
        contract = %config.chat.contract_addr,
        room = %config.chat.room_addr,
        stream = %config.chat.stream_url,
        node = %config.chat.node_url,
        "chat room config"
    );

    // The bundle's base path is fixed at build time.
    let built_base = client::config::chat_config().base_path;
    if built_base != config.chat.base_path {
        tracing::warn!(runtime = %config.chat.base_path, built = %built_base, "base path differs from the client build");
    }

    let app = routes::app(&config).map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, base = %config.chat.base_path, "chatroom listening");
    axum::serve(listener, app).await?;
    Ok(())
}
