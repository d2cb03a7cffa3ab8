mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env is normal outside local development.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(ServerError::Config(config::ConfigError::DotEnv(e.to_string())));
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let app = routes::app(&config)?;
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, content_api = config.content_api, "kazukigirand listening");
    axum::serve(listener, app).await?;
    Ok(())
}
