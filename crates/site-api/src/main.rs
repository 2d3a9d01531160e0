mod config;
mod docs_index;
mod error;
mod og;
mod server;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sage_common::edge_config::EdgeConfigClient;
use sage_registry::Registry;

use config::Config;
use server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting site-api");

    let config = Config::from_env()?;

    let registry = load_registry(&config)?;
    info!(components = registry.len(), "registry loaded");

    let edge = match config.edge_config.clone() {
        Some(edge_config) => {
            info!(base_url = %edge_config.base_url, "edge-config upstream configured");
            Some(Arc::new(EdgeConfigClient::new(edge_config)?))
        }
        None => {
            info!("no edge-config upstream, og-config serves defaults");
            None
        }
    };

    let state = AppState {
        registry: Arc::new(registry),
        edge,
    };

    let listener = TcpListener::bind(&config.listen_addr).await?;
    info!(listen_addr = %config.listen_addr, "site-api ready");
    axum::serve(listener, server::router(state)).await?;

    Ok(())
}

fn load_registry(config: &Config) -> Result<Registry, error::AppError> {
    match &config.registry_path {
        Some(path) => {
            info!(path = %path, "loading registry from file override");
            Ok(Registry::from_file(path)?)
        }
        None => Ok(Registry::from_embedded()?),
    }
}
