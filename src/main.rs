use std::env;
use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use vrs_engine::api::{AppState, create_router};
use vrs_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/gujarat_pattern";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_dir = env::var("VRS_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr = env::var("VRS_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let loader = ConfigLoader::load(&config_dir)?;
    info!(
        scheme = %loader.metadata().code,
        version = %loader.metadata().version,
        config_dir = %config_dir,
        "Loaded scheme"
    );

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "VRS engine listening");

    axum::serve(listener, create_router(AppState::new(loader))).await?;
    Ok(())
}
