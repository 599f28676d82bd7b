//! Consulta HTTP server: public-lawsuit lookups over DataJud and Jusbrasil.

mod config;
mod routes;

use std::sync::Arc;

use anyhow::Context;
use consulta_client::{DatajudClient, JusbrasilClient};
use tracing::info;

use crate::config::ServerConfig;
use crate::routes::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    info!("consulta-server v{}", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::from_env()?;

    let state = AppState {
        datajud: Arc::new(DatajudClient::new(config.datajud_api_key.clone())),
        jusbrasil: Arc::new(JusbrasilClient::new(config.jusbrasil_api_key.clone())),
    };

    let app = routes::api_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, app).await.context("server error")
}
