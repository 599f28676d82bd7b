//! Environment-driven server configuration.

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub datajud_api_key: String,
    pub jusbrasil_api_key: String,
    pub bind_addr: String,
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// Both provider keys are required; there is no unauthenticated mode on
    /// either API.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            datajud_api_key: std::env::var("DATAJUD_API_KEY")
                .context("DATAJUD_API_KEY não configurada")?,
            jusbrasil_api_key: std::env::var("JUSBRASIL_API_KEY")
                .context("JUSBRASIL_API_KEY não configurada")?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
        })
    }
}
