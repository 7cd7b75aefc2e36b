//! Configuration loading for the pvimpact server.
//! Reads pvimpact.toml from the current directory or path in PVIMPACT_CONFIG env var.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use pvimpact_common::ConversionFactors;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub factors: ConversionFactors,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 5000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self.host.parse()
            .with_context(|| format!("server.host is not an IP address: {}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}


impl Config {
    /// Load configuration from pvimpact.toml.
    /// Checks PVIMPACT_CONFIG env var first, then current directory.
    /// Falls back to defaults when the file does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("PVIMPACT_CONFIG")
            .unwrap_or_else(|_| "pvimpact.toml".to_string());
        Self::load_from(&path)
    }

    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!("Config file not found: {}, using built-in defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("loading {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.factors.validate()?;
        Ok(config)
    }
}
