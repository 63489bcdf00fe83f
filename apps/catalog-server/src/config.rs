//! Layered application configuration.
//!
//! Precedence, lowest first: built-in defaults, the YAML file given with
//! `--config`, environment variables (`APP__SECTION__KEY`), CLI overrides.

use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use products::ProductsConfig;
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "APP__";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub products: ProductsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_owned(),
            port: 8087,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset, e.g. `info` or
    /// `products=debug,info`.
    pub level: String,
    /// Emit one JSON object per event instead of human-readable lines.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

impl AppConfig {
    /// The layered provider stack without CLI overrides.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load defaults, then the YAML file, then the environment.
    ///
    /// # Errors
    /// Returns an error if any layer holds a value of the wrong shape.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::figment(path)
            .extract()
            .context("failed to load configuration")
    }

    pub fn apply_cli_overrides(&mut self, port: Option<u16>) {
        if let Some(port) = port {
            self.server.port = port;
        }
    }

    /// # Errors
    /// Returns an error if `server.bind_addr` is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .server
            .bind_addr
            .parse()
            .with_context(|| format!("invalid server.bind_addr: {}", self.server.bind_addr))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).map_err(|e| anyhow::anyhow!("failed to render config: {e}"))
    }
}
