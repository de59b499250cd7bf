/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

/// Environment variable prefix for overrides, e.g. `ROSTER_SERVER_PORT`
pub const ENV_PREFIX: &str = "ROSTER";

const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub app: AppSettings,

    #[serde(default)]
    pub git: GitSettings,

    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Application identity; unset values fall back during version resolution
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppSettings {
    #[serde(default)]
    pub version: Option<String>,

    /// Deployment environment name (development, staging, production...)
    #[serde(default)]
    pub profile: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GitSettings {
    #[serde(default)]
    pub commit: Option<String>,

    #[serde(default)]
    pub branch: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BuildSettings {
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl ServerConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file and environment
    ///
    /// Files are always read as TOML, whatever their extension. An explicit
    /// path must exist. Without one, `config.toml` in the
    /// working directory is used when present.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ServerError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(
                    config::File::from(path.to_path_buf()).format(config::FileFormat::Toml),
                );
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(
                        config::File::from(config_path).format(config::FileFormat::Toml),
                    );
                }
            }
        }

        // Override with environment variables (prefixed with ROSTER_).
        // Values stay strings; numeric fields are converted on deserialize.
        settings = settings.add_source(config::Environment::with_prefix(ENV_PREFIX).separator("_"));

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config(
                "Server port must be non-zero (set ROSTER_SERVER_PORT)".to_string(),
            ));
        }

        self.server.host.parse::<IpAddr>().map_err(|_| {
            ServerError::Config(format!(
                "Server host is not an IP address: {}",
                self.server.host
            ))
        })?;

        Ok(())
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let host = self
            .server
            .host
            .parse::<IpAddr>()
            .map_err(|e| ServerError::Config(format!("Invalid host {}: {}", self.server.host, e)))?;
        Ok(SocketAddr::from((host, self.server.port)))
    }
}

// Default values
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
