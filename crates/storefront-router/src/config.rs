// File: src/config.rs
// Purpose: Configuration parsing from storefront.toml

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::{storefront_routes, Router, TableVersion};

pub const DEFAULT_CONFIG_PATH: &str = "storefront.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Route table release to serve (default: the latest)
    #[serde(default)]
    pub version: TableVersion,

    /// Whether static segments match ignoring ASCII case (default: false)
    #[serde(default = "default_false")]
    pub case_insensitive: bool,

    /// Whether a trailing slash prevents a match (default: false)
    #[serde(default = "default_false")]
    pub strict: bool,

    /// Prefix the app is mounted under (e.g., "/shop")
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

/// Server configuration for the bundle server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built SPA (index.html + assets/)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
}

// Default values
fn default_false() -> bool {
    false
}

fn default_base_path() -> String {
    "/".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5173
}

fn default_dist_dir() -> String {
    "dist".to_string()
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            version: TableVersion::default(),
            case_insensitive: false,
            strict: false,
            base_path: default_base_path(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl RoutingConfig {
    /// Builds the storefront router these settings describe
    pub fn build_router(&self) -> crate::Result<Router> {
        Ok(Router::new()
            .with_case_insensitive(self.case_insensitive)
            .with_strict(self.strict)
            .with_base_path(&self.base_path)
            .with_routes(storefront_routes(self.version)?)?)
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// The file must exist; an empty file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./storefront.toml)
    ///
    /// Unlike [`load`](Self::load), a missing file yields the defaults.
    pub fn load_default() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Applies `STOREFRONT_ROUTES_VERSION` and `STOREFRONT_PORT` from the environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary lookup (the environment, in production)
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(version) = lookup("STOREFRONT_ROUTES_VERSION") {
            self.routing.version = version
                .parse()
                .context("Invalid STOREFRONT_ROUTES_VERSION")?;
        }

        if let Some(port) = lookup("STOREFRONT_PORT") {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid STOREFRONT_PORT: {:?}", port))?;
        }

        Ok(self)
    }
}
