//! Layered application configuration: defaults → YAML file → environment.
//!
//! The environment layer uses the `APP__` prefix with `__` as the section
//! separator, e.g. `APP__DATABASE__URL`, `APP__SERVER__BIND_ADDR`.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the HTTP listener binds to.
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection URL. Postgres for deployments; a `sqlite:` URL works for
    /// local runs. Credentials belong here or in the environment, never in
    /// code.
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite::memory:".to_owned(),
        }
    }
}

impl AppConfig {
    /// Load configuration, lowest priority first: built-in defaults, then
    /// the YAML file at `path` (if given), then environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`figment::Error`] if a layer is present but malformed.
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed("APP__").split("__")).extract()
    }
}
