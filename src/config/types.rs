use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Top-level configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub schema: SchemaConfig,
}

impl Config {
    /// Validate every section, returning the first problem found
    pub fn validate(&self) -> Result<(), String> {
        self.database.validate()?;
        self.server.validate()?;
        Ok(())
    }
}

/// SQLite connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL (e.g., "sqlite://pokedex.db" or "sqlite::memory:")
    #[serde(default = "default_database_url")]
    pub url: String,

    /// Upper bound on pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_url() -> String {
    "sqlite://pokedex.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.url.starts_with("sqlite:") {
            return Err(format!(
                "Database URL '{}' must use the sqlite: scheme",
                self.url
            ));
        }

        if self.max_connections == 0 {
            return Err("max_connections must be at least 1".to_string());
        }

        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to bind the server to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Interface to bind the server to
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_port() -> u16 {
    4000
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind: default_bind(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.bind
            .parse::<IpAddr>()
            .map(|_| ())
            .map_err(|_| format!("Bind address '{}' is not a valid IP address", self.bind))
    }
}

/// Where the generated schema SDL is written
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// SDL output path; nothing is written when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdl_path: Option<String>,
}
