mod types;

pub use types::{Config, DatabaseConfig, SchemaConfig, ServerConfig};

use crate::error::{PokedexError, Result};
use std::fs;

/// Prefix for environment overrides, e.g. `POKEDEX__DATABASE__URL`
pub const ENV_PREFIX: &str = "POKEDEX";

/// Load configuration from a TOML file, applying `POKEDEX__*` environment overrides
pub fn load_config(path: &str) -> Result<Config> {
    load_config_with_env(path, None)
}

/// Load configuration with an explicit environment map instead of the process environment
pub fn load_config_with_env(
    path: &str,
    env: Option<::config::Map<String, String>>,
) -> Result<Config> {
    let settings = ::config::Config::builder()
        .add_source(::config::File::new(path, ::config::FileFormat::Toml))
        .add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(env),
        )
        .build()
        .map_err(|e| PokedexError::Config(format!("Failed to read config file '{}': {}", path, e)))?;

    let config: Config = settings.try_deserialize()?;

    config.validate().map_err(PokedexError::Config)?;

    Ok(config)
}

/// Save configuration to a TOML file
pub fn save_config(config: &Config, path: &str) -> Result<()> {
    config.validate().map_err(PokedexError::Config)?;

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string)
        .map_err(|e| PokedexError::Config(format!("Failed to write config file '{}': {}", path, e)))?;

    Ok(())
}
