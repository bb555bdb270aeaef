use thiserror::Error;

#[derive(Error, Debug)]
pub enum PokedexError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Schema generation error: {0}")]
    SchemaGeneration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<::config::ConfigError> for PokedexError {
    fn from(err: ::config::ConfigError) -> Self {
        PokedexError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for PokedexError {
    fn from(err: toml::ser::Error) -> Self {
        PokedexError::Serialization(format!("TOML serialization error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, PokedexError>;
