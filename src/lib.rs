pub mod config;
pub mod error;
pub mod schema;
pub mod seed;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use config::{Config, DatabaseConfig, SchemaConfig, ServerConfig};
pub use error::{PokedexError, Result};
pub use schema::{build_schema, PokedexSchema};
pub use store::{FindManyArgs, Pokemon, PokemonStore, SortOrder};
