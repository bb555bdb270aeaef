//! Schema assembly and SDL export

use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use std::fs;
use std::path::Path;

use crate::error::{PokedexError, Result};
use crate::schema::query::QueryRoot;
use crate::store::PokemonStore;

pub type PokedexSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the served schema with the store attached as schema data
pub fn build_schema(store: PokemonStore) -> PokedexSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(store)
        .finish()
}

/// SDL for the declared types; no store is needed to render it
pub fn sdl() -> String {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .finish()
        .sdl()
}

/// Write SDL text to `path`, creating parent directories as needed
pub fn export_sdl(sdl: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, sdl).map_err(|e| {
        PokedexError::SchemaGeneration(format!(
            "Failed to write schema to '{}': {}",
            path.display(),
            e
        ))
    })?;

    tracing::info!("Wrote GraphQL schema to {}", path.display());
    Ok(())
}
