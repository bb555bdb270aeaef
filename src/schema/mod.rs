//! GraphQL schema for the Pokemon table
//!
//! This module declares the `getAllPokemons` query, builds the served schema,
//! and exports its SDL.

mod builder;
mod query;
mod types;

pub use builder::{build_schema, export_sdl, sdl, PokedexSchema};
pub use query::QueryRoot;
pub use types::PokemonOrderByName;
