//! Fixed seed data and the routine that inserts it

use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::store::{NewPokemon, Pokemon, PokemonStore};

/// The rows inserted by every seed run, in insertion order
pub const POKEMON_SEED: [NewPokemon<'static>; 6] = [
    NewPokemon { name: "Cleffa", hp: 30, attack: 1 },
    NewPokemon { name: "Feraligatr", hp: 120, attack: 10 },
    NewPokemon { name: "Gengar Prime", hp: 130, attack: 25 },
    NewPokemon { name: "Sneasel", hp: 60, attack: 25 },
    NewPokemon { name: "Chansey", hp: 120, attack: 15 },
    NewPokemon { name: "Venusaur", hp: 10, attack: 60 },
];

/// Insert every seed row in order, stopping at the first failure
///
/// Rows are never deduplicated: seeding twice stores twelve rows.
pub async fn seed(store: &PokemonStore) -> Result<Vec<Pokemon>> {
    tracing::info!("Start seeding ...");

    let mut created = Vec::with_capacity(POKEMON_SEED.len());
    for data in &POKEMON_SEED {
        let pokemon = store.create(data).await?;
        tracing::info!("Created pokemon with id: {}", pokemon.id);
        created.push(pokemon);
    }

    tracing::info!("Seeding finished.");
    Ok(created)
}

/// Connect, migrate and seed, always closing the pool before returning
pub async fn run(config: &DatabaseConfig) -> Result<Vec<Pokemon>> {
    let store = PokemonStore::connect(config).await?;

    let outcome = match store.migrate().await {
        Ok(()) => seed(&store).await,
        Err(e) => Err(e),
    };

    store.disconnect().await;
    outcome
}
