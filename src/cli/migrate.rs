use pokedex::error::Result;
use pokedex::store::PokemonStore;

/// Run the migrate command against the configured database
pub async fn run(config_path: String) -> Result<()> {
    tracing::info!("📖 Loading configuration from {}", config_path);
    let config = pokedex::config::load_config(&config_path)?;

    let store = PokemonStore::connect(&config.database).await?;
    let outcome = store.migrate().await;
    store.disconnect().await;
    outcome?;

    tracing::info!("✅ Database is up to date");
    Ok(())
}
