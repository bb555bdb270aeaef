use pokedex::config::Config;
use pokedex::error::Result;
use pokedex::schema::{build_schema, export_sdl};
use pokedex::store::PokemonStore;

/// Run the serve command to start the GraphQL server
pub async fn run(config_path: String, port: Option<u16>) -> Result<()> {
    tracing::info!("📖 Loading configuration from {}", config_path);

    let mut config = pokedex::config::load_config(&config_path)?;
    if let Some(port) = port {
        config.server.port = port;
    }

    let store = PokemonStore::connect(&config.database).await?;
    let outcome = serve_store(store.clone(), &config).await;

    // Release the pool whether the server stopped cleanly or not
    store.disconnect().await;
    outcome
}

async fn serve_store(store: PokemonStore, config: &Config) -> Result<()> {
    store.migrate().await?;

    let schema = build_schema(store);
    tracing::info!("✅ Schema built successfully");

    if let Some(path) = &config.schema.sdl_path {
        export_sdl(&schema.sdl(), path)?;
    }

    pokedex::server::serve(schema, &config.server).await
}
