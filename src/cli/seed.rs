use pokedex::error::Result;

/// Run the seed command; any error propagates to a non-zero exit
pub async fn run(config_path: String) -> Result<()> {
    tracing::info!("📖 Loading configuration from {}", config_path);
    let config = pokedex::config::load_config(&config_path)?;

    let created = pokedex::seed::run(&config.database).await?;
    tracing::info!("🌱 Inserted {} pokemon", created.len());

    Ok(())
}
