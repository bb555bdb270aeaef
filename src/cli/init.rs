use pokedex::config::{Config, SchemaConfig};
use pokedex::error::Result;

/// Run the init command to generate a default configuration
pub fn run(output: Option<String>) -> Result<()> {
    let config = Config {
        schema: SchemaConfig {
            sdl_path: Some("schema.graphql".to_string()),
        },
        ..Config::default()
    };

    if let Some(output_path) = output {
        pokedex::config::save_config(&config, &output_path)?;
        tracing::info!("📝 Generated {}", output_path);
        tracing::info!("💡 Next steps:");
        tracing::info!("   1. pokedex seed --config {}", output_path);
        tracing::info!("   2. pokedex serve --config {}", output_path);
    } else {
        let toml_string = toml::to_string_pretty(&config)?;
        println!("{}", toml_string);
        tracing::info!("💡 Tip: Add --output <file> to save to a file instead of stdout");
    }

    Ok(())
}
