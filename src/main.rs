use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(version = "0.1.0")]
#[command(about = "Serve a seeded Pokemon table over GraphQL", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a default configuration file
    Init {
        /// Output config file path (if not specified, outputs to stdout)
        #[arg(long)]
        output: Option<String>,
    },

    /// Create or upgrade the database tables
    Migrate {
        /// Config file path
        #[arg(long, default_value = "pokedex.toml")]
        config: String,
    },

    /// Insert the fixed seed rows
    Seed {
        /// Config file path
        #[arg(long, default_value = "pokedex.toml")]
        config: String,
    },

    /// Start GraphQL server
    Serve {
        /// Config file path
        #[arg(long, default_value = "pokedex.toml")]
        config: String,

        /// Server port (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print or write the GraphQL schema SDL
    Schema {
        /// Output file path (if not specified, outputs to stdout)
        #[arg(long)]
        output: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so `init` and `schema` output can be piped
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { output } => cli::init::run(output),
        Commands::Migrate { config } => cli::migrate::run(config).await,
        Commands::Seed { config } => cli::seed::run(config).await,
        Commands::Serve { config, port } => cli::serve::run(config, port).await,
        Commands::Schema { output } => cli::schema::run(output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
