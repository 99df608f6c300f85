//! PassVault - personal password manager API
//!
//! Serves the REST API by default. `passvault generate` prints a random
//! password instead. Settings are read from the environment, with a `.env`
//! file filling in anything unset.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use vault_core::{check_strength, generate_password, open_store, HashCost, VaultConfig};
use vault_server::{load_dotenv, AppContext, VaultServer};

/// PassVault - password records with secrets encrypted at rest
#[derive(Parser, Debug)]
#[command(name = "passvault")]
#[command(version)]
#[command(about = "PassVault - personal password manager API")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the REST API (default)
    Serve(ServeArgs),
    /// Print a randomly generated password
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Store connection string: `memory://` or `file://<dir>`
    #[arg(long, env = "VAULT_STORE_URI", default_value = vault_core::settings::DEFAULT_STORE_URI)]
    store_uri: String,

    /// Database (collection) name
    #[arg(long, env = "VAULT_DB_NAME", default_value = vault_core::settings::DEFAULT_DB_NAME)]
    db_name: String,

    /// Port for the HTTP server
    #[arg(long, env = "PORT", default_value_t = vault_core::settings::DEFAULT_PORT)]
    port: u16,

    /// Encryption key: 64 hex characters or 32 raw bytes
    #[arg(long, env = "ENCRYPTION_KEY", hide_env_values = true)]
    encryption_key: Option<String>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Password length
    #[arg(long, short, default_value_t = vault_core::generator::DEFAULT_LENGTH)]
    length: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Must run before parsing so clap's `env` fallbacks see the file
    let env_file = load_dotenv();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve(cli.serve)) {
        Command::Serve(args) => serve(args, env_file).await,
        Command::Generate(args) => {
            generate(args);
            Ok(())
        }
    }
}

async fn serve(args: ServeArgs, env_file: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    if let Some(path) = env_file {
        info!("Loaded environment from {:?}", path);
    }

    let config = VaultConfig {
        store_uri: args.store_uri,
        db_name: args.db_name,
        port: args.port,
        encryption_key: args.encryption_key,
        hash_cost: HashCost::default(),
    };
    let key = config
        .validate()
        .map_err(|e| format!("Invalid configuration: {}", e))?;

    // Opened once; every request shares this handle
    let store = open_store(&config.store_uri, &config.db_name)
        .await
        .map_err(|e| format!("Failed to open store: {}", e))?;
    info!("Store holds {} records", store.count().await?);

    let ctx = AppContext::new(store, key).with_hash_cost(config.hash_cost);
    VaultServer::new(ctx, config.port).run().await
}

fn generate(args: GenerateArgs) {
    let password = generate_password(args.length);
    println!("{}", password);

    for issue in check_strength(&password) {
        eprintln!("warning: {}", issue);
    }
}
