use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use registry::config::Config;
use registry::secrets::{DatastoreCredentials, VaultClient};
use registry::storage::dynamodb::DynamoDbRepository;
use registry::{demo, secrets};

/// Seed and query the team-asset collection.
#[derive(Parser, Debug)]
#[command(name = "registry")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Table holding the team-asset collection
    #[arg(long, short, default_value = "sgune", env = "DYNAMODB_TABLE_NAME")]
    table_name: String,

    /// Skip Vault and use the AWS SDK default credential chain
    #[arg(long)]
    no_vault: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "registry=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    config.store.table_name = cli.table_name;

    tracing::info!(
        target_store = %config.store.target_display(),
        table = %config.store.table_name,
        "starting registry demo"
    );

    let credentials = if cli.no_vault {
        tracing::info!("skipping vault, using SDK default credential chain");
        None
    } else {
        Some(load_credentials(&config).await?)
    };

    let repo = DynamoDbRepository::connect(&config.store, credentials).await?;

    demo::run(&repo).await?;

    tracing::info!("registry demo finished");
    Ok(())
}

/// Fetch the datastore credential blob from Vault and parse it.
///
/// Any failure here is fatal: the program never talks to the store without
/// credentials it was explicitly handed.
async fn load_credentials(config: &Config) -> Result<DatastoreCredentials, secrets::SecretsError> {
    let vault = VaultClient::new(config.vault.clone());
    let blob = vault
        .get_secret_field(&config.secret_path, &config.secret_field)
        .await?;
    tracing::info!(
        path = %config.secret_path,
        field = %config.secret_field,
        "loaded datastore credentials from vault"
    );
    DatastoreCredentials::from_json(&blob)
}
