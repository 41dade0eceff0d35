use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use beerhouse::{
    app::create_app,
    config::{Config, DynamoDbConfig},
    currency::CurrencyLayerClient,
    state::AppState,
    storage::{
        dynamodb::schema::ensure_table, CatalogRepository, DynamoDbTable, InMemoryTable,
        TableAccessor,
    },
    validation::BeerValidator,
};

/// Where the catalog is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Storage {
    /// DynamoDB table named by `DYNAMODB_BEERS`
    Dynamodb,
    /// Process-local table, lost on exit
    Memory,
}

/// Beerhouse - A beer catalog with box prices in any currency
#[derive(Parser, Debug)]
#[command(name = "beerhouse")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    /// Storage backend for the catalog
    #[arg(long, value_enum, default_value = "dynamodb", env = "STORAGE_BACKEND")]
    storage: Storage,

    /// Create the DynamoDB table and its index if they do not exist
    #[arg(long)]
    create_table: bool,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON")]
    log_json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_json);

    let config = Config::from_env();
    let table: Arc<dyn TableAccessor> = match cli.storage {
        Storage::Dynamodb => Arc::new(init_dynamodb(cli.create_table).await?),
        Storage::Memory => {
            tracing::warn!("using in-memory storage, data is lost on exit");
            Arc::new(InMemoryTable::new())
        }
    };
    let beers = CatalogRepository::new(table);

    let validator = BeerValidator::new().context("failed to compile create beer schema")?;
    let rates = Arc::new(CurrencyLayerClient::new(
        &config.currency_api_url,
        &config.currency_access_key,
    ));
    let state = AppState::new(beers, validator, rates);

    let app = create_app(state, config.request_timeout());

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "beerhouse=debug,tower_http=debug".into());

    let (json_layer, fmt_layer) = if json {
        (Some(tracing_subscriber::fmt::layer().json()), None)
    } else {
        (None, Some(tracing_subscriber::fmt::layer()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(fmt_layer)
        .init();
}

async fn init_dynamodb(create_table: bool) -> Result<DynamoDbTable> {
    let config = DynamoDbConfig::from_env()?;
    tracing::info!(
        table = %config.table_name,
        index = %config.index_name,
        target = %config.target_display(),
        "using DynamoDB storage"
    );

    let table = DynamoDbTable::from_config(&config).await;

    if create_table {
        let outcome = ensure_table(table.client(), table.table_name(), table.index_name())
            .await
            .context("failed to provision beers table")?;
        tracing::info!(?outcome, "table provisioning done");
    }

    Ok(table)
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
