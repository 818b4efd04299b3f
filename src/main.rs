use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gold_medal::api::state::AppState;
use gold_medal::config::AppConfig;
use gold_medal::storage::InMemoryStore;
use gold_medal::{CountrySortKey, QueryService, SortDirection};

#[derive(Parser)]
#[command(name = "gold-medal")]
#[command(about = "Olympic gold medal metrics by country")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Data directory path (overrides config)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,
    },

    /// List countries with medal counts
    Countries {
        /// Sort key: name, gdp, population or medals
        #[arg(long, default_value = "medals")]
        sort_by: String,

        /// "y" for ascending, anything else for descending
        #[arg(long, default_value = "n")]
        ascending: String,
    },

    /// Show details for one country
    Country {
        /// Country name (case-insensitive)
        name: String,
    },

    /// List one country's gold medals
    Medals {
        /// Country name (case-insensitive)
        name: String,

        /// Sort key: year, season, city, name or event
        #[arg(long, default_value = "year")]
        sort_by: String,

        /// "y" for ascending, anything else for descending
        #[arg(long, default_value = "n")]
        ascending: String,
    },

    /// Load the dataset and report integrity issues
    Check,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {:?}", cli.config))?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    // Initialize tracing; logs go to stderr so query output stays clean
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::info!("Starting gold-medal v{}", env!("CARGO_PKG_VERSION"));

    let storage = config.storage();
    let store = InMemoryStore::load(&storage)
        .with_context(|| format!("loading dataset from {:?}", storage.data_dir))?;

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or(config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let state = AppState::new(Arc::new(store));
            let app = gold_medal::api::build_router(state, &config.server.cors_origin);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Countries { sort_by, ascending } => {
            let queries = QueryService::new(&store);
            let summaries = queries.list_country_summaries(
                CountrySortKey::from_param(Some(&sort_by)),
                SortDirection::from_flag(Some(&ascending)),
            );
            print_json(&summaries)?;
        }
        Commands::Country { name } => {
            let queries = QueryService::new(&store);
            print_json(&queries.get_country_details(&name))?;
        }
        Commands::Medals {
            name,
            sort_by,
            ascending,
        } => {
            let queries = QueryService::new(&store);
            let medals = queries.list_country_medals_by(
                &name,
                &sort_by,
                SortDirection::from_flag(Some(&ascending)),
            );
            print_json(&medals)?;
        }
        Commands::Check => {
            let report = store.integrity_report();
            print_json(&report)?;
            if !report.is_clean() {
                bail!(
                    "{} medals reference {} unknown countries",
                    report.orphaned_medals(),
                    report.unknown_countries.len()
                );
            }
            tracing::info!("Dataset is consistent");
        }
    }

    Ok(())
}
