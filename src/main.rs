//! Service access CLI.
//!
//! Fetches URLs through the access executor so retry and caching behavior can
//! be observed from the command line.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, Subcommand};

use service_access::cache::MemoryCache;
use service_access::config::{load_config, AccessConfig};
use service_access::executor::{AccessError, ServiceAccessExecutor};
use service_access::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "service-access")]
#[command(about = "Cached, retried remote calls", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a URL through the executor
    Fetch {
        url: String,

        /// Cache the response under this key
        #[arg(short = 'k', long)]
        cache_key: Option<String>,

        /// Number of times to issue the call
        #[arg(short, long, default_value_t = 1)]
        repeat: u32,
    },
    /// Print the effective configuration
    ShowConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AccessConfig::default(),
    };

    if let Err(e) = init_logging(&config.observability) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match cli.command {
        Commands::Fetch { url, cache_key, repeat } => {
            fetch(&config, &url, cache_key.as_deref(), repeat).await?;
        }
        Commands::ShowConfig => {
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

async fn fetch(
    config: &AccessConfig,
    url: &str,
    cache_key: Option<&str>,
    repeat: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let cache = match &config.cache.persistence_path {
        Some(path) => MemoryCache::load_from_file(path)?,
        None => MemoryCache::new(None),
    };
    let executor = ServiceAccessExecutor::new(Arc::new(cache.clone()), Some(&config.service_access));
    let client = reqwest::Client::new();

    tracing::info!(
        url,
        retries = executor.policy().retries(),
        delay = ?executor.policy().delay(),
        "Fetching"
    );

    for i in 0..repeat {
        let start = Instant::now();
        let body: Option<String> = executor
            .execute(
                || async {
                    let response = client.get(url).send().await?.error_for_status()?;
                    Ok::<_, AccessError>(Some(response.text().await?))
                },
                cache_key,
            )
            .await?;

        tracing::info!(call = i + 1, elapsed = ?start.elapsed(), "Call finished");
        if let Some(body) = body {
            println!("{}", body);
        }
    }

    cache.save_to_file()?;
    Ok(())
}
