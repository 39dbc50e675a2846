//! Video search CLI
//!
//! Local execution entry point. For AWS Lambda, use `video-search-lambda`.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use video_search::{
    config,
    error::{AppError, Result},
    logging::LogSearchLog,
    models::{AppConfig, DAYS_PARAM, QUERY_PARAM},
    secrets::{EnvSecretStore, SecretStore, StaticSecretStore},
    services::VideoSearchService,
    utils::http,
};

/// Search recent YouTube videos ranked by views
#[derive(Parser, Debug)]
#[command(name = "video-search", version, about = "Recent video search by view count")]
struct Cli {
    /// Path to a TOML config file (environment variables still override it)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a search and print the JSON response body
    Search {
        /// Search text (default: config `default_query`)
        #[arg(short, long)]
        query: Option<String>,

        /// Recency window in days (default: config `default_days`)
        #[arg(short, long)]
        days: Option<String>,

        /// Number of videos to request
        #[arg(long)]
        max_results: Option<u32>,

        /// API key to use directly instead of a secret store
        #[arg(long, conflicts_with = "secret_name")]
        api_key: Option<String>,

        /// Read the key from this AWS Secrets Manager secret (requires the `aws` feature)
        #[arg(long)]
        secret_name: Option<String>,
    },

    /// Validate configuration
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .target(env_logger::Target::Stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    match path {
        Some(path) => config::load_with_file(path),
        None => config::load_from_env(),
    }
}

/// Where the search reads its API key from.
#[derive(Debug, PartialEq, Eq)]
enum KeySource {
    /// Key given on the command line
    Direct(String),
    /// AWS Secrets Manager secret
    SecretsManager(String),
    /// `YOUTUBE_API_KEY` environment variable
    Environment,
}

impl KeySource {
    fn select(api_key: Option<String>, secret_name: Option<String>) -> Self {
        match (api_key, secret_name) {
            (Some(key), _) => Self::Direct(key),
            (None, Some(name)) => Self::SecretsManager(name),
            (None, None) => Self::Environment,
        }
    }
}

async fn secret_store(config: &AppConfig, source: KeySource) -> Result<Arc<dyn SecretStore>> {
    match source {
        KeySource::Direct(key) => Ok(Arc::new(
            StaticSecretStore::new().with_api_key(config.secret_name.clone(), &key),
        )),
        KeySource::Environment => Ok(Arc::new(EnvSecretStore::default())),
        #[cfg(feature = "aws")]
        KeySource::SecretsManager(_) => {
            let store =
                video_search::secrets::AwsSecretStore::for_region(config.region.clone()).await;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "aws"))]
        KeySource::SecretsManager(_) => Err(AppError::config(
            "--secret-name requires building with the 'aws' feature",
        )),
    }
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Search {
            query,
            days,
            max_results,
            api_key,
            secret_name,
        } => {
            let source = KeySource::select(api_key, secret_name);
            if let KeySource::SecretsManager(name) = &source {
                config.secret_name = name.clone();
            }
            if let Some(max) = max_results {
                config.max_results = max;
            }
            config.validate()?;

            let client = http::create_async_client(&config.http)?;
            let secrets = secret_store(&config, source).await?;
            let service = VideoSearchService::new(config, client, secrets, Arc::new(LogSearchLog));

            let mut params = std::collections::HashMap::new();
            if let Some(q) = query {
                params.insert(QUERY_PARAM.to_string(), q);
            }
            if let Some(d) = days {
                params.insert(DAYS_PARAM.to_string(), d);
            }

            let response = service.handle(Some(&params)).await;
            println!("{}", response.body);

            if response.status_code != 200 {
                log::error!("Search returned status {}", response.status_code);
                std::process::exit(1);
            }
        }

        Command::Validate => {
            config.validate()?;
            log::info!("Configuration is valid");
            let rendered =
                toml::to_string_pretty(&config).map_err(|e| AppError::config(e.to_string()))?;
            println!("{rendered}");
        }
    }

    Ok(())
}
