//! Pokedex - An interactive PokeAPI browser
//!
//! Starts the REPL on stdin/stdout with a cached PokeAPI client.

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::config::{Config, Overrides};
use pokedex::{Cache, PokeApiClient, Repl};

/// Browse PokeAPI location areas and catch Pokemon from a REPL
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(version)]
struct Cli {
    /// Seconds a cached API response is kept [env: POKEDEX_CACHE_TTL]
    #[arg(long, value_name = "SECS")]
    cache_ttl: Option<u64>,

    /// Seconds between cache reaper runs [env: POKEDEX_REAP_INTERVAL]
    #[arg(long, value_name = "SECS")]
    reap_interval: Option<u64>,

    /// HTTP request timeout in seconds [env: POKEDEX_HTTP_TIMEOUT]
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// PokeAPI root URL [env: POKEAPI_BASE_URL]
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
}

impl From<Cli> for Overrides {
    fn from(cli: Cli) -> Self {
        Self {
            cache_ttl: cli.cache_ttl,
            reap_interval: cli.reap_interval,
            http_timeout: cli.timeout,
            base_url: cli.base_url,
        }
    }
}

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber (stderr, so it never mixes with REPL output)
/// 2. Load configuration from environment variables and flags
/// 3. Create the response cache, which starts its reaper
/// 4. Run the REPL until `exit` or end of input
/// 5. Close the cache
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so the prompt stays clean; override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().with_overrides(cli.into());
    config.validate().context("invalid configuration")?;
    info!(
        "Configuration loaded: cache_ttl={}s, reap_interval={}s, http_timeout={}s, base_url={}",
        config.cache_ttl, config.reap_interval, config.http_timeout, config.base_url
    );

    let cache = Cache::with_config(config.cache_config()).context("failed to create cache")?;
    let client = PokeApiClient::new(&config.api_config(), cache.clone())
        .context("failed to build HTTP client")?;

    let mut repl = Repl::new(client);
    let mut stdout = std::io::stdout();
    repl.run(BufReader::new(tokio::io::stdin()), &mut stdout)
        .await
        .context("terminal I/O failed")?;

    let stats = cache.stats();
    info!(
        "Cache stats: hits={}, misses={}, reaped={}, hit_rate={:.2}",
        stats.hits,
        stats.misses,
        stats.reaped,
        stats.hit_rate()
    );
    cache.close();

    Ok(())
}
