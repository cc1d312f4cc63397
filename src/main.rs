//! Pokedex - A command-line catalog explorer
//!
//! Interactive loop over the catalog API with a time-expiring response cache.

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::repl::{spawn_line_reader, Flow, PROMPT};
use pokedex::{CatalogClient, Config, ResponseCache, Session};

/// Main entry point for the explorer.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its reaper
/// 4. Create the catalog client around the cache
/// 5. Read commands until `exit`, end of input or Ctrl+C
/// 6. Stop the reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs don't interleave with the prompt;
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, cache_interval={}s, http_timeout={}s",
        config.base_url, config.cache_interval, config.http_timeout
    );

    let cache = Arc::new(ResponseCache::new(config.cache_interval()));
    let client = CatalogClient::from_config(&config, Arc::clone(&cache))
        .context("failed to build HTTP client")?;
    let mut session = Session::new(client);

    // Blocking stdin reads live on their own thread so Ctrl+C can end the loop
    let mut lines = spawn_line_reader(std::io::BufReader::new(std::io::stdin()));
    let mut stdout = std::io::stdout();

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        let line = tokio::select! {
            line = lines.recv() => line.transpose().context("failed to read input")?,
            _ = signal::ctrl_c() => {
                info!("Received Ctrl+C, exiting");
                writeln!(stdout)?;
                None
            }
        };

        let Some(line) = line else {
            break;
        };

        match session.handle_line(&line, &mut stdout).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) => {
                debug!("Command failed: {:?}", err);
                writeln!(stdout, "{}", err)?;
            }
        }
    }

    cache.shutdown();
    info!("Pokedex closed, cache stats: {}", cache.stats());

    Ok(())
}
