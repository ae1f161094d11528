//! Mini Cache - interactive shell over the cache facade
//!
//! Reads commands from stdin and prints one reply per line. Logs go to
//! stderr.

use anyhow::{bail, Context};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mini_cache::shell::{run_session, spawn_line_reader, SessionEnd};
use mini_cache::{spawn_sweep_task, Cache, CacheConfig, DriverRegistry};

/// Main entry point for the Mini Cache shell.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the driver registry and resolve the configured driver
/// 4. Start the background expiry sweep task (if enabled)
/// 5. Serve commands from stdin until EOF, `quit` or Ctrl+C
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mini_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Mini Cache shell");

    let config = CacheConfig::from_env().context("failed to load cache configuration")?;
    info!(
        "Configuration loaded: driver={}, expiry={}, sweep_interval={}s",
        config.driver, config.expiry, config.sweep_interval
    );

    if !config.enabled {
        bail!("cache is disabled (CACHE_ENABLED=false)");
    }

    let registry = DriverRegistry::with_memory_policy(config.expiry);
    let sweep_interval = config.sweep_interval;
    let cache = Cache::new(&registry, config).context("failed to initialize cache")?;

    let sweep_handle =
        (sweep_interval > 0).then(|| spawn_sweep_task(cache.driver(), sweep_interval));

    let mut lines = spawn_line_reader(std::io::stdin());
    let mut stdout = tokio::io::stdout();
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let end = run_session(&cache, &mut lines, &mut stdout, shutdown)
        .await
        .context("shell session failed")?;
    match end {
        SessionEnd::Shutdown => info!("Received Ctrl+C, shutting down..."),
        SessionEnd::Quit | SessionEnd::Eof => info!("Session ended ({:?})", end),
    }

    if let Some(handle) = sweep_handle {
        handle.abort();
        warn!("Expiry sweep task aborted");
    }

    info!("Shell shutdown complete");
    Ok(())
}
