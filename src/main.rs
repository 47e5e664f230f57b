//! switchd: hot-reloadable switch store daemon.
//!
//! # Architecture Overview
//!
//! ```text
//!   switch file ──▶ watcher / SIGHUP ──┐
//!                                      ▼
//!   admin API (POST blob) ─────▶ SwitchStore::reload ──▶ ArcSwap<SwitchTable>
//!                                                              │
//!   admin API (GET), in-process callers ◀── typed getters ◀────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use switch_store::admin::{setup_admin_router, AdminState};
use switch_store::config::{loader::load_config, SwitchdConfig};
use switch_store::lifecycle::{signals, startup::bootstrap_store, Shutdown};
use switch_store::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "switchd", version)]
#[command(about = "Hot-reloadable switch store daemon", long_about = None)]
struct Args {
    /// Path to the daemon configuration (TOML).
    #[arg(short, long, default_value = "switchd.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_found = args.config.exists();
    let config = if config_found {
        load_config(&args.config)?
    } else {
        SwitchdConfig::default()
    };

    logging::init_tracing(&config.observability.log_level.to_ascii_lowercase())?;

    tracing::info!("switchd v{} starting", env!("CARGO_PKG_VERSION"));
    if !config_found {
        tracing::warn!(path = %args.config.display(), "Config file not found, using defaults");
    }
    tracing::info!(
        source = ?config.source.path,
        watch = config.source.watch,
        admin_enabled = config.admin.enabled,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let boot = bootstrap_store(&config.source)?;
    let shutdown = Shutdown::new();

    if let Some(path) = config.source.path.clone() {
        let _hangup = signals::spawn_reload_on_hangup(Arc::clone(&boot.store), path, shutdown.subscribe())?;
    }

    let admin_task = if config.admin.enabled {
        let state = AdminState::new(
            Arc::clone(&boot.store),
            &config.admin.api_key,
            config.source.path.clone(),
        );
        let router = setup_admin_router(state, config.admin.max_body_bytes);
        let listener = TcpListener::bind(&config.admin.bind_address).await?;
        tracing::info!(address = %listener.local_addr()?, "Admin API listening");

        let stop = shutdown.wait();
        Some(tokio::spawn(async move {
            axum::serve(listener, router).with_graceful_shutdown(stop).await
        }))
    } else {
        None
    };

    signals::shutdown_signal().await;
    shutdown.trigger();

    if let Some(task) = admin_task {
        task.await??;
    }
    drop(boot.watcher);

    tracing::info!(
        generation = boot.store.generation(),
        switches = %boot.store.snapshot(),
        "Shutdown complete"
    );
    Ok(())
}
