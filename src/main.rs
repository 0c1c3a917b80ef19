//! Flush Cache demo host
//!
//! Owns an ordered map, wires it into an [`ExpiringLruCache`] through the
//! closure builder, adds a timestamp entry on every insert tick and logs the
//! map contents, while a clock task reports the current time.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use chrono::Local;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flush_cache::tasks::TIME_FORMAT;
use flush_cache::{spawn_clock_task, DemoConfig, ExpiringLruCache, GenericCache};

/// Main entry point for the demo host.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Wire the host-owned map into the cache via the builder
/// 4. Start the clock task
/// 5. Add an entry on every insert tick until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flush_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Flush Cache demo host");

    let config = DemoConfig::from_env();
    info!(
        "Configuration loaded: max_size={}, flush_interval={:?}, insert_interval={:?}, tick_interval={:?}",
        config.cache.max_size,
        config.cache.flush_interval,
        config.insert_interval,
        config.tick_interval
    );

    // The host owns the map; the cache only reaches it through the closures
    let map: Rc<RefCell<BTreeMap<u64, String>>> = Rc::default();
    let (m1, m2, m3, m4, m5) = (
        map.clone(),
        map.clone(),
        map.clone(),
        map.clone(),
        map.clone(),
    );
    let mut cache = ExpiringLruCache::from_builder(config.cache, |b| {
        b.size(move || m1.borrow().len())
            .set(move |key, value| {
                m2.borrow_mut().insert(key, value);
            })
            .get(move |key| m3.borrow().get(key).cloned())
            .remove(move |key| m4.borrow_mut().remove(key))
            .clear(move || m5.borrow_mut().clear())
    })?;
    info!("Cache initialized");

    let (_time, clock_handle) = spawn_clock_task(config.tick_interval);
    info!("Clock task started");

    let mut inserts = tokio::time::interval(config.insert_interval);
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    let mut count: u64 = 0;
    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = inserts.tick() => {
                cache.set(count, Local::now().format(TIME_FORMAT).to_string());
                count += 1;

                for (key, value) in map.borrow().iter() {
                    info!("{} == {}", key, value);
                }
                let stats = serde_json::to_string(&cache.stats())?;
                info!("Cache stats: {}", stats);
            }
        }
    }

    clock_handle.abort();
    warn!("Clock task aborted");

    info!("Demo host shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
