//! Real-time transaction feed listener.
//!
//! Opens one streaming connection to the configured endpoint, subscribes to
//! transaction notifications for the watched accounts, and logs every
//! notification verbatim until the stream ends or the process is interrupted.
//!
//! ```text
//!     WS_URL ──▶ config ──▶ FeedConnection (connect + subscribe)
//!                               │
//!                               ├── receive task ──▶ log each text frame
//!                               │
//!     Ctrl+C ──▶ Shutdown ──▶ lifecycle select ──▶ close frame + grace wait
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tx_listener::config;
use tx_listener::feed::FeedListener;
use tx_listener::lifecycle::{signals, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tx_listener=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("tx-listener v0.1.0 starting");

    // Load configuration before touching the network
    let config = config::load_from_env()?;

    tracing::info!(
        endpoint = %config.endpoint,
        accounts = ?config.subscription.accounts,
        commitment = ?config.subscription.commitment,
        "Configuration loaded"
    );

    // Wire the interrupt signal to the shutdown coordinator
    let shutdown = Shutdown::new();
    signals::install(shutdown.clone());

    // Run the listener until the stream ends or shutdown is requested
    let listener = FeedListener::new(config);
    listener.run(shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
