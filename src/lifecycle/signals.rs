//! OS signal wiring.
//!
//! # Responsibilities
//! - Register the interrupt handler (SIGINT)
//! - Translate the signal into a shutdown trigger
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - The handler only triggers the coordinator; the listener reacts through
//!   its subscription, the same path tests drive synthetically

use crate::lifecycle::shutdown::Shutdown;

/// Spawn the interrupt handler task.
pub fn install(shutdown: Shutdown) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Shutdown signal received");
                shutdown.trigger();
            }
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
            }
        }
    });
}
