//! Connection lifecycle management.
//!
//! # Responsibilities
//! - Own the feed connection from connect to close
//! - Send the one-time subscription request before anything reads
//! - Run the receive loop as a spawned task
//! - Coordinate shutdown between loop completion and the interrupt signal

use std::time::Duration;

use tokio::sync::{broadcast, oneshot};
use tokio::time::timeout;

use crate::config::ListenerConfig;
use crate::feed::connection::{send_close, FeedConnection};
use crate::feed::receiver::receive_loop;
use crate::feed::types::{FeedResult, FeedWriter, ReceiveOutcome};

/// Owns the full lifetime of one feed connection.
pub struct FeedListener {
    config: ListenerConfig,
}

impl FeedListener {
    /// Create a listener for the given configuration.
    pub fn new(config: ListenerConfig) -> Self {
        Self { config }
    }

    /// Run until the stream ends or shutdown is requested.
    ///
    /// Returns an error only for connect and subscribe failures. A stream
    /// that ends on its own resolves to `Ok` whether the peer closed
    /// cleanly or the read failed; the log line is the only distinction.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) -> FeedResult<()> {
        // 1. Connect and subscribe before anything reads
        let request = self.config.subscription.request();
        let mut conn = FeedConnection::connect(&self.config.endpoint).await?;
        conn.subscribe(&request).await?;

        // 2. Split: the receive task takes the read half
        let (mut writer, reader) = conn.split();
        let (done_tx, mut done_rx) = oneshot::channel();
        tokio::spawn(async move {
            let outcome = receive_loop(reader).await;
            let _ = done_tx.send(outcome);
        });

        // 3. Block until the loop finishes or shutdown is requested.
        //    Only the shutdown arm ever writes the close frame, so it is
        //    sent at most once no matter how the two events race.
        tokio::select! {
            outcome = &mut done_rx => {
                log_outcome(outcome);
            }
            _ = shutdown.recv() => {
                self.close(&mut writer, done_rx).await;
            }
        }

        Ok(())
    }

    /// Interrupt path: send the close frame, then wait out the grace period
    /// for the peer to end the stream.
    async fn close(&self, writer: &mut FeedWriter, done_rx: oneshot::Receiver<ReceiveOutcome>) {
        tracing::info!("Closing feed connection");

        if let Err(e) = send_close(writer).await {
            tracing::warn!("Close frame not sent: {}", e);
        }

        let grace = Duration::from_millis(self.config.shutdown.close_grace_ms);
        match timeout(grace, done_rx).await {
            Ok(outcome) => log_outcome(outcome),
            Err(_) => tracing::warn!(
                grace_ms = self.config.shutdown.close_grace_ms,
                "Peer did not acknowledge close in time"
            ),
        }
    }
}

/// Log how the receive loop ended.
fn log_outcome(outcome: Result<ReceiveOutcome, oneshot::error::RecvError>) {
    match outcome {
        Ok(ReceiveOutcome::Closed { received }) => {
            tracing::info!(received, "Feed stream ended by peer");
        }
        Ok(ReceiveOutcome::Failed { error, received }) => {
            tracing::warn!(received, "Feed stream failed: {}", error);
        }
        Err(_) => {
            tracing::warn!("Receive task ended without reporting an outcome");
        }
    }
}
