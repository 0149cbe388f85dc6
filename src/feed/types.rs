//! Feed connection types and error definitions.

use futures_util::stream::{SplitSink, SplitStream};
use thiserror::Error;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

/// The duplex stream carrying one feed connection.
pub type FeedSocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Write half after the socket is split. The lifecycle manager is the only
/// writer.
pub type FeedWriter = SplitSink<FeedSocket, Message>;

/// Read half after the socket is split. The receive task is the only reader.
pub type FeedReader = SplitStream<FeedSocket>;

/// Errors that can occur while managing the feed connection.
///
/// Receive failures are not represented here; they end the receive loop and
/// surface as [`ReceiveOutcome::Failed`] instead of an error return.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The streaming connection could not be established.
    #[error("Connection failed: {0}")]
    Connect(#[source] tungstenite::Error),

    /// The subscription request could not be serialized to JSON.
    #[error("Subscription encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// The subscription request could not be written to the connection.
    #[error("Subscription send failed: {0}")]
    Subscribe(#[source] tungstenite::Error),

    /// The close frame written during shutdown could not be sent.
    #[error("Close frame send failed: {0}")]
    CloseSend(#[source] tungstenite::Error),
}

/// Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;

/// Terminal state of the receive loop.
#[derive(Debug)]
pub enum ReceiveOutcome {
    /// The peer ended the stream (close frame or end of stream).
    Closed {
        /// Text frames logged before the stream ended.
        received: u64,
    },

    /// Reading from the connection failed.
    Failed {
        error: tungstenite::Error,
        /// Text frames logged before the failure.
        received: u64,
    },
}

impl ReceiveOutcome {
    /// Text frames logged before the loop ended, whichever way it ended.
    pub fn received(&self) -> u64 {
        match self {
            ReceiveOutcome::Closed { received } => *received,
            ReceiveOutcome::Failed { received, .. } => *received,
        }
    }
}
