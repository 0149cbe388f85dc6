//! Feed connection establishment and outbound writes.
//!
//! # Responsibilities
//! - Open the WebSocket connection to the configured endpoint
//! - Send the one-time subscription request
//! - Send the close frame during interrupt-triggered shutdown

use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::tungstenite::Message;
use url::Url;

use crate::feed::types::{FeedError, FeedReader, FeedResult, FeedSocket, FeedWriter};
use crate::subscription::SubscribeRequest;

/// Reason text carried by the shutdown close frame.
const CLOSE_REASON: &str = "client shutdown";

/// A live feed connection, not yet split into halves.
pub struct FeedConnection {
    socket: FeedSocket,
}

impl FeedConnection {
    /// Open the streaming connection.
    ///
    /// No retry: an unreachable endpoint or failed handshake is fatal to the
    /// process.
    pub async fn connect(endpoint: &Url) -> FeedResult<Self> {
        let (socket, response) = connect_async(endpoint.as_str())
            .await
            .map_err(FeedError::Connect)?;

        tracing::info!(
            endpoint = %endpoint,
            status = %response.status(),
            "Feed connection established"
        );

        Ok(Self { socket })
    }

    /// Send the subscription request as a single text frame.
    pub async fn subscribe(&mut self, request: &SubscribeRequest) -> FeedResult<()> {
        let payload = request.to_json()?;
        self.socket
            .send(Message::Text(payload.into()))
            .await
            .map_err(FeedError::Subscribe)?;

        tracing::info!(
            method = request.method,
            id = request.id,
            "Subscription request sent"
        );
        Ok(())
    }

    /// Split into the write half kept by the lifecycle manager and the read
    /// half moved into the receive task.
    pub fn split(self) -> (FeedWriter, FeedReader) {
        self.socket.split()
    }
}

/// Send a close frame with the normal-closure code on the write half.
pub async fn send_close(writer: &mut FeedWriter) -> FeedResult<()> {
    let frame = CloseFrame {
        code: CloseCode::Normal,
        reason: CLOSE_REASON.into(),
    };
    writer
        .send(Message::Close(Some(frame)))
        .await
        .map_err(FeedError::CloseSend)
}
