//! Receive loop for the feed connection.
//!
//! The sole reader of the connection. Logs every text frame verbatim, in
//! arrival order, and reports how the stream ended through a typed outcome.
//! The lifecycle manager decides what happens next; this loop never exits
//! the process.

use futures_util::{Stream, StreamExt};
use tokio_tungstenite::tungstenite::{Error as WsError, Message};

use crate::feed::types::{FeedReader, ReceiveOutcome};

/// Run the receive loop until the stream ends, logging each text frame.
pub async fn receive_loop(mut reader: FeedReader) -> ReceiveOutcome {
    receive_with(&mut reader, |text| tracing::info!("feed message: {}", text)).await
}

/// Drive the loop over any frame stream, handing text payloads to `on_text`.
async fn receive_with<S, F>(stream: &mut S, mut on_text: F) -> ReceiveOutcome
where
    S: Stream<Item = Result<Message, WsError>> + Unpin,
    F: FnMut(&str),
{
    let mut received = 0u64;
    loop {
        match stream.next().await {
            Some(Ok(Message::Text(text))) => {
                received += 1;
                on_text(text.as_str());
            }
            Some(Ok(Message::Close(frame))) => {
                match frame {
                    Some(frame) => {
                        tracing::info!(code = ?frame.code, "Close frame from peer")
                    }
                    None => tracing::info!("Close frame from peer"),
                }
                return ReceiveOutcome::Closed { received };
            }
            // Pings are answered by the protocol layer during read polling;
            // binary frames are not part of the subscribed stream
            Some(Ok(_)) => {}
            Some(Err(error)) => return ReceiveOutcome::Failed { error, received },
            None => return ReceiveOutcome::Closed { received },
        }
    }
}
