//! Subscription and stream-end behavior of the feed listener.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::json;
use tokio::sync::oneshot;
use tokio_tungstenite::tungstenite::Message;

use tx_listener::feed::{FeedError, FeedListener};
use tx_listener::lifecycle::Shutdown;

mod common;

#[tokio::test]
async fn test_subscribes_with_fixed_shape_before_any_message() {
    let (frame_tx, frame_rx) = oneshot::channel();

    let (endpoint, server) = common::start_mock_feed(move |mut socket| async move {
        // The first client frame must be the subscription
        let first = socket.next().await.unwrap().unwrap();
        frame_tx.send(first).unwrap();

        // Only then push a message and end the stream
        socket
            .send(Message::Text(r#"{"result":"ok"}"#.into()))
            .await
            .unwrap();
        socket.send(Message::Close(None)).await.unwrap();
        while let Some(Ok(_)) = socket.next().await {}
    })
    .await;

    let shutdown = Shutdown::new();
    let listener = FeedListener::new(common::test_config(&endpoint));
    let run = tokio::spawn(listener.run(shutdown.subscribe()));

    let first = frame_rx.await.unwrap();
    let payload = match first {
        Message::Text(text) => serde_json::from_str::<serde_json::Value>(text.as_str()).unwrap(),
        other => panic!("expected a text frame first, got {:?}", other),
    };

    assert_eq!(
        payload,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "transactionSubscribe",
            "params": [
                {
                    "vote": false,
                    "failed": false,
                    "accountInclude": ["675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8"]
                },
                {
                    "commitment": "processed",
                    "encoding": "base64",
                    "transactionDetails": "signatures",
                    "showRewards": true,
                    "maxSupportedTransactionVersion": 0
                }
            ]
        })
    );

    run.await.unwrap().unwrap();
    server.await.unwrap();
}

#[tokio::test]
async fn test_peer_close_exits_without_client_close() {
    let (closes_tx, closes_rx) = oneshot::channel();

    let (endpoint, server) = common::start_mock_feed(move |mut socket| async move {
        let _subscribe = socket.next().await.unwrap().unwrap();
        socket.send(Message::Text("one".into())).await.unwrap();
        socket.send(Message::Close(None)).await.unwrap();

        // Drain to end of stream, counting deliberate client closes. A bare
        // echo of our own close frame does not carry the client's reason.
        let mut client_closes = 0u32;
        while let Some(Ok(frame)) = socket.next().await {
            if let Message::Close(Some(frame)) = frame {
                if frame.reason.as_str() == "client shutdown" {
                    client_closes += 1;
                }
            }
        }
        let _ = closes_tx.send(client_closes);
    })
    .await;

    let shutdown = Shutdown::new();
    let listener = FeedListener::new(common::test_config(&endpoint));

    let started = tokio::time::Instant::now();
    listener.run(shutdown.subscribe()).await.unwrap();

    // Exited on the peer's close, well inside the shutdown grace period
    assert!(
        started.elapsed() < Duration::from_millis(900),
        "peer close should not wait out the grace period"
    );
    assert!(!shutdown.is_triggered());

    assert_eq!(closes_rx.await.unwrap(), 0);
    server.await.unwrap();
}

#[tokio::test]
async fn test_abrupt_peer_disconnect_exits_cleanly() {
    let (endpoint, server) = common::start_mock_feed(move |mut socket| async move {
        let _subscribe = socket.next().await.unwrap().unwrap();
        socket.send(Message::Text("tick".into())).await.unwrap();
        // Drop the socket without a close handshake
    })
    .await;

    let shutdown = Shutdown::new();
    let listener = FeedListener::new(common::test_config(&endpoint));

    // The read failure folds into the shutdown path rather than erroring
    listener.run(shutdown.subscribe()).await.unwrap();
    assert!(!shutdown.is_triggered());
    server.await.unwrap();
}

#[tokio::test]
async fn test_connect_failure_is_fatal() {
    // Nothing is listening on the discard port
    let listener = FeedListener::new(common::test_config("ws://127.0.0.1:9"));
    let shutdown = Shutdown::new();

    let err = listener.run(shutdown.subscribe()).await.unwrap_err();
    assert!(matches!(err, FeedError::Connect(_)));
}
