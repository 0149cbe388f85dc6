//! Shared utilities for integration testing.

use std::future::Future;

use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio_tungstenite::{accept_async, WebSocketStream};

use tx_listener::ListenerConfig;

/// The socket type handed to mock feed handlers.
pub type MockSocket = WebSocketStream<TcpStream>;

/// Start a mock feed endpoint for a single connection.
///
/// Binds an ephemeral localhost port, accepts one WebSocket handshake, and
/// hands the socket to the given handler. Returns the endpoint URL and the
/// handler's task handle.
pub async fn start_mock_feed<F, Fut>(handler: F) -> (String, JoinHandle<()>)
where
    F: FnOnce(MockSocket) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let socket = accept_async(stream).await.unwrap();
        handler(socket).await;
    });

    (format!("ws://{}", addr), handle)
}

/// Build a listener config pointing at a mock feed endpoint.
pub fn test_config(endpoint: &str) -> ListenerConfig {
    ListenerConfig::new(url::Url::parse(endpoint).unwrap())
}
