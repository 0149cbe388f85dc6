//! Real-Time Transaction Feed Listener Library

pub mod config;
pub mod feed;
pub mod lifecycle;
pub mod subscription;

pub use config::schema::ListenerConfig;
pub use feed::FeedListener;
pub use lifecycle::Shutdown;
