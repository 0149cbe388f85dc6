//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (WS_URL, FILTER_ACCOUNTS)
//!     → loader.rs (lookup, parse, validate)
//!     → ListenerConfig (validated, immutable)
//!     → owned by the feed listener for the life of the process
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - Only the endpoint is required; every other field has a default
//! - The loader reads variables through an injected lookup so tests never
//!   mutate the process environment

pub mod loader;
pub mod schema;

pub use loader::{load_from_env, load_with, ConfigError};
pub use schema::ListenerConfig;
pub use schema::ShutdownConfig;
pub use schema::SubscriptionConfig;
