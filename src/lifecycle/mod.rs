//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     trigger → broadcast to subscribers → listener sends close frame
//!             → bounded wait for the receive loop → exit
//! ```
//!
//! # Design Decisions
//! - Shutdown is requested through an injected coordinator, never directly
//!   from the signal handler, so tests can trigger it synthetically
//! - Repeated triggers are ignored once shutdown is in progress
//! - Shutdown has a timeout: the listener exits after the close grace period
//!   even if the peer never acknowledges

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
