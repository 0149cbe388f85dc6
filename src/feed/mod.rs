//! Streaming feed subsystem.
//!
//! # Data Flow
//! ```text
//! config (endpoint, subscription)
//!     → connection.rs (connect, send the subscribe request)
//!     → split: write half stays with the lifecycle manager,
//!              read half moves into the receive task
//!     → receiver.rs (log every text frame, report a typed outcome)
//!     → listener.rs (select: loop completion vs shutdown notification)
//! ```
//!
//! # Design Decisions
//! - The receive task is the sole reader; the lifecycle manager is the sole
//!   writer (subscription before the task starts, close frame after interrupt)
//! - The receive task never exits the process; it reports its outcome through
//!   a one-shot channel and the lifecycle manager decides what happens next
//! - Peer-initiated close and receive errors end the loop the same way

pub mod connection;
pub mod listener;
pub mod receiver;
pub mod types;

pub use listener::FeedListener;
pub use types::{FeedError, FeedResult, ReceiveOutcome};
