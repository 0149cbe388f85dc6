//! Subscription request subsystem.

pub mod request;

pub use request::SubscribeRequest;
pub use request::{Commitment, Encoding, TransactionDetails};
pub use request::{SubscriptionOptions, TransactionFilter};
