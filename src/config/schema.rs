//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the listener.
//! Values are sourced from the process environment by the loader; everything
//! except the endpoint has a default.

use url::Url;

use crate::subscription::request::{
    Commitment, Encoding, SubscribeRequest, SubscriptionOptions, TransactionDetails,
    TransactionFilter,
};

/// Account watched when no override is configured: the Raydium AMM v4
/// program on Solana mainnet.
pub const DEFAULT_WATCHED_ACCOUNT: &str = "675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8";

/// Root configuration for the feed listener.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Streaming endpoint (ws:// or wss://).
    pub endpoint: Url,

    /// Subscription filter and stream options.
    pub subscription: SubscriptionConfig,

    /// Shutdown behavior.
    pub shutdown: ShutdownConfig,
}

impl ListenerConfig {
    /// Create a configuration for the given endpoint with default
    /// subscription and shutdown settings.
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            subscription: SubscriptionConfig::default(),
            shutdown: ShutdownConfig::default(),
        }
    }
}

/// Subscription filter and stream options.
#[derive(Debug, Clone)]
pub struct SubscriptionConfig {
    /// Accounts whose transactions the feed should carry. Never empty.
    pub accounts: Vec<String>,

    /// Confirmation depth for observed transactions.
    pub commitment: Commitment,

    /// Payload encoding for transaction data.
    pub encoding: Encoding,

    /// Detail level carried per notification.
    pub transaction_details: TransactionDetails,

    /// Carry block rewards with each notification.
    pub show_rewards: bool,

    /// Highest transaction version the listener accepts.
    pub max_supported_transaction_version: u8,
}

impl Default for SubscriptionConfig {
    fn default() -> Self {
        Self {
            accounts: vec![DEFAULT_WATCHED_ACCOUNT.to_string()],
            commitment: Commitment::Processed,
            encoding: Encoding::Base64,
            transaction_details: TransactionDetails::Signatures,
            show_rewards: true,
            max_supported_transaction_version: 0,
        }
    }
}

impl SubscriptionConfig {
    /// Build the one-shot subscription request this configuration describes.
    ///
    /// Vote and failed transactions are always excluded; the stream carries
    /// only transactions touching the watched accounts.
    pub fn request(&self) -> SubscribeRequest {
        SubscribeRequest::new(
            TransactionFilter {
                vote: false,
                failed: false,
                signature: None,
                account_include: self.accounts.clone(),
            },
            SubscriptionOptions {
                commitment: self.commitment,
                encoding: self.encoding,
                transaction_details: self.transaction_details,
                show_rewards: self.show_rewards,
                max_supported_transaction_version: self.max_supported_transaction_version,
            },
        )
    }
}

/// Shutdown behavior configuration.
#[derive(Debug, Clone)]
pub struct ShutdownConfig {
    /// How long to wait for the peer to acknowledge the close frame, in
    /// milliseconds.
    pub close_grace_ms: u64,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            close_grace_ms: 1000,
        }
    }
}
