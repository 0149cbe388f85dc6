//! Subscription request wire format.
//!
//! The remote service speaks JSON-RPC 2.0. The subscription is a single
//! `transactionSubscribe` call with two positional params: a transaction
//! filter and a stream options object. Field names are camelCase on the
//! wire.

use serde::Serialize;

/// Protocol version marker sent with the request.
const JSONRPC_VERSION: &str = "2.0";

/// Method name for the transaction notification subscription.
const SUBSCRIBE_METHOD: &str = "transactionSubscribe";

/// Confirmation depth requested for observed transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    Confirmed,
    Finalized,
}

/// Payload encoding requested for transaction data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Encoding {
    Base58,
    Base64,
    JsonParsed,
}

/// How much of each matching transaction the stream should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionDetails {
    Full,
    Signatures,
    Accounts,
    None,
}

/// Filter half of the subscription params.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilter {
    /// Whether vote transactions are included.
    pub vote: bool,

    /// Whether failed transactions are included.
    pub failed: bool,

    /// Optional signature to match; omitted from the wire when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,

    /// Accounts whose transactions the stream should include.
    pub account_include: Vec<String>,
}

/// Options half of the subscription params.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionOptions {
    pub commitment: Commitment,
    pub encoding: Encoding,
    pub transaction_details: TransactionDetails,
    pub show_rewards: bool,
    pub max_supported_transaction_version: u8,
}

/// The complete one-shot subscription request.
#[derive(Debug, Clone, Serialize)]
pub struct SubscribeRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    pub params: (TransactionFilter, SubscriptionOptions),
}

impl SubscribeRequest {
    /// Build the request from a filter and options pair.
    pub fn new(filter: TransactionFilter, options: SubscriptionOptions) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id: 1,
            method: SUBSCRIBE_METHOD,
            params: (filter, options),
        }
    }

    /// Serialize to the JSON text frame sent over the connection.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
