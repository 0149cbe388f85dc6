//! Configuration loading from the process environment.

use thiserror::Error;
use url::Url;

use crate::config::schema::{ListenerConfig, ShutdownConfig, SubscriptionConfig};

/// Environment variable naming the streaming endpoint.
pub const ENDPOINT_VAR: &str = "WS_URL";

/// Environment variable overriding the watched account set (comma separated).
pub const ACCOUNTS_VAR: &str = "FILTER_ACCOUNTS";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is absent.
    #[error("{0} is not set")]
    Missing(&'static str),

    /// The endpoint value does not parse as a URL.
    #[error("{var} is not a valid URL: {source}")]
    InvalidEndpoint {
        var: &'static str,
        source: url::ParseError,
    },

    /// The endpoint URL uses a scheme other than ws/wss.
    #[error("{var} must use the ws or wss scheme, got '{scheme}'")]
    UnsupportedScheme { var: &'static str, scheme: String },

    /// The account override parsed to an empty set.
    #[error("{0} must name at least one account")]
    EmptyAccounts(&'static str),
}

/// Load and validate configuration from the process environment.
pub fn load_from_env() -> Result<ListenerConfig, ConfigError> {
    load_with(|var| std::env::var(var).ok())
}

/// Load configuration through the given variable lookup.
///
/// Tests inject a lookup over a fixed map instead of mutating the process
/// environment.
pub fn load_with<F>(lookup: F) -> Result<ListenerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(ENDPOINT_VAR).ok_or(ConfigError::Missing(ENDPOINT_VAR))?;
    let endpoint = parse_endpoint(ENDPOINT_VAR, &raw)?;

    let mut subscription = SubscriptionConfig::default();
    if let Some(raw) = lookup(ACCOUNTS_VAR) {
        subscription.accounts = parse_accounts(ACCOUNTS_VAR, &raw)?;
    }

    Ok(ListenerConfig {
        endpoint,
        subscription,
        shutdown: ShutdownConfig::default(),
    })
}

/// Parse the endpoint URL and check its scheme.
fn parse_endpoint(var: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidEndpoint { var, source })?;
    match url.scheme() {
        "ws" | "wss" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme {
            var,
            scheme: other.to_string(),
        }),
    }
}

/// Split a comma-separated account list, dropping empty segments.
fn parse_accounts(var: &'static str, raw: &str) -> Result<Vec<String>, ConfigError> {
    let accounts: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if accounts.is_empty() {
        return Err(ConfigError::EmptyAccounts(var));
    }
    Ok(accounts)
}
