//! Provider-specific error types.

use thiserror::Error;

/// Errors that can occur when calling an upstream travel API.
///
/// Network, HTTP-status, and decode failures all collapse into `Upstream`;
/// the adapters do not distinguish a timeout from a 4xx from a 5xx.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The adapter's API key is absent or empty. Checked before any network
    /// I/O; never retried.
    #[error("{provider} API key is required. Please configure {env_var} environment variable.")]
    MissingApiKey {
        provider: &'static str,
        env_var: &'static str,
    },

    /// A network or parse failure from the upstream API.
    #[error("{context}: {message}")]
    Upstream { context: String, message: String },
}

impl ProviderError {
    /// Create an upstream error wrapping the original failure message.
    pub fn upstream(context: impl Into<String>, message: impl ToString) -> Self {
        Self::Upstream {
            context: context.into(),
            message: message.to_string(),
        }
    }
}
