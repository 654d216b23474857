//! Error types for model calls and generation.

use thiserror::Error;

use crate::config::ConfigError;
use crate::resolver::ResolveError;

/// An error returned by a text model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Transport-level failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("{provider} API error {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    /// The endpoint answered without any text.
    #[error("empty response from {provider}")]
    EmptyResponse { provider: &'static str },

    /// A required API key is not set.
    #[error("{var} environment variable not set")]
    MissingApiKey { var: &'static str },

    /// A model spec names an unsupported provider.
    #[error("invalid model '{spec}': expected vllm[:name], openai[:name], or anthropic[:name]")]
    UnknownProvider { spec: String },
}

/// An error that occurred while generating one sample.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
