//! The text model abstraction and model selection.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use super::error::ModelError;
use super::http::{AnthropicModel, ChatCompletionsModel};

/// A model reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
}

impl Completion {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A synchronous prompt-to-text model.
///
/// Timeouts and retries are the implementation's business.
pub trait TextModel {
    /// Complete a prompt.
    fn complete(&self, prompt: &str) -> Result<Completion, ModelError>;

    /// Model name, for logging.
    fn model_name(&self) -> &str;
}

/// Supported model providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// A local vLLM server speaking the OpenAI chat completions protocol.
    Vllm,
    OpenAi,
    Anthropic,
}

impl Display for Provider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Provider::Vllm => write!(f, "vllm"),
            Provider::OpenAi => write!(f, "openai"),
            Provider::Anthropic => write!(f, "anthropic"),
        }
    }
}

/// A provider plus optional model name, written `provider[:name]`.
///
/// # Example
///
/// ```
/// use soligen::llm::{ModelSpec, Provider};
///
/// let spec: ModelSpec = "openai:gpt-4o".parse().unwrap();
/// assert_eq!(spec.provider, Provider::OpenAi);
/// assert_eq!(spec.model.as_deref(), Some("gpt-4o"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSpec {
    pub provider: Provider,
    pub model: Option<String>,
}

impl ModelSpec {
    /// Parse a `provider[:name]` string.
    pub fn parse(spec: &str) -> Result<Self, ModelError> {
        let (provider, model) = match spec.split_once(':') {
            Some((provider, model)) => (provider, Some(model)),
            None => (spec, None),
        };
        let provider = match provider.trim().to_ascii_lowercase().as_str() {
            "vllm" => Provider::Vllm,
            "openai" => Provider::OpenAi,
            "anthropic" => Provider::Anthropic,
            _ => {
                return Err(ModelError::UnknownProvider {
                    spec: spec.to_string(),
                });
            }
        };
        let model = model
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(ToString::to_string);
        Ok(Self { provider, model })
    }

    /// Construct a client for this spec, reading API keys from the
    /// environment.
    pub fn build(&self) -> Result<Box<dyn TextModel>, ModelError> {
        let model = self.model.as_deref();
        Ok(match self.provider {
            Provider::Vllm => Box::new(ChatCompletionsModel::vllm(model)?),
            Provider::OpenAi => Box::new(ChatCompletionsModel::openai_from_env(model)?),
            Provider::Anthropic => Box::new(AnthropicModel::from_env(model)?),
        })
    }
}

impl FromStr for ModelSpec {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
