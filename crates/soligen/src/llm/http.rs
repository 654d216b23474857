//! HTTP-backed text models.

use std::env;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::error::ModelError;
use super::model::{Completion, TextModel};

const VLLM_BASE_URL: &str = "http://localhost:8000/v1";
const VLLM_DEFAULT_MODEL: &str = "default";
const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const OPENAI_DEFAULT_MODEL: &str = "gpt-4o-mini";
const ANTHROPIC_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
const ANTHROPIC_VERSION: &str = "2023-06-01";

const MAX_TOKENS: u32 = 4096;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

fn http_client(timeout: Duration) -> Result<Client, ModelError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// A model served behind an OpenAI-compatible `/chat/completions` endpoint.
///
/// Used both for OpenAI itself and for local vLLM servers.
pub struct ChatCompletionsModel {
    provider: &'static str,
    base_url: String,
    api_key: Option<String>,
    model: String,
    timeout: Duration,
    client: Client,
}

impl ChatCompletionsModel {
    /// A vLLM server, at `VLLM_BASE_URL` if set, else `http://localhost:8000/v1`.
    pub fn vllm(model: Option<&str>) -> Result<Self, ModelError> {
        let base_url = env::var("VLLM_BASE_URL").unwrap_or_else(|_| VLLM_BASE_URL.to_string());
        Ok(Self {
            provider: "vllm",
            base_url,
            api_key: env::var("VLLM_API_KEY").ok(),
            model: model.unwrap_or(VLLM_DEFAULT_MODEL).to_string(),
            timeout: REQUEST_TIMEOUT,
            client: http_client(REQUEST_TIMEOUT)?,
        })
    }

    /// The OpenAI API, keyed by `OPENAI_API_KEY`.
    pub fn openai_from_env(model: Option<&str>) -> Result<Self, ModelError> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| ModelError::MissingApiKey {
            var: "OPENAI_API_KEY",
        })?;
        let base_url =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| OPENAI_BASE_URL.to_string());
        Ok(Self {
            provider: "openai",
            base_url,
            api_key: Some(api_key),
            model: model.unwrap_or(OPENAI_DEFAULT_MODEL).to_string(),
            timeout: REQUEST_TIMEOUT,
            client: http_client(REQUEST_TIMEOUT)?,
        })
    }

    /// An arbitrary endpoint.
    pub fn with_base_url(
        base_url: &str,
        api_key: Option<String>,
        model: &str,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            provider: "chat-completions",
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model: model.to_string(),
            timeout: REQUEST_TIMEOUT,
            client: http_client(REQUEST_TIMEOUT)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-request timeout, covering the whole generation.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl TextModel for ChatCompletionsModel {
    fn complete(&self, prompt: &str) -> Result<Completion, ModelError> {
        #[derive(Deserialize)]
        struct Message {
            content: Option<String>,
        }
        #[derive(Deserialize)]
        struct Choice {
            message: Message,
        }
        #[derive(Deserialize)]
        struct ApiResponse {
            choices: Vec<Choice>,
        }

        debug!(provider = self.provider, model = %self.model, "sending completion request");
        let mut request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&json!({
                "model": &self.model,
                "max_tokens": MAX_TOKENS,
                "messages": [{"role": "user", "content": prompt}]
            }));
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }
        let response = request.send()?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(ModelError::Status {
                provider: self.provider,
                status,
                body,
            });
        }

        let api_response: ApiResponse = response.json()?;
        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(Completion::new)
            .ok_or(ModelError::EmptyResponse {
                provider: self.provider,
            })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Anthropic messages API client.
pub struct AnthropicModel {
    api_key: String,
    model: String,
    timeout: Duration,
    client: Client,
}

impl AnthropicModel {
    /// Create a client with the given API key and model.
    pub fn new(api_key: String, model: Option<&str>) -> Result<Self, ModelError> {
        Ok(Self {
            api_key,
            model: model.unwrap_or(ANTHROPIC_DEFAULT_MODEL).to_string(),
            timeout: REQUEST_TIMEOUT,
            client: http_client(REQUEST_TIMEOUT)?,
        })
    }

    /// Per-request timeout, covering the whole generation.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Create from `ANTHROPIC_API_KEY`.
    pub fn from_env(model: Option<&str>) -> Result<Self, ModelError> {
        let api_key = env::var("ANTHROPIC_API_KEY").map_err(|_| ModelError::MissingApiKey {
            var: "ANTHROPIC_API_KEY",
        })?;
        Self::new(api_key, model)
    }
}

impl TextModel for AnthropicModel {
    fn complete(&self, prompt: &str) -> Result<Completion, ModelError> {
        #[derive(Deserialize)]
        struct ContentBlock {
            text: Option<String>,
        }
        #[derive(Deserialize)]
        struct ApiResponse {
            content: Vec<ContentBlock>,
        }

        debug!(provider = "anthropic", model = %self.model, "sending completion request");
        let response = self
            .client
            .post(ANTHROPIC_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&json!({
                "model": &self.model,
                "max_tokens": MAX_TOKENS,
                "messages": [{"role": "user", "content": prompt}]
            }))
            .send()?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(ModelError::Status {
                provider: "anthropic",
                status,
                body,
            });
        }

        let api_response: ApiResponse = response.json()?;
        api_response
            .content
            .into_iter()
            .find_map(|block| block.text)
            .map(Completion::new)
            .ok_or(ModelError::EmptyResponse {
                provider: "anthropic",
            })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
