use crate::config::Config;
use crate::error::AnalysisError;
use crate::providers::{ModelSettings, api_error, build_provider_client, traits::Provider};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const PROVIDER_NAME: &str = "OpenRouter";

pub struct OpenRouterProvider {
    /// Pre-computed `"Bearer <key>"` header value (avoids `format!` per request).
    cached_auth_header: Option<String>,
    /// Pre-computed chat completions URL.
    cached_chat_url: String,
    referer: String,
    title: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenRouterProvider {
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        let base_url = base_url.trim_end_matches('/');
        let cached_chat_url = if base_url.ends_with("chat/completions") {
            base_url.to_string()
        } else {
            format!("{base_url}/chat/completions")
        };

        Self {
            cached_auth_header: api_key.map(|k| format!("Bearer {k}")),
            cached_chat_url,
            referer: String::new(),
            title: String::new(),
            client: build_provider_client(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.remote.base_url, config.api_key())
            .with_attribution(&config.remote.referer, &config.remote.title)
    }

    /// Set the `HTTP-Referer` / `X-Title` headers OpenRouter uses for app attribution.
    pub fn with_attribution(mut self, referer: &str, title: &str) -> Self {
        self.referer = referer.to_string();
        self.title = title.to_string();
        self
    }

    fn build_request(
        system_prompt: Option<&str>,
        message: &str,
        settings: &ModelSettings,
    ) -> ChatRequest {
        let capacity = if system_prompt.is_some() { 2 } else { 1 };
        let mut messages = Vec::with_capacity(capacity);

        if let Some(sys) = system_prompt {
            messages.push(Message {
                role: "system",
                content: sys.to_string(),
            });
        }

        messages.push(Message {
            role: "user",
            content: message.to_string(),
        });

        ChatRequest {
            model: settings.model.clone(),
            messages,
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        }
    }

    fn extract_text(chat_response: ChatResponse) -> Result<String, AnalysisError> {
        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AnalysisError::MalformedResponse("No response from OpenRouter".into()))
    }

    fn transport(error: &reqwest::Error) -> AnalysisError {
        AnalysisError::Transport {
            provider: PROVIDER_NAME.to_string(),
            message: error.to_string(),
        }
    }

    async fn call_api(&self, request: &ChatRequest) -> Result<ChatResponse, AnalysisError> {
        let auth_header =
            self.cached_auth_header
                .as_ref()
                .ok_or_else(|| AnalysisError::MissingCredential {
                    provider: PROVIDER_NAME.to_string(),
                })?;

        let mut builder = self
            .client
            .post(&self.cached_chat_url)
            .header("Authorization", auth_header);
        if !self.referer.is_empty() {
            builder = builder.header("HTTP-Referer", &self.referer);
        }
        if !self.title.is_empty() {
            builder = builder.header("X-Title", &self.title);
        }

        let response = builder
            .json(request)
            .send()
            .await
            .map_err(|e| Self::transport(&e))?;

        if !response.status().is_success() {
            return Err(api_error(PROVIDER_NAME, response).await);
        }

        let body = response.text().await.map_err(|e| Self::transport(&e))?;
        serde_json::from_str(&body).map_err(|e| {
            AnalysisError::MalformedResponse(format!("OpenRouter response envelope: {e}"))
        })
    }
}

#[async_trait]
impl Provider for OpenRouterProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn chat_with_system(
        &self,
        system_prompt: Option<&str>,
        message: &str,
        settings: &ModelSettings,
    ) -> Result<String, AnalysisError> {
        let request = Self::build_request(system_prompt, message, settings);
        let chat_response = self.call_api(&request).await?;
        Self::extract_text(chat_response)
    }
}
