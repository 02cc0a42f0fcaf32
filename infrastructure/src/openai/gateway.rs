//! HTTP adapter for the chat completions endpoint.

use super::classify::{classify_status, classify_transport};
use super::types::{ChatCompletionRequest, ChatCompletionResponse, ResponseFormat};
use crate::config::FileOpenAiConfig;
use async_trait::async_trait;
use boardroom_application::config::CompletionParams;
use boardroom_application::ports::chat_gateway::{ChatGateway, GatewayError};
use boardroom_domain::Message;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// [`ChatGateway`] adapter for an OpenAI-compatible API.
pub struct OpenAiChatGateway {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiChatGateway {
    /// Build the adapter from provider configuration.
    ///
    /// A missing API key is replaced by a placeholder (already logged by
    /// [`FileOpenAiConfig::resolve_api_key`]); requests then fail remotely.
    pub fn from_config(config: &FileOpenAiConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| GatewayError::Unknown(e.to_string()))?;

        Ok(Self {
            client,
            api_key: config.resolve_api_key(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn request(
        &self,
        messages: &[Message],
        params: &CompletionParams,
        response_format: Option<ResponseFormat>,
    ) -> Result<String, GatewayError> {
        let request = ChatCompletionRequest {
            model: &params.model,
            messages,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            response_format,
        };

        debug!(model = %params.model, messages = messages.len(), "POST /v1/chat/completions");

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(status, &body));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Parsing(e.to_string()))?;

        Ok(parsed.into_content())
    }
}

#[async_trait]
impl ChatGateway for OpenAiChatGateway {
    async fn complete(
        &self,
        messages: &[Message],
        params: &CompletionParams,
    ) -> Result<String, GatewayError> {
        self.request(messages, params, None).await
    }

    async fn complete_json(
        &self,
        messages: &[Message],
        params: &CompletionParams,
    ) -> Result<serde_json::Value, GatewayError> {
        let text = self
            .request(messages, params, Some(ResponseFormat::json_object()))
            .await?;

        serde_json::from_str(&text)
            .map_err(|e| GatewayError::Parsing(format!("{e}\nRaw response: {text}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_creation_with_placeholder_key() {
        let config = FileOpenAiConfig {
            api_key_env: "BOARDROOM_UNSET_KEY".to_string(),
            ..Default::default()
        };
        let gateway = OpenAiChatGateway::from_config(&config).unwrap();
        assert_eq!(gateway.api_key, crate::config::PLACEHOLDER_API_KEY);
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let config = FileOpenAiConfig {
            base_url: "https://api.openai.com/".to_string(),
            ..Default::default()
        };
        let gateway = OpenAiChatGateway::from_config(&config).unwrap();
        assert_eq!(gateway.base_url, "https://api.openai.com");
    }
}
