//! OpenAI-compatible adapter for text generation.
//!
//! Supports OpenAI API, Azure OpenAI, and local Ollama instances.
//! Implements `TextGenPort` over the chat completions endpoint.

use crate::domain::DomainError;
use crate::ports::TextGenPort;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// OpenAI-compatible text-generation adapter.
///
/// Can be configured to work with:
/// - OpenAI API (api.openai.com)
/// - Azure OpenAI
/// - Ollama (localhost)
/// - Any OpenAI-compatible API
///
/// The HTTP client carries no request timeout; a hung service hangs the
/// caller. The key is never validated locally, a bad credential surfaces
/// as an API error on the first call.
pub struct OpenAiTextGen {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl OpenAiTextGen {
    /// Create a new OpenAI adapter.
    ///
    /// # Arguments
    /// * `api_url` - API endpoint (e.g., "https://api.openai.com/v1/chat/completions")
    /// * `api_key` - API key (can be empty for local Ollama)
    /// * `model` - Model name (e.g., "gpt-4o-mini", "llama3.2")
    /// * `temperature` - Sampling temperature
    pub fn new(api_url: String, api_key: String, model: String, temperature: f32) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            model,
            temperature,
        }
    }

    /// Extract the first choice's content from a parsed API response.
    fn first_choice(response: ChatResponse) -> Result<String, DomainError> {
        response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| DomainError::TextGen("No response choices returned".to_string()))
    }
}

/// OpenAI API request structure.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// OpenAI API response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: String,
}

#[async_trait::async_trait]
impl TextGenPort for OpenAiTextGen {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        info!(prompt_len = prompt.len(), model = %self.model, "sending prompt to API");

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::TextGen(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "API returned error");
            return Err(DomainError::TextGen(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DomainError::TextGen(format!("Failed to parse API response: {}", e)))?;

        // Return the model's text as-is. No trimming or post-processing;
        // the use case owns what happens to it.
        let content = Self::first_choice(chat_response)?;
        debug!(raw_len = content.len(), "received API response");

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_choice_extracts_content() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "  raw text \n"}}]}"#,
        )
        .unwrap();
        // Content comes back untouched, whitespace included
        assert_eq!(
            OpenAiTextGen::first_choice(response).unwrap(),
            "  raw text \n"
        );
    }

    #[test]
    fn test_first_choice_empty_is_error() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(OpenAiTextGen::first_choice(response).is_err());
    }

    #[test]
    fn test_request_shape() {
        let request = ChatRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "ping".to_string(),
            }],
            temperature: 0.7,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "ping");
    }
}
