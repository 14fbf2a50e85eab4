use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::LLMConfig;
use crate::types::{AppError, AppResult, LLMMessage, LLMProvider, LLMRequest, LLMResponse};

#[async_trait]
pub trait LLMAdapter: Send + Sync {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse>;
}

/// A configured chat model: one adapter plus the sampling settings every
/// request is sent with.
pub struct LLM {
    adapter: Box<dyn LLMAdapter>,
    provider_name: String,
    model: String,
    temperature: f32,
    max_tokens: Option<u32>,
}

impl LLM {
    pub fn new(adapter: Box<dyn LLMAdapter>, config: &LLMConfig) -> Self {
        Self {
            adapter,
            provider_name: config.provider.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// Build the adapter named by `config.provider`.
    pub fn from_config(config: &LLMConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let adapter: Box<dyn LLMAdapter> = match LLMProvider::from_name(&config.provider)? {
            LLMProvider::Ollama => Box::new(crate::llm::ollama::OllamaAdapter::with_client(
                client,
                &config.base_url,
            )),
            LLMProvider::OpenAI => Box::new(crate::llm::openai::OpenAICompatAdapter::with_client(
                client,
                &config.base_url,
                &config.api_key,
            )),
        };

        Ok(Self::new(adapter, config))
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        self.adapter.create_chat_completion(request).await
    }

    /// Send `prompt` as a single user message and return the completion text.
    pub async fn complete(&self, prompt: &str) -> AppResult<String> {
        let request = LLMRequest {
            model: self.model.clone(),
            messages: vec![LLMMessage::user(prompt)],
            max_tokens: self.max_tokens,
            temperature: Some(self.temperature),
        };

        let response = self.create_chat_completion(&request).await?;

        debug!(
            provider = %self.provider_name,
            model = %self.model,
            finish_reason = %response.finish_reason,
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            "Completion received"
        );

        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::types::TokenUsage;
    use std::sync::{Arc, Mutex};

    struct RecordingAdapter {
        seen: Arc<Mutex<Vec<LLMRequest>>>,
    }

    #[async_trait]
    impl LLMAdapter for RecordingAdapter {
        async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(LLMResponse {
                content: "ok".to_string(),
                finish_reason: "stop".to_string(),
                usage: TokenUsage::default(),
            })
        }
    }

    #[tokio::test]
    async fn test_complete_sends_single_user_message() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let config = Config::default();
        let llm = LLM::new(Box::new(RecordingAdapter { seen: seen.clone() }), &config.llm);

        let content = llm.complete("Rate this document").await.unwrap();
        assert_eq!(content, "ok");

        let requests = seen.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "llama3.2:3b");
        assert_eq!(requests[0].messages, vec![LLMMessage::user("Rate this document")]);
        assert_eq!(requests[0].temperature, Some(0.2));
    }

    #[test]
    fn test_from_config_rejects_unknown_provider() {
        let mut config = Config::default();
        config.llm.provider = "telegraph".to_string();
        assert!(matches!(LLM::from_config(&config.llm), Err(AppError::Config(_))));
    }

    #[test]
    fn test_from_config_builds_known_providers() {
        let mut config = Config::default();
        let llm = LLM::from_config(&config.llm).unwrap();
        assert_eq!(llm.provider_name(), "ollama");

        config.llm.provider = "openai".to_string();
        config.llm.model = "gpt-4o-mini".to_string();
        let llm = LLM::from_config(&config.llm).unwrap();
        assert_eq!(llm.provider_name(), "openai");
        assert_eq!(llm.model(), "gpt-4o-mini");
    }
}
