use anyhow::Result;
use serde::Deserialize;
use std::env;

/// Guidelines pre-filled in the control panel.
pub const DEFAULT_GUIDELINES: &str = "\
1. Grammar and Spelling: Ensure all text is free of grammatical errors and spelling mistakes.
2. Clarity and Conciseness: Sentences should be clear, concise, and easy to understand. Avoid jargon where possible.
3. Sentence Structure: Vary sentence structure to maintain reader engagement. Avoid run-on sentences.
4. Active Voice: Use active voice more than passive voice for more direct and impactful writing.
5. Tone: Maintain a professional and formal tone throughout the document.
";

/// Used by `/modify/` when the `request` form field is omitted.
pub const DEFAULT_MODIFICATION_REQUEST: &str = "Please fix all issues found.";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LLMConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LLMConfig {
    pub provider: String,
    pub base_url: String,
    pub model: String,
    pub api_key: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    pub timeout_secs: u64,
}

/// Upper bounds applied before anything reaches the model.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    pub max_upload_bytes: usize,
    pub max_document_chars: usize,
    pub max_guidelines_chars: usize,
    pub max_request_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 8000,
                host: "0.0.0.0".to_string(),
                cors_allowed_origins: vec!["*".to_string()],
            },
            llm: LLMConfig {
                provider: "ollama".to_string(),
                base_url: "http://localhost:11434".to_string(),
                model: "llama3.2:3b".to_string(),
                api_key: String::new(),
                temperature: 0.2,
                max_tokens: None,
                timeout_secs: 300,
            },
            limits: LimitsConfig {
                max_upload_bytes: 20 * 1024 * 1024,
                max_document_chars: 200_000,
                max_guidelines_chars: 20_000,
                max_request_chars: 10_000,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| defaults.server.port.to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or(defaults.server.host),
                cors_allowed_origins: env::var("ALLOWED_ORIGINS")
                    .map(|origins| {
                        origins
                            .split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect()
                    })
                    .unwrap_or(defaults.server.cors_allowed_origins),
            },
            llm: LLMConfig {
                provider: env::var("LLM_PROVIDER").unwrap_or(defaults.llm.provider),
                base_url: env::var("LLM_BASE_URL").unwrap_or(defaults.llm.base_url),
                model: env::var("LLM_MODEL").unwrap_or(defaults.llm.model),
                api_key: env::var("LLM_API_KEY").unwrap_or_default(),
                temperature: env::var("LLM_TEMPERATURE")
                    .unwrap_or_else(|_| defaults.llm.temperature.to_string())
                    .parse()?,
                max_tokens: env::var("LLM_MAX_TOKENS")
                    .ok()
                    .map(|v| v.parse())
                    .transpose()?,
                timeout_secs: env::var("LLM_TIMEOUT_SECS")
                    .unwrap_or_else(|_| defaults.llm.timeout_secs.to_string())
                    .parse()?,
            },
            limits: LimitsConfig {
                max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                    .unwrap_or_else(|_| defaults.limits.max_upload_bytes.to_string())
                    .parse()?,
                max_document_chars: env::var("MAX_DOCUMENT_CHARS")
                    .unwrap_or_else(|_| defaults.limits.max_document_chars.to_string())
                    .parse()?,
                max_guidelines_chars: env::var("MAX_GUIDELINES_CHARS")
                    .unwrap_or_else(|_| defaults.limits.max_guidelines_chars.to_string())
                    .parse()?,
                max_request_chars: env::var("MAX_REQUEST_CHARS")
                    .unwrap_or_else(|_| defaults.limits.max_request_chars.to_string())
                    .parse()?,
            },
        })
    }
}
