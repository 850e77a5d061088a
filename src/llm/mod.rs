pub mod groq;

use async_trait::async_trait;
use thiserror::Error;

/// Sampling parameters are fixed for every plan request.
pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 2000;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// A system instruction plus a single user turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Invalid API key format: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Groq request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Groq API returned {status}: {body}")]
    Status {
        status: u16,
        body: String,
    },

    #[error("Groq API key is required")]
    MissingApiKey,

    #[error("No response from Groq API")]
    EmptyResponse,
}

/// Anything that can turn a prompt into raw completion text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &Prompt) -> Result<String, LlmError>;

    fn get_model(&self) -> String;
}

#[derive(Debug, Clone, Default)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub completion_model: Option<String>,
    pub base_url: Option<String>,
}
