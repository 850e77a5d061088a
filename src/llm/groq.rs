use async_trait::async_trait;
use log::{ debug, info };
use reqwest::{ Client as HttpClient, header::{ HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION } };
use serde::{ Deserialize, Serialize };

use super::{ CompletionClient, LlmConfig, LlmError, Prompt };
use super::{ DEFAULT_BASE_URL, DEFAULT_MODEL, MAX_TOKENS, TEMPERATURE };

pub struct GroqChatClient {
    http: HttpClient,
    model: String,
    base_url: String,
}

#[derive(Serialize, Deserialize)]
struct GroqMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct GroqRequest {
    messages: Vec<GroqMessage>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct GroqResponse {
    choices: Vec<GroqChoice>,
}

#[derive(Deserialize)]
struct GroqChoice {
    message: GroqResponseMessage,
}

#[derive(Deserialize)]
struct GroqResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl GroqChatClient {
    pub fn new(
        api_key: String,
        model: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, LlmError> {
        let chat_model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", api_key))?);

        let http = HttpClient::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            model: chat_model,
            base_url: api_url,
        })
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let api_key = config.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(LlmError::MissingApiKey)?;

        Self::new(
            api_key,
            config.completion_model.clone(),
            config.base_url.clone(),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionClient for GroqChatClient {
    async fn complete(&self, prompt: &Prompt) -> Result<String, LlmError> {
        let url = self.endpoint();

        let req = GroqRequest {
            messages: vec![
                GroqMessage {
                    role: "system".to_string(),
                    content: prompt.system.clone(),
                },
                GroqMessage {
                    role: "user".to_string(),
                    content: prompt.user.clone(),
                }
            ],
            model: self.model.clone(),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        info!("Sending completion request to {} (model {})", url, self.model);

        let resp = self.http.post(&url).json(&req).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::Status { status: status.as_u16(), body });
        }

        let resp = resp.json::<GroqResponse>().await?;

        let content = resp.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(LlmError::EmptyResponse)?;

        debug!("Groq raw completion: {}", content);

        Ok(content.trim().to_string())
    }

    fn get_model(&self) -> String {
        self.model.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let client = GroqChatClient::new(
            "gsk_test".into(),
            None,
            Some("http://localhost:9999/openai/v1/".into())
        ).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:9999/openai/v1/chat/completions");
        assert_eq!(client.get_model(), DEFAULT_MODEL);
    }

    #[test]
    fn from_config_requires_key() {
        let config = LlmConfig {
            api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(GroqChatClient::from_config(&config), Err(LlmError::MissingApiKey)));
    }

    #[test]
    fn rejects_key_that_is_not_a_header_value() {
        let err = GroqChatClient::new("bad\nkey".into(), None, None).err().unwrap();
        assert!(matches!(err, LlmError::InvalidApiKey(_)));
    }
}
