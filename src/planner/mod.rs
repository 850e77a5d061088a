pub mod decode;
pub mod extract;
pub mod prompt;
pub mod validate;

use crate::error::PlannerError;
use crate::llm::CompletionClient;
use crate::models::chat::ChatRequest;
use crate::models::plan::ProjectPlan;

use log::{ debug, error, info, warn };
use std::sync::Arc;
use uuid::Uuid;

pub use decode::decode_plan;
pub use extract::extract_json_payload;
pub use prompt::{ build_prompt, render_transcript, SYSTEM_PROMPT };
pub use validate::{ validate_request, MAX_CONTENT_CHARS, MAX_MESSAGES };

/// Turns a chat transcript into a project plan by way of the completion
/// service. Holds no per-request state; one instance serves every request.
#[derive(Clone)]
pub struct Planner {
    chat_client: Option<Arc<dyn CompletionClient>>,
}

impl Planner {
    /// `None` means no API key was configured: the server still runs but
    /// every valid plan request fails with a configuration error.
    pub fn new(chat_client: Option<Arc<dyn CompletionClient>>) -> Self {
        Self { chat_client }
    }

    pub fn is_configured(&self) -> bool {
        self.chat_client.is_some()
    }

    pub async fn generate_plan(&self, request: &ChatRequest) -> Result<ProjectPlan, PlannerError> {
        let request_id = Uuid::new_v4();
        info!("[{}] Plan request with {} message(s)", request_id, request.messages.len());

        if let Err(e) = validate_request(request) {
            warn!("[{}] Rejected plan request: {}", request_id, e);
            return Err(e);
        }

        let chat_client = match &self.chat_client {
            Some(client) => client,
            None => {
                warn!("[{}] GROQ_API_KEY not configured", request_id);
                return Err(PlannerError::Configuration("GROQ_API_KEY not configured".to_string()));
            }
        };

        let prompt = build_prompt(&request.messages);
        debug!("[{}] User prompt:\n{}", request_id, prompt.user);

        let raw = chat_client.complete(&prompt).await.map_err(|e| {
            error!("[{}] Completion failed ({}): {}", request_id, chat_client.get_model(), e);
            PlannerError::from(e)
        })?;

        let payload = extract_json_payload(&raw);
        let plan = decode_plan(payload).map_err(|e| {
            error!("[{}] {}", request_id, e);
            debug!("[{}] Undecodable completion: {}", request_id, raw);
            e
        })?;

        info!(
            "[{}] Generated plan '{}' with {} task(s) over {} day(s)",
            request_id,
            plan.project_name,
            plan.tasks.len(),
            plan.total_duration
        );

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{ LlmError, Prompt };
    use crate::models::chat::ChatMessage;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct CannedClient {
        reply: Result<String, ()>,
        seen: Mutex<Vec<Prompt>>,
    }

    impl CannedClient {
        fn ok(reply: &str) -> Arc<Self> {
            Arc::new(Self { reply: Ok(reply.to_string()), seen: Mutex::new(Vec::new()) })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self { reply: Err(()), seen: Mutex::new(Vec::new()) })
        }
    }

    #[async_trait]
    impl CompletionClient for CannedClient {
        async fn complete(&self, prompt: &Prompt) -> Result<String, LlmError> {
            self.seen.lock().unwrap().push(prompt.clone());
            self.reply.clone().map_err(|_| LlmError::Status {
                status: 500,
                body: "boom".into(),
            })
        }

        fn get_model(&self) -> String {
            "canned".into()
        }
    }

    fn user_request(content: &str) -> ChatRequest {
        ChatRequest { messages: vec![ChatMessage::new("user", content)] }
    }

    const PLAN: &str =
        r#"{"project_name":"Site","total_duration":14,"tasks":[{"id":1,"name":"Build","owner":"Developer","start_day":0,"duration":14,"dependencies":[]}]}"#;

    #[tokio::test]
    async fn fenced_completion_becomes_plan() {
        let client = CannedClient::ok(&format!("```json\n{}\n```", PLAN));
        let planner = Planner::new(Some(client.clone() as Arc<dyn CompletionClient>));

        let plan = planner.generate_plan(&user_request("Build a 2-week portfolio site")).await.unwrap();
        assert_eq!(plan.project_name, "Site");

        let seen = client.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].user.contains("user: Build a 2-week portfolio site"));
    }

    #[tokio::test]
    async fn invalid_request_never_reaches_client() {
        let client = CannedClient::ok(PLAN);
        let planner = Planner::new(Some(client.clone() as Arc<dyn CompletionClient>));

        let err = planner.generate_plan(&ChatRequest { messages: vec![] }).await.unwrap_err();
        assert!(err.is_client_error());
        assert!(client.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_client_is_a_configuration_error() {
        let planner = Planner::new(None);
        assert!(!planner.is_configured());

        let err = planner.generate_plan(&user_request("Plan a wedding")).await.unwrap_err();
        assert!(matches!(err, PlannerError::Configuration(_)));
        assert_eq!(err.to_string(), "GROQ_API_KEY not configured");
    }

    #[tokio::test]
    async fn upstream_failure_propagates() {
        let planner = Planner::new(Some(CannedClient::failing() as Arc<dyn CompletionClient>));
        let err = planner.generate_plan(&user_request("Plan a wedding")).await.unwrap_err();
        assert!(matches!(err, PlannerError::Upstream(_)));
    }

    #[tokio::test]
    async fn malformed_completion_is_a_decode_error() {
        let planner = Planner::new(Some(CannedClient::ok("Sure! {\"project_name\": ") as Arc<dyn CompletionClient>));
        let err = planner.generate_plan(&user_request("Plan a wedding")).await.unwrap_err();
        assert!(matches!(err, PlannerError::Decode(_)));
    }
}
