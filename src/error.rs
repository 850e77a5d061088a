use thiserror::Error;

use crate::llm::LlmError;

/// Every way a plan request can fail. The HTTP layer maps each variant to a
/// status code; nothing is retried and no partial plan is ever returned.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Configuration(String),

    #[error("Error generating plan: {0}")]
    Upstream(#[from] LlmError),

    #[error("Failed to parse AI response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Error generating plan: {0}")]
    Structure(#[source] serde_json::Error),
}

impl PlannerError {
    /// Client errors are the caller's fault; everything else is ours or upstream's.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PlannerError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_detail_carries_parser_message() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let detail = PlannerError::Decode(err).to_string();
        assert!(detail.starts_with("Failed to parse AI response: "), "{}", detail);
    }

    #[test]
    fn only_validation_is_a_client_error() {
        assert!(PlannerError::Validation("x".into()).is_client_error());
        assert!(!PlannerError::Configuration("x".into()).is_client_error());
        assert!(!PlannerError::Upstream(LlmError::EmptyResponse).is_client_error());
    }

    #[test]
    fn upstream_detail_embeds_upstream_message() {
        let err = PlannerError::from(LlmError::Status {
            status: 503,
            body: "over capacity".into(),
        });
        assert_eq!(
            err.to_string(),
            "Error generating plan: Groq API returned 503: over capacity"
        );
    }
}
