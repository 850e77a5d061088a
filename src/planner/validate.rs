use crate::error::PlannerError;
use crate::models::chat::ChatRequest;

pub const MAX_MESSAGES: usize = 50;
/// Applies to both `role` and `content` of every message.
pub const MAX_CONTENT_CHARS: usize = 2000;

/// Rejects requests that should never reach the completion service.
pub fn validate_request(request: &ChatRequest) -> Result<(), PlannerError> {
    if request.messages.is_empty() {
        return Err(PlannerError::Validation("At least one message required".to_string()));
    }
    if request.messages.len() > MAX_MESSAGES {
        return Err(PlannerError::Validation("Too many messages".to_string()));
    }

    if let Some(index) = request.messages
        .iter()
        .position(|msg| {
            msg.role.chars().count() > MAX_CONTENT_CHARS ||
                msg.content.chars().count() > MAX_CONTENT_CHARS
        })
    {
        return Err(
            PlannerError::Validation(
                format!("Message {} exceeds {} characters", index + 1, MAX_CONTENT_CHARS)
            )
        );
    }

    if !request.messages.iter().any(|msg| msg.is_user()) {
        return Err(PlannerError::Validation("Please describe your project first".to_string()));
    }

    Ok(())
}
