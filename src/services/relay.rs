// src/services/relay.rs
use super::completion::{ChatMessage, CompletionClient, CompletionError, CompletionRequest, Role};

/// Persona sent as the system entry of every conversation.
pub const SYSTEM_PROMPT: &str = "
You are a helpful AI assistant called Traffic AI.
If anyone asks your name, always reply: \"My name is Traffic AI.\"
Be friendly, concise, and helpful.
";

pub const FALLBACK_REPLY: &str = "No response from model.";

/// Always exactly two entries: persona, then the user's message verbatim.
pub fn build_conversation(user_message: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::new(Role::System, SYSTEM_PROMPT),
        ChatMessage::new(Role::User, user_message),
    ]
}

/// Forward one message to the model and return its reply text.
pub async fn relay(
    client: &dyn CompletionClient,
    model: &str,
    max_tokens: u32,
    user_message: &str,
) -> Result<String, CompletionError> {
    let request = CompletionRequest {
        model: model.to_string(),
        messages: build_conversation(user_message),
        max_tokens,
    };

    let response = client.complete(&request).await?;
    Ok(response
        .first_content()
        .unwrap_or(FALLBACK_REPLY)
        .to_string())
}
