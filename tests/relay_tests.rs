mod common;

use common::{Behavior, StubClient};
use traffic_ai::services::completion::{CompletionError, CompletionResponse, Role};
use traffic_ai::services::relay::{FALLBACK_REPLY, SYSTEM_PROMPT, build_conversation, relay};

#[test]
fn test_conversation_is_persona_then_user() {
    let conversation = build_conversation("hello");
    assert_eq!(conversation.len(), 2);
    assert_eq!(conversation[0].role, Role::System);
    assert_eq!(conversation[0].content, SYSTEM_PROMPT);
    assert_eq!(conversation[1].role, Role::User);
    assert_eq!(conversation[1].content, "hello");
}

#[test]
fn test_persona_names_traffic_ai() {
    assert!(SYSTEM_PROMPT.contains("called Traffic AI"));
    assert!(SYSTEM_PROMPT.contains("\"My name is Traffic AI.\""));
    assert!(SYSTEM_PROMPT.contains("concise"));
    assert!(SYSTEM_PROMPT.contains("friendly"));
}

#[tokio::test]
async fn test_relay_returns_first_choice() {
    let stub = StubClient::replying("Roads are clear.");
    let reply = relay(stub.as_ref(), "gpt-4o-mini", 500, "traffic?")
        .await
        .unwrap();
    assert_eq!(reply, "Roads are clear.");

    let calls = stub.calls.lock().unwrap();
    assert_eq!(calls[0].model, "gpt-4o-mini");
    assert_eq!(calls[0].max_tokens, 500);
}

#[tokio::test]
async fn test_relay_falls_back_on_empty_content() {
    let stub = StubClient::with(Behavior::Reply(CompletionResponse::with_content("")));
    let reply = relay(stub.as_ref(), "gpt-4o-mini", 500, "traffic?")
        .await
        .unwrap();
    assert_eq!(reply, FALLBACK_REPLY);
}

#[tokio::test]
async fn test_relay_propagates_upstream_error() {
    let stub = StubClient::with(Behavior::Fail(|| CompletionError::MissingApiKey));
    let err = relay(stub.as_ref(), "gpt-4o-mini", 500, "traffic?")
        .await
        .unwrap_err();
    assert!(matches!(err, CompletionError::MissingApiKey));
}
