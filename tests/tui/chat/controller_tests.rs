//! Turn lifecycle tests against a scripted backend

use async_trait::async_trait;
use coursechat::api::{ApiError, AssistantBackend, RatePayload};
use coursechat::text::reflow;
use coursechat::tui::screens::chat::{ChatState, MessageRole};
use std::sync::Mutex;

/// Backend double that replays canned replies and records rating calls.
struct ScriptedBackend {
    reply: Result<String, ()>,
    ratings: Mutex<Vec<RatePayload>>,
    fail_ratings: bool,
}

impl ScriptedBackend {
    fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            ratings: Mutex::new(Vec::new()),
            fail_ratings: false,
        }
    }

    fn failing() -> Self {
        Self {
            reply: Err(()),
            ratings: Mutex::new(Vec::new()),
            fail_ratings: true,
        }
    }
}

#[async_trait]
impl AssistantBackend for ScriptedBackend {
    async fn send_message(&self, _message: &str) -> Result<String, ApiError> {
        match &self.reply {
            Ok(reply) => Ok(reply.clone()),
            Err(()) => Err(ApiError::invalid_response(
                "http://test.invalid/chat",
                "scripted failure",
            )),
        }
    }

    async fn rate_message(&self, payload: RatePayload) -> Result<(), ApiError> {
        self.ratings.lock().unwrap().push(payload);
        if self.fail_ratings {
            return Err(ApiError::invalid_response(
                "http://test.invalid/rate",
                "scripted failure",
            ));
        }
        Ok(())
    }
}

/// Drive one full turn the way the event loop does: append the user
/// message, call the backend, then append or drop the reply.
async fn run_turn(state: &mut ChatState, backend: &ScriptedBackend, input: &str, max_len: usize) {
    if !state.begin_send(input) {
        return;
    }
    match backend.send_message(input).await {
        Ok(raw) => {
            let reflowed = reflow(&raw, max_len);
            state.complete_send(input, raw, reflowed);
        }
        Err(_) => state.fail_send(),
    }
}

#[tokio::test]
async fn test_successful_turn_appends_two_messages_in_order() {
    let backend = ScriptedBackend::replying("A derivative measures change.");
    let mut state = ChatState::new();

    run_turn(&mut state, &backend, "What is a derivative?", 300).await;

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].role, MessageRole::User);
    assert_eq!(state.messages[0].content, "What is a derivative?");
    assert_eq!(state.messages[1].role, MessageRole::Assistant);
    assert_eq!(state.messages[1].content, "A derivative measures change.");
    assert!(!state.loading);
}

#[tokio::test]
async fn test_assistant_message_stores_raw_output_and_shows_reflowed() {
    let backend = ScriptedBackend::replying("First sentence here. Second sentence follows after.");
    let mut state = ChatState::new();

    run_turn(&mut state, &backend, "Explain", 25).await;

    let reply = &state.messages[1];
    assert!(reply.content.contains('\n'));
    let exchange = reply.exchange.as_ref().unwrap();
    assert_eq!(
        exchange.assistant_output,
        "First sentence here. Second sentence follows after."
    );
    assert!(!exchange.assistant_output.contains('\n'));
}

#[tokio::test]
async fn test_failed_turn_keeps_user_message_only() {
    let backend = ScriptedBackend::failing();
    let mut state = ChatState::new();

    run_turn(&mut state, &backend, "Anyone home?", 300).await;

    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, MessageRole::User);
    assert!(!state.loading);
}

#[tokio::test]
async fn test_blank_input_never_reaches_the_backend() {
    let backend = ScriptedBackend::replying("should not appear");
    let mut state = ChatState::new();

    run_turn(&mut state, &backend, "   ", 300).await;

    assert!(state.messages.is_empty());
    assert!(!state.loading);
}

#[tokio::test]
async fn test_consecutive_turns_stay_ordered() {
    let backend = ScriptedBackend::replying("Reply.");
    let mut state = ChatState::new();

    run_turn(&mut state, &backend, "One", 300).await;
    run_turn(&mut state, &backend, "Two", 300).await;

    let roles: Vec<_> = state.messages.iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![
            MessageRole::User,
            MessageRole::Assistant,
            MessageRole::User,
            MessageRole::Assistant,
        ]
    );
}

#[tokio::test]
async fn test_rating_payload_reaches_backend() {
    let backend = ScriptedBackend::replying("Sure.");
    let mut state = ChatState::new();
    run_turn(&mut state, &backend, "Quick one", 300).await;

    state.focus_rating();
    state.focused_rating_mut().unwrap().hover_at(5);
    let payload = state.commit_rating().unwrap();

    backend.rate_message(payload.clone()).await.unwrap();

    let recorded = backend.ratings.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0], payload);
    assert_eq!(recorded[0].rating, 5);
    assert_eq!(recorded[0].user_input, "Quick one");
}

#[tokio::test]
async fn test_failed_rating_keeps_optimistic_selection() {
    let backend = ScriptedBackend::failing();
    let mut state = ChatState::new();
    state.add_message(coursechat::tui::screens::chat::ChatMessage::assistant(
        "Sure.", "Quick one", "Sure.",
    ));

    state.focus_rating();
    state.focused_rating_mut().unwrap().hover_at(3);
    let payload = state.commit_rating().unwrap();

    // The call fails but the displayed selection never rolls back.
    assert!(backend.rate_message(payload).await.is_err());
    let exchange = state.messages[0].exchange.as_ref().unwrap();
    assert_eq!(exchange.rating.selected, Some(3));
}
