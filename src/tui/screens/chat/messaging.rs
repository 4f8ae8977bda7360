//! Async bridges between the chat screen and the backend
//!
//! Backend failures funnel through `log_and_drop`: the transcript and any
//! optimistic rating stay as they are, the error goes to the log, and
//! nothing is retried or surfaced to the user.

use super::input::{CommandResult, parse_command};
use super::state::{ChatMessage, ChatState};
use crate::api::{ApiError, AssistantBackend, RatePayload};
use crate::text::reflow;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::warn;

/// Events from async backend calls back to the event loop
pub(super) enum ResponseEvent {
    /// Reflowed assistant reply, paired with the user input that caused it
    /// and the raw output the rating endpoint wants echoed back.
    Reply {
        user_input: String,
        raw_output: String,
        reflowed: String,
    },
    /// The send failed; the transcript is left unchanged.
    SendFailed,
}

/// Named failure policy: one warning in the log, then the error is gone.
pub(super) fn log_and_drop(context: &'static str, err: ApiError) {
    warn!(context, error = %err, "Backend call failed; ignoring");
}

/// Send a user message and report the reflowed reply
pub(super) async fn send_message<B>(
    backend: Arc<B>,
    user_input: String,
    max_line_len: usize,
    tx: mpsc::Sender<ResponseEvent>,
) where
    B: AssistantBackend + ?Sized + 'static,
{
    match backend.send_message(&user_input).await {
        Ok(raw_output) => {
            let reflowed = reflow(&raw_output, max_line_len);
            let _ = tx
                .send(ResponseEvent::Reply {
                    user_input,
                    raw_output,
                    reflowed,
                })
                .await;
        }
        Err(err) => {
            log_and_drop("send_message", err);
            let _ = tx.send(ResponseEvent::SendFailed).await;
        }
    }
}

/// Fire a rating. The displayed selection was already updated
/// optimistically, so there is nothing to report back.
pub(super) async fn submit_rating<B>(backend: Arc<B>, payload: RatePayload)
where
    B: AssistantBackend + ?Sized + 'static,
{
    if let Err(err) = backend.rate_message(payload).await {
        log_and_drop("rate_message", err);
    }
}

/// Handle command execution
pub(super) fn handle_command(state: &mut ChatState, input: &str) {
    match parse_command(input) {
        CommandResult::None => {}

        CommandResult::ShowHelp => {
            state.add_message(ChatMessage::system(
                r#"Available commands:
  /help   - Show this help
  /clear  - Clear the transcript and start over
  /exit   - Exit chat"#,
            ));
        }

        CommandResult::Clear => {
            state.clear();
            state.add_message(ChatMessage::system("Transcript cleared. Ask away."));
        }

        // Exit is intercepted by the runner before execution.
        CommandResult::Exit => {}

        CommandResult::Unknown(cmd) => {
            state.add_message(ChatMessage::system(format!(
                "Unknown command: {}. Type /help for available commands.",
                cmd
            )));
        }
    }
}
