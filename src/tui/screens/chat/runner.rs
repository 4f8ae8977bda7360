//! Chat runner - main event loop coordinator

use super::input::{CommandResult, InputAction, handle_input, parse_command};
use super::messaging::{ResponseEvent, handle_command, send_message, submit_rating};
use super::state::{ChatMessage, ChatState};
use super::ui::ChatUI;
use crate::api::AssistantBackend;
use crate::config::AppConfig;
use crate::tui::terminal::{Tui, init_terminal, restore_terminal};
use crossterm::event;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Result of a chat session
pub enum ChatResult {
    Exit,
}

/// Run the TUI chat interface
pub async fn run_chat<B>(backend: Arc<B>, config: AppConfig) -> Result<ChatResult, Box<dyn Error>>
where
    B: AssistantBackend + 'static,
{
    let mut terminal = init_terminal()?;
    let mut state = ChatState::new();
    state.add_message(ChatMessage::system(
        "Welcome! Ask the course assistant anything and press Enter. \
         Tab rates the last reply; /help lists commands.",
    ));

    let result = run_chat_loop(&mut terminal, &mut state, backend, &config).await;

    restore_terminal()?;
    result
}

/// Internal chat loop
async fn run_chat_loop<B>(
    terminal: &mut Tui,
    state: &mut ChatState,
    backend: Arc<B>,
    config: &AppConfig,
) -> Result<ChatResult, Box<dyn Error>>
where
    B: AssistantBackend + 'static,
{
    let (response_tx, mut response_rx) = mpsc::channel::<ResponseEvent>(10);

    loop {
        terminal.draw(|frame| {
            ChatUI::render(frame, state, &config.base_url);
        })?;

        while let Ok(event) = response_rx.try_recv() {
            match event {
                ResponseEvent::Reply {
                    user_input,
                    raw_output,
                    reflowed,
                } => {
                    state.complete_send(user_input, raw_output, reflowed);
                }
                ResponseEvent::SendFailed => {
                    state.fail_send();
                }
            }
        }

        let timeout = if state.loading {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if event::poll(timeout)? {
            let event = event::read()?;
            let action = handle_input(state, event);

            match action {
                InputAction::Exit => {
                    return Ok(ChatResult::Exit);
                }

                InputAction::Submit => {
                    let input = state.take_input();
                    if state.begin_send(&input) {
                        let backend = backend.clone();
                        let tx = response_tx.clone();
                        let max_line_len = config.max_line_len;

                        tokio::spawn(async move {
                            send_message(backend, input, max_line_len, tx).await;
                        });
                    }
                }

                InputAction::Rate(payload) => {
                    // Display already updated; the call is fire-and-forget.
                    state.focus_input();
                    let backend = backend.clone();
                    tokio::spawn(async move {
                        submit_rating(backend, payload).await;
                    });
                }

                InputAction::Command(cmd) => {
                    if matches!(parse_command(&cmd), CommandResult::Exit) {
                        return Ok(ChatResult::Exit);
                    }
                    handle_command(state, &cmd);
                }

                InputAction::ScrollUp => {
                    state.scroll_up();
                }

                InputAction::ScrollDown => {
                    // Clamped to content height during render.
                    state.scroll_down(1000);
                }

                InputAction::ScrollTop => {
                    state.scroll_offset = 0;
                }

                InputAction::ScrollBottom => {
                    state.scroll_to_bottom();
                }

                InputAction::None => {}
            }
        } else if state.loading {
            state.tick_loading();
        }
    }
}
