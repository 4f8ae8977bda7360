//! Chat input handling

use super::state::{ChatState, Focus};
use crate::api::RatePayload;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input action result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No action needed
    None,
    /// Submit the current input
    Submit,
    /// Exit the chat
    Exit,
    /// Execute a command
    Command(String),
    /// Fire the rating call for a committed star
    Rate(RatePayload),
    /// Scroll up
    ScrollUp,
    /// Scroll down
    ScrollDown,
    /// Scroll to top
    ScrollTop,
    /// Scroll to bottom
    ScrollBottom,
}

/// Handle keyboard input and update state
pub fn handle_input(state: &mut ChatState, event: Event) -> InputAction {
    if state.loading {
        if let Event::Key(key) = event {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return InputAction::None;
            }
            if key.code == KeyCode::Char('q')
                || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q'))
            {
                return InputAction::Exit;
            }
        }
        return InputAction::None;
    }

    match event {
        Event::Key(key) => handle_key(state, key),
        Event::Resize(_, _) => InputAction::None,
        _ => InputAction::None,
    }
}

fn handle_key(state: &mut ChatState, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
        return InputAction::Exit;
    }

    match state.focus {
        Focus::Input => handle_input_key(state, key),
        Focus::Rating(_) => handle_rating_key(state, key),
    }
}

fn handle_input_key(state: &mut ChatState, key: KeyEvent) -> InputAction {
    if key.code == KeyCode::Char('q') && state.input.is_empty() {
        return InputAction::Exit;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.input.clear();
        state.cursor_pos = 0;
        return InputAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('r') {
        state.focus_rating();
        return InputAction::None;
    }

    match key.code {
        KeyCode::Enter => {
            // Whitespace-only input is a no-op, matching the send contract.
            if state.input.trim().is_empty() {
                return InputAction::None;
            }

            if state.is_command() {
                let cmd = state.take_input();
                return InputAction::Command(cmd);
            }

            InputAction::Submit
        }
        KeyCode::Tab => {
            state.focus_rating();
            InputAction::None
        }
        KeyCode::Esc => {
            if !state.input.is_empty() {
                state.input.clear();
                state.cursor_pos = 0;
            }
            InputAction::None
        }
        KeyCode::Backspace => {
            state.delete_char();
            InputAction::None
        }
        KeyCode::Delete => {
            state.delete_char_forward();
            InputAction::None
        }
        KeyCode::Left => {
            state.move_cursor_left();
            InputAction::None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            InputAction::None
        }
        KeyCode::Home => {
            state.move_cursor_home();
            InputAction::None
        }
        KeyCode::End => {
            state.move_cursor_end();
            InputAction::None
        }
        KeyCode::Up | KeyCode::PageUp => InputAction::ScrollUp,
        KeyCode::Down | KeyCode::PageDown => InputAction::ScrollDown,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputAction::ScrollTop
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputAction::ScrollBottom
        }
        KeyCode::Char(c) => {
            state.insert_char(c);
            InputAction::None
        }

        _ => InputAction::None,
    }
}

fn handle_rating_key(state: &mut ChatState, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc | KeyCode::Tab => {
            state.focus_input();
            InputAction::None
        }
        KeyCode::Left => {
            if let Some(rating) = state.focused_rating_mut() {
                rating.hover_left();
            }
            InputAction::None
        }
        KeyCode::Right => {
            if let Some(rating) = state.focused_rating_mut() {
                rating.hover_right();
            }
            InputAction::None
        }
        KeyCode::Char(c @ '1'..='5') => {
            if let Some(rating) = state.focused_rating_mut() {
                rating.hover_at(c as u8 - b'0');
            }
            InputAction::None
        }
        KeyCode::Enter => match state.commit_rating() {
            Some(payload) => InputAction::Rate(payload),
            None => InputAction::None,
        },
        KeyCode::Up | KeyCode::PageUp => InputAction::ScrollUp,
        KeyCode::Down | KeyCode::PageDown => InputAction::ScrollDown,
        _ => InputAction::None,
    }
}

/// Parse a command, without executing it
pub fn parse_command(input: &str) -> CommandResult {
    let cmd = input.trim_start_matches(|c| c == '/' || c == ':');
    let name = cmd
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();

    match name.as_str() {
        "" => CommandResult::None,

        "help" | "?" => CommandResult::ShowHelp,

        "clear" | "reset" | "new" => CommandResult::Clear,

        "exit" | "quit" | "bye" => CommandResult::Exit,

        _ => CommandResult::Unknown(name),
    }
}

#[derive(Debug, Clone)]
pub enum CommandResult {
    None,
    ShowHelp,
    Clear,
    Exit,
    Unknown(String),
}
