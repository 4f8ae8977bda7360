//! Chat state management

use crate::api::RatePayload;
use crate::tui::widgets::RatingWidget;
use chrono::Utc;

/// A single transcript entry
#[derive(Debug, Clone)]
pub struct ChatMessage {
    /// Timestamp-derived identity, e.g. `msg-1756100000000-assistant`
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    /// Present on assistant messages only
    pub exchange: Option<Exchange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

/// The user/assistant turn behind an assistant bubble: what the rating
/// endpoint needs echoed back, plus the star row state.
#[derive(Debug, Clone)]
pub struct Exchange {
    /// The user input that produced this reply
    pub user_input: String,
    /// The raw assistant output, before reflow
    pub assistant_output: String,
    pub rating: RatingWidget,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: message_id("user"),
            role: MessageRole::User,
            content: content.into(),
            exchange: None,
        }
    }

    pub fn assistant(
        content: impl Into<String>,
        user_input: impl Into<String>,
        assistant_output: impl Into<String>,
    ) -> Self {
        Self {
            id: message_id("assistant"),
            role: MessageRole::Assistant,
            content: content.into(),
            exchange: Some(Exchange {
                user_input: user_input.into(),
                assistant_output: assistant_output.into(),
                rating: RatingWidget::new(),
            }),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            id: message_id("system"),
            role: MessageRole::System,
            content: content.into(),
            exchange: None,
        }
    }
}

fn message_id(role: &str) -> String {
    format!("msg-{}-{}", Utc::now().timestamp_millis(), role)
}

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    /// Star row of the assistant message at this transcript index
    Rating(usize),
}

/// Chat session state
pub struct ChatState {
    /// Transcript, append-only and ordered
    pub messages: Vec<ChatMessage>,
    /// Current input buffer
    pub input: String,
    /// Cursor position in input, counted in chars
    pub cursor_pos: usize,
    /// Scroll offset for messages
    pub scroll_offset: u16,
    /// Whether a send is in flight
    pub loading: bool,
    /// Loading animation frame
    pub loading_frame: usize,
    /// Status message
    pub status_message: Option<String>,
    /// Current key focus
    pub focus: Focus,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: 0,
            loading: false,
            loading_frame: 0,
            status_message: None,
            focus: Focus::Input,
        }
    }

    /// Add a message to the transcript
    pub fn add_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.scroll_to_bottom();
    }

    /// Append the user half of a turn and start the spinner.
    /// Blank input is rejected and leaves the transcript unchanged.
    pub fn begin_send(&mut self, input: &str) -> bool {
        if input.trim().is_empty() {
            return false;
        }
        self.add_message(ChatMessage::user(input));
        self.loading = true;
        self.status_message = None;
        true
    }

    /// Append the assistant half of a turn
    pub fn complete_send(
        &mut self,
        user_input: impl Into<String>,
        assistant_output: impl Into<String>,
        reflowed: impl Into<String>,
    ) {
        self.loading = false;
        self.add_message(ChatMessage::assistant(reflowed, user_input, assistant_output));
    }

    /// The send failed: stop the spinner, transcript stays as it is
    pub fn fail_send(&mut self) {
        self.loading = false;
    }

    /// Get the current input and clear it
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    /// Byte offset of the char at `cursor_pos`; input length when at the end
    fn cursor_byte_offset(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(idx, _)| idx)
            .unwrap_or(self.input.len())
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let offset = self.cursor_byte_offset();
        self.input.insert(offset, c);
        self.cursor_pos += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let offset = self.cursor_byte_offset();
            self.input.remove(offset);
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        let offset = self.cursor_byte_offset();
        if offset < self.input.len() {
            self.input.remove(offset);
        }
    }

    /// Move cursor left
    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.input.chars().count() {
            self.cursor_pos += 1;
        }
    }

    /// Move cursor to start
    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    /// Move cursor to end
    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.input.chars().count();
    }

    /// Scroll messages up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll messages down
    pub fn scroll_down(&mut self, max_scroll: u16) {
        if self.scroll_offset < max_scroll {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to bottom of messages
    pub fn scroll_to_bottom(&mut self) {
        // Clamped to content height during render.
        self.scroll_offset = u16::MAX;
    }

    /// Clear the transcript and start a fresh conversation
    pub fn clear(&mut self) {
        self.messages.clear();
        self.scroll_offset = 0;
        self.focus = Focus::Input;
        self.status_message = Some("Transcript cleared".into());
    }

    /// Update loading animation frame
    pub fn tick_loading(&mut self) {
        if self.loading {
            self.loading_frame = (self.loading_frame + 1) % 4;
        }
    }

    /// Check if input is a command
    pub fn is_command(&self) -> bool {
        self.input.starts_with('/') || self.input.starts_with(':')
    }

    /// Get command name if input is a command
    pub fn get_command(&self) -> Option<&str> {
        if self.is_command() {
            let cmd = self.input.trim_start_matches(|c| c == '/' || c == ':');
            cmd.split_whitespace().next()
        } else {
            None
        }
    }

    /// Index of the most recent assistant message, if any
    pub fn last_assistant_index(&self) -> Option<usize> {
        self.messages
            .iter()
            .rposition(|m| m.role == MessageRole::Assistant)
    }

    /// Move focus to the newest assistant star row
    pub fn focus_rating(&mut self) -> bool {
        match self.last_assistant_index() {
            Some(idx) => {
                self.focus = Focus::Rating(idx);
                true
            }
            None => {
                self.status_message = Some("No reply to rate yet".into());
                false
            }
        }
    }

    /// Return focus to the input box, dropping any hover state
    pub fn focus_input(&mut self) {
        if let Some(rating) = self.focused_rating_mut() {
            rating.clear_hover();
        }
        self.focus = Focus::Input;
    }

    /// Star row currently focused, if any
    pub fn focused_rating_mut(&mut self) -> Option<&mut RatingWidget> {
        let Focus::Rating(idx) = self.focus else {
            return None;
        };
        self.messages
            .get_mut(idx)?
            .exchange
            .as_mut()
            .map(|exchange| &mut exchange.rating)
    }

    /// Commit the hovered star on the focused row. Returns the payload the
    /// rating endpoint expects when a value was committed; the displayed
    /// selection is already updated at that point.
    pub fn commit_rating(&mut self) -> Option<RatePayload> {
        let Focus::Rating(idx) = self.focus else {
            return None;
        };
        let message = self.messages.get_mut(idx)?;
        let id = message.id.clone();
        let exchange = message.exchange.as_mut()?;
        let rating = exchange.rating.commit()?;
        Some(RatePayload {
            rating,
            message_id: id,
            user_input: exchange.user_input.clone(),
            assistant_output: exchange.assistant_output.clone(),
        })
    }
}
