//! Chat UI rendering components

use super::markdown;
use super::state::{ChatState, Focus, MessageRole};
use crate::tui::theme;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Main chat UI renderer
pub struct ChatUI;

impl ChatUI {
    /// Render the complete chat interface
    pub fn render(frame: &mut Frame, state: &ChatState, base_url: &str) {
        let area = frame.area();

        // Layout: Status bar, Messages, Input, Help bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status bar
                Constraint::Min(5),    // Messages area
                Constraint::Length(3), // Input area
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        Self::render_status_bar(frame, chunks[0], state, base_url);
        Self::render_messages(frame, chunks[1], state);
        Self::render_input(frame, chunks[2], state);
        Self::render_help_bar(frame, chunks[3], state);
    }

    /// Render status bar with backend info
    fn render_status_bar(frame: &mut Frame, area: Rect, state: &ChatState, base_url: &str) {
        let loading_indicator = if state.loading {
            Span::styled(
                format!(" {} ", SPINNER_FRAMES[state.loading_frame]),
                theme::loading(),
            )
        } else {
            Span::raw("")
        };

        let status_msg = state
            .status_message
            .as_ref()
            .map(|s| Span::styled(format!(" │ {} ", s), theme::subtitle()))
            .unwrap_or_else(|| Span::raw(""));

        let status_line = Line::from(vec![
            Span::styled(" 🎓 ", theme::title()),
            Span::styled("Course Assistant ", theme::title()),
            Span::styled("│ ", theme::subtitle()),
            Span::styled(base_url.to_string(), theme::subtitle()),
            loading_indicator,
            status_msg,
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border());

        let para = Paragraph::new(status_line).block(block);
        frame.render_widget(para, area);
    }

    /// Render the transcript
    fn render_messages(frame: &mut Frame, area: Rect, state: &ChatState) {
        let inner_height = area.height.saturating_sub(2) as usize;

        let mut lines: Vec<Line> = Vec::new();

        for (idx, msg) in state.messages.iter().enumerate() {
            match msg.role {
                MessageRole::User => {
                    Self::push_plain(&mut lines, "You: ", theme::user_prefix(), &msg.content);
                }
                MessageRole::System => {
                    Self::push_plain(&mut lines, "System: ", theme::system_prefix(), &msg.content);
                }
                MessageRole::Assistant => {
                    let prefix = "Assistant: ";
                    let mut rendered = markdown::render(&msg.content).into_iter();
                    if let Some(first) = rendered.next() {
                        let mut spans = vec![Span::styled(prefix, theme::assistant_prefix())];
                        spans.extend(first.spans);
                        lines.push(Line::from(spans));
                    }
                    let indent = " ".repeat(prefix.len());
                    for line in rendered {
                        let mut spans = vec![Span::raw(indent.clone())];
                        spans.extend(line.spans);
                        lines.push(Line::from(spans));
                    }
                    if let Some(exchange) = &msg.exchange {
                        let focused = state.focus == Focus::Rating(idx);
                        lines.extend(exchange.rating.lines(focused));
                    }
                }
            }
            // Empty line between messages
            lines.push(Line::from(""));
        }

        if state.loading {
            lines.push(Line::from(Span::styled(
                format!(
                    "Assistant: {} Thinking...",
                    SPINNER_FRAMES[state.loading_frame]
                ),
                theme::loading(),
            )));
        }

        let total_lines = lines.len();
        let max_scroll = total_lines.saturating_sub(inner_height);
        let scroll = if state.scroll_offset == u16::MAX {
            max_scroll as u16
        } else {
            state.scroll_offset.min(max_scroll as u16)
        };

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(theme::border());

        let para = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));

        frame.render_widget(para, area);
    }

    /// Prefix the first content line, indent continuations
    fn push_plain(
        lines: &mut Vec<Line<'static>>,
        prefix: &'static str,
        style: ratatui::style::Style,
        content: &str,
    ) {
        let content_lines: Vec<&str> = content.lines().collect();
        if let Some(first) = content_lines.first() {
            lines.push(Line::from(vec![
                Span::styled(prefix, style),
                Span::raw(first.to_string()),
            ]));
        }
        let indent = " ".repeat(prefix.len());
        for line in content_lines.iter().skip(1) {
            lines.push(Line::from(format!("{}{}", indent, line)));
        }
    }

    /// Render input area
    fn render_input(frame: &mut Frame, area: Rect, state: &ChatState) {
        let rating_focused = matches!(state.focus, Focus::Rating(_));

        let display_input = if state.loading {
            "Waiting for response...".to_string()
        } else if rating_focused {
            "Rating the last reply...".to_string()
        } else if state.input.is_empty() {
            "Type your question...".to_string()
        } else {
            // Insert cursor indicator
            let mut chars: Vec<char> = state.input.chars().collect();
            if state.cursor_pos >= chars.len() {
                chars.push('_');
            } else {
                chars.insert(state.cursor_pos, '|');
            }
            chars.into_iter().collect()
        };

        let input_style = if state.loading || rating_focused {
            theme::subtitle()
        } else {
            theme::text()
        };

        let input_line = Line::from(vec![
            Span::styled("> ", theme::user_prefix()),
            Span::styled(display_input, input_style),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if state.loading || rating_focused {
                theme::border()
            } else {
                theme::border_active()
            })
            .title(if state.is_command() {
                " Command "
            } else {
                " Message "
            });

        let para = Paragraph::new(input_line).block(block);
        frame.render_widget(para, area);
    }

    /// Render help bar
    fn render_help_bar(frame: &mut Frame, area: Rect, state: &ChatState) {
        let help_text = if state.loading {
            Line::from(Span::styled(
                " Waiting for the assistant... ",
                theme::loading(),
            ))
        } else if matches!(state.focus, Focus::Rating(_)) {
            Line::from(vec![
                Span::styled(" ←/→ or 1-5", theme::key_hint()),
                Span::raw(": Choose │ "),
                Span::styled("Enter", theme::key_hint()),
                Span::raw(": Send rating │ "),
                Span::styled("Esc", theme::key_hint()),
                Span::raw(": Back "),
            ])
        } else {
            Line::from(vec![
                Span::styled(" Enter", theme::key_hint()),
                Span::raw(": Send │ "),
                Span::styled("Tab", theme::key_hint()),
                Span::raw(": Rate reply │ "),
                Span::styled("/help", theme::key_hint()),
                Span::raw(": Commands │ "),
                Span::styled("PageUp/Down", theme::key_hint()),
                Span::raw(": Scroll │ "),
                Span::styled("q", theme::key_destructive()),
                Span::raw(": Exit "),
            ])
        };

        let para = Paragraph::new(help_text);
        frame.render_widget(para, area);
    }
}
