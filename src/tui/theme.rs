//! TUI theme
//!
//! Color palette for the chat screen. Subtle blue/cyan for the user's side,
//! muted accents elsewhere to keep the transcript readable.

use ratatui::style::{Color, Modifier, Style};

/// Primary accent color - soft cyan blue
pub const ACCENT: Color = Color::Rgb(100, 180, 220);

/// Secondary accent - warm amber for stars and highlights
pub const HIGHLIGHT: Color = Color::Rgb(255, 200, 100);

/// Success indicator - soft green
pub const SUCCESS: Color = Color::Rgb(130, 200, 130);

/// Muted text - for secondary information
pub const MUTED: Color = Color::Rgb(100, 100, 110);

/// Border color - subtle gray
pub const BORDER: Color = Color::Rgb(70, 75, 85);

/// Title style
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Secondary text style
pub fn subtitle() -> Style {
    Style::default().fg(MUTED)
}

/// Normal text style
pub fn text() -> Style {
    Style::default().fg(Color::White)
}

/// Border style
pub fn border() -> Style {
    Style::default().fg(BORDER)
}

/// Active border style
pub fn border_active() -> Style {
    Style::default().fg(ACCENT)
}

/// Loading indicator style
pub fn loading() -> Style {
    Style::default().fg(HIGHLIGHT)
}

/// User message prefix style
pub fn user_prefix() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Assistant message prefix style
pub fn assistant_prefix() -> Style {
    Style::default().fg(SUCCESS)
}

/// System message style
pub fn system_prefix() -> Style {
    Style::default()
        .fg(HIGHLIGHT)
        .add_modifier(Modifier::ITALIC)
}

/// Key hint style for help text
pub fn key_hint() -> Style {
    Style::default().fg(SUCCESS)
}

/// Destructive action hint
pub fn key_destructive() -> Style {
    Style::default().fg(Color::Rgb(220, 100, 100))
}

/// Lit star in the rating row
pub fn star_active() -> Style {
    Style::default().fg(HIGHLIGHT)
}

/// Unlit star in the rating row
pub fn star_idle() -> Style {
    Style::default().fg(MUTED)
}

/// Rating tooltip text
pub fn tooltip() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::ITALIC)
}

/// Markdown heading
pub fn heading() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Markdown bold span
pub fn strong() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Markdown italic span
pub fn emphasis() -> Style {
    Style::default().add_modifier(Modifier::ITALIC)
}

/// Inline or fenced code
pub fn code() -> Style {
    Style::default().fg(Color::Rgb(200, 160, 255))
}

/// Math span ($ ... $)
pub fn math() -> Style {
    Style::default().fg(Color::Rgb(120, 210, 210))
}
