//! Lightweight Markdown styling for assistant replies
//!
//! The backend answers in Markdown with `$...$` math spans. A terminal
//! transcript needs styling, not layout, so this maps the common
//! constructs onto styled spans: headings, bullets, fenced and inline
//! code, bold, italic, and math. Anything else passes through verbatim.

use crate::tui::theme;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Render assistant Markdown into styled lines
pub fn render(content: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut in_code_block = false;

    for raw in content.lines() {
        let trimmed = raw.trim_start();

        if trimmed.starts_with("```") {
            // Fence markers themselves are not shown.
            in_code_block = !in_code_block;
            continue;
        }
        if in_code_block {
            lines.push(Line::from(Span::styled(raw.to_string(), theme::code())));
            continue;
        }
        if let Some(heading) = trimmed.strip_prefix('#') {
            let text = heading.trim_start_matches('#').trim_start();
            lines.push(Line::from(Span::styled(text.to_string(), theme::heading())));
            continue;
        }
        if let Some(item) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            let mut spans = vec![Span::styled("• ", theme::subtitle())];
            spans.extend(inline_spans(item));
            lines.push(Line::from(spans));
            continue;
        }
        lines.push(Line::from(inline_spans(raw)));
    }
    lines
}

/// Inline delimiters in match order: `**` must precede `*`.
const DELIMITERS: [(&str, fn() -> Style); 4] = [
    ("**", theme::strong),
    ("`", theme::code),
    ("$", theme::math),
    ("*", theme::emphasis),
];

/// Split one line into styled inline spans. Unpaired delimiters are
/// treated as plain text.
fn inline_spans(text: &str) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    'outer: while !rest.is_empty() {
        for (delimiter, style) in DELIMITERS {
            if let Some(inner) = rest.strip_prefix(delimiter) {
                if let Some(close) = inner.find(delimiter) {
                    if close > 0 {
                        if !plain.is_empty() {
                            spans.push(Span::raw(std::mem::take(&mut plain)));
                        }
                        spans.push(Span::styled(inner[..close].to_string(), style()));
                        rest = &inner[close + delimiter.len()..];
                        continue 'outer;
                    }
                }
            }
        }

        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            plain.push(ch);
            rest = chars.as_str();
        }
    }

    if !plain.is_empty() {
        spans.push(Span::raw(plain));
    }
    spans
}
