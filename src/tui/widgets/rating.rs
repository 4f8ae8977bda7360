//! Five-star rating row for assistant replies

use super::super::theme;
use ratatui::text::{Line, Span};

/// Number of stars on the scale
pub const MAX_RATING: u8 = 5;

/// Hover tooltips, indexed by rating - 1
pub const TOOLTIPS: [&str; MAX_RATING as usize] = [
    "Not helpful at all",
    "Slightly helpful",
    "Moderately helpful",
    "Very helpful",
    "Extremely helpful",
];

/// Local rating state for one assistant reply.
///
/// Selection is optimistic: committing updates the display immediately and
/// the network call follows. A failed call never rolls the display back,
/// and committing again replaces the previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingWidget {
    pub selected: Option<u8>,
    pub hover: Option<u8>,
}

impl RatingWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move hover one star left (clamps at 1)
    pub fn hover_left(&mut self) {
        let current = self.hover.or(self.selected).unwrap_or(2);
        self.hover = Some(current.saturating_sub(1).max(1));
    }

    /// Move hover one star right (clamps at MAX_RATING)
    pub fn hover_right(&mut self) {
        let current = self.hover.or(self.selected).unwrap_or(0);
        self.hover = Some((current + 1).min(MAX_RATING));
    }

    /// Hover a specific star; out-of-range values are ignored
    pub fn hover_at(&mut self, value: u8) {
        if (1..=MAX_RATING).contains(&value) {
            self.hover = Some(value);
        }
    }

    /// Commit the hovered star, returning the newly selected value.
    /// Without a hovered star this is a no-op.
    pub fn commit(&mut self) -> Option<u8> {
        let value = self.hover?;
        self.selected = Some(value);
        Some(value)
    }

    /// Clear hover when focus leaves the star row
    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    /// Render the star row (plus tooltip while hovering) as text lines
    pub fn lines(&self, focused: bool) -> Vec<Line<'static>> {
        let shown = self.hover.or(self.selected).unwrap_or(0);
        let mut spans: Vec<Span<'static>> = Vec::with_capacity(MAX_RATING as usize + 2);
        spans.push(Span::raw("  "));
        for value in 1..=MAX_RATING {
            let style = if value <= shown {
                theme::star_active()
            } else {
                theme::star_idle()
            };
            spans.push(Span::styled("★ ", style));
        }
        if let Some(selected) = self.selected {
            spans.push(Span::styled(format!(" rated {selected}/5"), theme::subtitle()));
        } else if focused {
            spans.push(Span::styled(" rate this reply", theme::subtitle()));
        }

        let mut lines = vec![Line::from(spans)];
        if focused {
            if let Some(hover) = self.hover {
                lines.push(Line::from(Span::styled(
                    format!("  {}", TOOLTIPS[(hover - 1) as usize]),
                    theme::tooltip(),
                )));
            }
        }
        lines
    }
}
