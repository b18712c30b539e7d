use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use super::form_view::{Cursor, LinkView};

/// Suffix drawn while a toggle is outstanding
const WAIT_MARKER: &str = " …";

/// Draws a [`LinkView`] as a single terminal line
pub struct LinkWidget<'a> {
    view: &'a LinkView,
}

impl<'a> LinkWidget<'a> {
    pub fn new(view: &'a LinkView) -> Self {
        Self { view }
    }

    /// Columns the widget needs
    pub fn width(&self) -> u16 {
        let mut width = self.view.label().width();
        if self.view.cursor == Cursor::Wait {
            width += WAIT_MARKER.width();
        }
        u16::try_from(width).unwrap_or(u16::MAX)
    }

    fn link_style(&self) -> Style {
        let style = if self.view.is_active() {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let style = style.add_modifier(Modifier::UNDERLINED);
        match self.view.cursor {
            Cursor::Wait => style.add_modifier(Modifier::DIM),
            Cursor::Pointer => style,
        }
    }
}

impl Widget for LinkWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(self.view.label(), self.link_style())];
        if self.view.cursor == Cursor::Wait {
            spans.push(Span::styled(
                WAIT_MARKER,
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans).render(area, buf);
    }
}

#[cfg(test)]
#[path = "form_render_tests.rs"]
mod form_render_tests;
