use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::form::{LinkWidget, render};
use crate::tooltip::render_tooltip;

const HELP_TEXT: &str = " Enter/Space/click: toggle · q: quit ";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let props = self.store.props();
        let view = render(&props);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} subscription ", props.thing))
            .title_bottom(HELP_TEXT)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(frame.area());
        frame.render_widget(block, frame.area());

        let link = LinkWidget::new(&view);
        let link_area = centered_line(inner, link.width());
        frame.render_widget(link, link_area);
        self.link_area = Some(link_area);

        if props.subscribed_to_tool {
            let note_area = Rect::new(
                inner.x,
                link_area.y.saturating_add(1).min(inner.bottom().saturating_sub(1)),
                inner.width,
                1,
            );
            if note_area.y > link_area.y {
                let note = Paragraph::new("(subscribed to the entire tool)")
                    .centered()
                    .style(Style::default().fg(Color::DarkGray));
                frame.render_widget(note, note_area);
            }
        }

        render_tooltip(
            frame,
            &self.form.tooltip,
            link_area,
            Instant::now(),
        );
    }
}

/// One-row area of `width` centred in `area`
fn centered_line(area: Rect, width: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(1)])
        .flex(ratatui::layout::Flex::Center)
        .areas(area);
    let [line] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(ratatui::layout::Flex::Center)
        .areas(row);
    line
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
