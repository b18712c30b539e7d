//! Mouse handling
//!
//! A left click on the link toggles the subscription.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::app_state::App;

impl App {
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && self.is_over_link(mouse.column, mouse.row)
        {
            self.toggle();
        }
    }

    fn is_over_link(&self, column: u16, row: u16) -> bool {
        self.link_area
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }
}

#[cfg(test)]
#[path = "mouse_events_tests.rs"]
mod mouse_events_tests;
