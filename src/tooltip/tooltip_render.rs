//! Tooltip rendering

use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::tooltip_state::TooltipState;
use crate::config::TooltipPosition;

/// Render the tooltip next to `anchor` if it is visible
pub fn render_tooltip(
    frame: &mut Frame,
    state: &TooltipState,
    anchor: Rect,
    now: Instant,
) {
    if !state.is_visible() {
        return;
    }
    let Some(options) = state.options() else {
        return;
    };

    let text = state.content();
    if text.trim().is_empty() {
        return;
    }

    let bounds = frame.area();
    // Two columns of border
    let max_inner = options.max_width.min(bounds.width).saturating_sub(2).max(1);
    let lines = wrap_text(text, max_inner as usize);
    let content_width = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
    let area = tooltip_area(
        anchor,
        bounds,
        content_width,
        lines.len() as u16,
        options.position,
    );

    let mut style = Style::default().fg(Color::White);
    if state.is_fading(now) {
        style = style.add_modifier(Modifier::DIM);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let paragraph = Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
        .block(block)
        .style(style);

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// Place a bordered popup of the given content size beside `anchor`
///
/// Prefers `position`, flips to the other side when there is no room, and
/// keeps the popup inside `bounds`, centred on the anchor where possible.
pub fn tooltip_area(
    anchor: Rect,
    bounds: Rect,
    content_width: u16,
    line_count: u16,
    position: TooltipPosition,
) -> Rect {
    let width = content_width.saturating_add(2).min(bounds.width);
    let height = line_count.saturating_add(2).min(bounds.height);

    let anchor_center = anchor.x.saturating_add(anchor.width / 2);
    let max_x = bounds.right().saturating_sub(width);
    let x = anchor_center
        .saturating_sub(width / 2)
        .max(bounds.x)
        .min(max_x);

    let fits_above = anchor.y >= bounds.y.saturating_add(height);
    let fits_below = anchor.bottom().saturating_add(height) <= bounds.bottom();
    let above = anchor.y.saturating_sub(height);
    let below = anchor.bottom();
    let y = match position {
        TooltipPosition::Top if fits_above || !fits_below => above,
        TooltipPosition::Top => below,
        TooltipPosition::Bottom if fits_below || !fits_above => below,
        TooltipPosition::Bottom => above,
    };
    let y = y.max(bounds.y).min(bounds.bottom().saturating_sub(height));

    Rect::new(x, y, width, height)
}

/// Word-wrap by display width; words wider than `width` are split
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width > width {
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width > 0 && current_width + ch_width > width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
            continue;
        }

        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[path = "tooltip_render_tests.rs"]
mod tooltip_render_tests;
