//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::constants::{STATUS_HINTS, STATUS_NO_SELECTION};

/// One-line state echo at the bottom of the screen
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, current_select: &str, open_states: (bool, bool)) {
        let selection = if current_select.is_empty() {
            STATUS_NO_SELECTION
        } else {
            current_select
        };
        let (tracking_open, toggle_open) = open_states;
        let state = |open: bool| if open { "open" } else { "closed" };

        let status_text = format!(
            "selection: {selection} • tracking list {} • toggle list {} • {STATUS_HINTS}",
            state(tracking_open),
            state(toggle_open)
        );

        let status_color = if tracking_open || toggle_open {
            Color::Yellow
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
