//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{DROPDOWN_OPEN_HEIGHT, DROPDOWN_WIDTH};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (widget panes on top, status bar below)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        let top_height = area.height.saturating_sub(1);
        let top_area = Rect::new(area.x, area.y, area.width, top_height);

        // Bottom area: status bar (1 line height, full width)
        let status_area = Rect::new(area.x, area.y + top_height, area.width, area.height.min(1));

        vec![top_area, status_area]
    }

    /// Split the content area into one column per widget variant
    #[must_use]
    pub fn pane_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area)
            .to_vec()
    }

    /// The dropdown's slot within a pane: horizontally centered, below
    /// the caption, always sized for the open widget
    #[must_use]
    pub fn dropdown_slot(pane: Rect) -> Rect {
        let width = DROPDOWN_WIDTH.min(pane.width);
        let x = pane.x + pane.width.saturating_sub(width) / 2;
        let y = pane.y + 2;
        let height = DROPDOWN_OPEN_HEIGHT.min(pane.height.saturating_sub(2));
        Rect::new(x, y, width, height)
    }

    /// Caption line at the top of a pane
    #[must_use]
    pub fn pane_caption(pane: Rect) -> Rect {
        Rect::new(pane.x, pane.y, pane.width, pane.height.min(1))
    }
}
