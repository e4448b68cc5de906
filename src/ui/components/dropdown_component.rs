//! Dropdown select component for the droplist application.
//!
//! A click-driven dropdown made of a toggle button and a collapsible
//! list of five fixed items. The component comes in two behaviors that
//! stay observably distinct:
//!
//! - [`DropdownBehavior::TrackSelection`]: the toggle echoes the picked
//!   item, and while the list is open the host arms a terminal-wide
//!   click watch that dismisses it on any click the widget itself does
//!   not consume.
//! - [`DropdownBehavior::ToggleOnly`]: the toggle flips the list and
//!   nothing else; the label is static and outside clicks are ignored.
//!
//! Features:
//! - Mouse hit testing against the widget's slot (click to open/pick)
//! - Hover highlight for the item row under the pointer
//! - Border styling that flips with the open state: fully rounded while
//!   closed, square borderless bottom on the button while open with the
//!   list closing the frame below

use crate::config::ThemeConfig;
use crate::constants::{
    DROPDOWN_CLOSED_HEIGHT, DROPDOWN_ITEMS_TOP_OFFSET, DROPDOWN_OPEN_HEIGHT, INDICATOR_CLOSED, INDICATOR_OPEN,
    LIST_ITEMS,
};
use crate::ui::core::{actions::Action, click_router::WidgetId, Component};
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

/// How the dropdown reacts to clicks beyond showing and hiding the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownBehavior {
    /// Echo the picked item on the toggle and dismiss on outside clicks
    TrackSelection,
    /// Flip the list on toggle clicks only; the label never changes and
    /// outside clicks are ignored
    ToggleOnly,
}

/// A dropdown select widget with local open/closed state.
pub struct DropdownComponent {
    id: WidgetId,
    behavior: DropdownBehavior,
    is_open: bool,
    current_select: String,
    hovered: Option<usize>,
    default_label: String,
    // Resolved theme colors
    border_color: Color,
    hover_color: Color,
    separator_color: Color,
    text_color: Color,
}

impl DropdownComponent {
    pub fn new(behavior: DropdownBehavior, default_label: impl Into<String>, theme: &ThemeConfig) -> Self {
        Self {
            id: WidgetId::next(),
            behavior,
            is_open: false,
            current_select: String::new(),
            hovered: None,
            default_label: default_label.into(),
            border_color: theme.border(),
            hover_color: theme.hover(),
            separator_color: theme.separator(),
            text_color: theme.text(),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn behavior(&self) -> DropdownBehavior {
        self.behavior
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The picked item's value; empty until the first selection.
    pub fn current_select(&self) -> &str {
        &self.current_select
    }

    /// Text currently shown on the toggle button.
    pub fn label(&self) -> &str {
        match self.behavior {
            DropdownBehavior::TrackSelection => &self.current_select,
            DropdownBehavior::ToggleOnly => &self.default_label,
        }
    }

    /// Item row currently under the pointer, if any.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Height of the widget in its current state.
    pub fn current_height(&self) -> u16 {
        if self.is_open {
            DROPDOWN_OPEN_HEIGHT
        } else {
            DROPDOWN_CLOSED_HEIGHT
        }
    }

    // -------------------------------------------------------------------------
    // State transitions
    // -------------------------------------------------------------------------

    /// Show the list. The host arms the click watch in response to the
    /// `ListOpened` action; the state change itself is local.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Hide the list and drop any hover highlight.
    pub fn close(&mut self) {
        self.is_open = false;
        self.hovered = None;
    }

    /// Flip the list without involving click watches.
    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Record `item` as the current selection, then close the list.
    pub fn select(&mut self, item: &str) {
        self.current_select = item.to_string();
        self.close();
    }

    // -------------------------------------------------------------------------
    // Pointer handling
    // -------------------------------------------------------------------------

    fn handle_click(&mut self, column: u16, row: u16, slot: Rect) -> Action {
        if self.is_on_button(column, row, slot) {
            return match self.behavior {
                DropdownBehavior::TrackSelection => {
                    if self.is_open {
                        self.close();
                        Action::ListClosed(self.id)
                    } else {
                        self.open();
                        Action::ListOpened(self.id)
                    }
                }
                DropdownBehavior::ToggleOnly => {
                    self.toggle();
                    Action::ListToggled {
                        widget: self.id,
                        open: self.is_open,
                    }
                }
            };
        }

        if let Some(index) = self.item_index_at(column, row, slot) {
            if self.behavior == DropdownBehavior::TrackSelection {
                let label = LIST_ITEMS[index].to_string();
                self.select(&label);
                return Action::ItemPicked { widget: self.id, label };
            }
            // Item rows carry no click handler in the toggle-only
            // behavior; the click falls through like any other.
        }

        Action::None
    }

    /// The toggle button's rows: the full closed frame, or the frame's
    /// top two rows while the list is open (the button has no bottom
    /// border of its own then).
    fn is_on_button(&self, column: u16, row: u16, slot: Rect) -> bool {
        let button_height = if self.is_open { 2 } else { DROPDOWN_CLOSED_HEIGHT };
        column >= slot.x && column < slot.x + slot.width && row >= slot.y && row < slot.y + button_height
    }

    /// Map a position to an item row, if the list is open and the
    /// position is inside an item's content area. The list frame's side
    /// borders belong to the container, not to the items.
    fn item_index_at(&self, column: u16, row: u16, slot: Rect) -> Option<usize> {
        if !self.is_open {
            return None;
        }
        if column <= slot.x || column >= slot.x + slot.width.saturating_sub(1) {
            return None;
        }
        let first_item_row = slot.y + DROPDOWN_ITEMS_TOP_OFFSET;
        if row < first_item_row || row >= first_item_row + LIST_ITEMS.len() as u16 {
            return None;
        }
        Some((row - first_item_row) as usize)
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    fn render_closed(&self, f: &mut Frame, slot: Rect) {
        let button_area = Rect::new(slot.x, slot.y, slot.width, DROPDOWN_CLOSED_HEIGHT);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.border_color));
        let inner = block.inner(button_area);
        f.render_widget(block, button_area);
        f.render_widget(self.button_line(INDICATOR_CLOSED, inner.width), inner);
    }

    fn render_open(&self, f: &mut Frame, slot: Rect) {
        let border_style = Style::default().fg(self.border_color);

        // The button keeps its rounded top corners but loses the bottom
        // border, so its sides run straight into the list frame below.
        let button_area = Rect::new(slot.x, slot.y, slot.width, 2);
        let button_block = Block::default()
            .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let button_inner = button_block.inner(button_area);
        f.render_widget(button_block, button_area);
        f.render_widget(self.button_line(INDICATOR_OPEN, button_inner.width), button_inner);

        // The list container has no top border of its own and closes the
        // frame with rounded bottom corners.
        let list_area = Rect::new(slot.x, slot.y + 2, slot.width, DROPDOWN_OPEN_HEIGHT - 2);
        let list_block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let list_inner = list_block.inner(list_area);
        f.render_widget(list_block, list_area);

        // Rule between the button and the first item
        let rule_area = Rect::new(list_inner.x, list_inner.y, list_inner.width, 1);
        let rule =
            Paragraph::new("─".repeat(list_inner.width as usize)).style(Style::default().fg(self.separator_color));
        f.render_widget(rule, rule_area);

        // Item rows: hover gets the highlight background, the current
        // selection renders bold
        let items_area = Rect::new(list_inner.x, list_inner.y + 1, list_inner.width, LIST_ITEMS.len() as u16);
        let rows: Vec<ListItem> = LIST_ITEMS
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let mut style = Style::default().fg(self.text_color);
                if self.current_select == *item {
                    style = style.add_modifier(Modifier::BOLD);
                }
                if self.hovered == Some(index) {
                    style = style.bg(self.hover_color).add_modifier(Modifier::BOLD);
                }
                ListItem::new(Line::from(format!(" {item}"))).style(style)
            })
            .collect();
        f.render_widget(List::new(rows), items_area);
    }

    /// Button content: label on the left, open/closed indicator flush
    /// right.
    fn button_line(&self, indicator: &str, width: u16) -> Paragraph<'_> {
        let label = self.label();
        let padding = (width as usize).saturating_sub(label.chars().count() + 1);
        let line = Line::from(vec![
            Span::styled(label, Style::default().fg(self.text_color)),
            Span::raw(" ".repeat(padding)),
            Span::styled(indicator.to_string(), Style::default().fg(self.border_color)),
        ]);
        Paragraph::new(line)
    }
}

impl Component for DropdownComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        // Pointer-driven widget; keyboard stays with the host
        Action::None
    }

    /// Hit-test a mouse event against the widget's slot.
    ///
    /// Returns [`Action::None`] for anything the widget does not consume.
    /// The host treats an unconsumed left click as a document-level click
    /// and offers it to armed watches afterwards; that ordering is what
    /// keeps an item click from also firing the watch it armed.
    fn handle_mouse_events(&mut self, mouse: MouseEvent, slot: Rect) -> Action {
        match mouse.kind {
            MouseEventKind::Moved => {
                self.hovered = self.item_index_at(mouse.column, mouse.row, slot);
                Action::None
            }
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row, slot),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, slot: Rect) {
        if slot.width < 4 || slot.height < self.current_height() {
            return;
        }
        if self.is_open {
            self.render_open(f, slot);
        } else {
            self.render_closed(f, slot);
        }
    }
}
