//! Top-level component hosting both dropdown variants.
//!
//! Routes pointer and key events, keeps the document-level click watch
//! registry in sync with widget open state, and draws the overall
//! screen. Clicks are hit-tested against the widgets first; only a click
//! no widget consumed is offered to armed watches, which is what makes
//! outside-click dismissal safe against the click that opened the list.

use crate::config::Config;
use crate::constants::{TOGGLE_PANE_TITLE, TRACKING_PANE_TITLE};
use crate::ui::components::{DropdownBehavior, DropdownComponent, StatusBar};
use crate::ui::core::{Action, ClickRouter, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub struct AppComponent {
    // Component composition
    tracking: DropdownComponent,
    toggle_only: DropdownComponent,

    // Shared click observation
    click_router: ClickRouter,

    // Simple UI state
    area: Rect,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config) -> Self {
        Self {
            tracking: DropdownComponent::new(
                DropdownBehavior::TrackSelection,
                config.ui.default_label.clone(),
                &config.theme,
            ),
            toggle_only: DropdownComponent::new(
                DropdownBehavior::ToggleOnly,
                config.ui.default_label.clone(),
                &config.theme,
            ),
            click_router: ClickRouter::new(),
            area: Rect::new(0, 0, 80, 24),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Record the terminal area; mouse events are hit-tested against it.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Slots the two widgets currently occupy on screen.
    pub fn widget_areas(&self) -> (Rect, Rect) {
        let chunks = LayoutManager::main_layout(self.area);
        let panes = LayoutManager::pane_layout(chunks[0]);
        (
            LayoutManager::dropdown_slot(panes[0]),
            LayoutManager::dropdown_slot(panes[1]),
        )
    }

    pub fn click_router(&self) -> &ClickRouter {
        &self.click_router
    }

    pub fn tracking_dropdown(&self) -> &DropdownComponent {
        &self.tracking
    }

    pub fn toggle_dropdown(&self) -> &DropdownComponent {
        &self.toggle_only
    }

    /// Route a mouse event through the widgets, then offer any left
    /// click nobody consumed to armed click watches.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Action {
        let (tracking_slot, toggle_slot) = self.widget_areas();

        let mut action = self.tracking.handle_mouse_events(mouse, tracking_slot);
        if matches!(action, Action::None) {
            action = self.toggle_only.handle_mouse_events(mouse, toggle_slot);
        }
        if matches!(action, Action::None) && matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            action = self.notify_outside_click();
        }

        self.apply_action(action)
    }

    /// Deliver a document-level click to armed watches. Only the
    /// tracking variant ever arms one.
    fn notify_outside_click(&mut self) -> Action {
        if self.click_router.is_watching(self.tracking.id()) {
            self.tracking.close();
            return Action::ListClosed(self.tracking.id());
        }
        Action::None
    }

    /// Apply an action's app-level effects, keeping click watches in
    /// sync with widget open state.
    pub fn apply_action(&mut self, action: Action) -> Action {
        match &action {
            Action::ListOpened(id) => {
                log::debug!("{id}: list opened");
                self.click_router.watch(*id);
            }
            Action::ListClosed(id) => {
                log::debug!("{id}: list closed");
                self.click_router.release(*id);
            }
            Action::ItemPicked { widget, label } => {
                log::debug!("{widget}: picked '{label}'");
                self.click_router.release(*widget);
            }
            Action::ListToggled { widget, open } => {
                log::debug!("{widget}: list toggled, open={open}");
            }
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
        action
    }

    fn render_caption(f: &mut Frame, area: Rect, title: &str) {
        let caption = Paragraph::new(title)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(caption, area);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;
        let chunks = LayoutManager::main_layout(rect);
        let panes = LayoutManager::pane_layout(chunks[0]);

        Self::render_caption(f, LayoutManager::pane_caption(panes[0]), TRACKING_PANE_TITLE);
        Self::render_caption(f, LayoutManager::pane_caption(panes[1]), TOGGLE_PANE_TITLE);

        self.tracking.render(f, LayoutManager::dropdown_slot(panes[0]));
        self.toggle_only.render(f, LayoutManager::dropdown_slot(panes[1]));

        StatusBar::render(
            f,
            chunks[1],
            self.tracking.current_select(),
            (self.tracking.is_open(), self.toggle_only.is_open()),
        );
    }
}
