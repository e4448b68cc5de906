use super::actions::Action;
use crossterm::event::{Event, KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Base trait for UI components.
///
/// Components translate input into [`Action`]s, may react to actions
/// during the update pass, and draw themselves into a frame region. The
/// widgets in this app are pointer-driven, so the trait carries a
/// slot-aware mouse handler: a component only reacts to positions inside
/// the slot it was rendered into, and returns [`Action::None`] for any
/// event it does not consume, letting the host offer the click elsewhere.
pub trait Component {
    fn init(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Route a slotless terminal event. Pointer events carry positions
    /// and go through [`Component::handle_mouse_events`] instead, since
    /// hit testing needs the component's slot.
    fn handle_events(&mut self, event: Option<Event>) -> Action {
        if let Some(Event::Key(key)) = event {
            self.handle_key_events(key)
        } else {
            Action::None
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    /// Hit-test a pointer event against the slot the component occupies.
    /// The default ignores the pointer.
    fn handle_mouse_events(&mut self, _mouse: MouseEvent, _slot: Rect) -> Action {
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        // Default implementation passes action through
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);

    // Optional lifecycle methods
    fn on_focus(&mut self) {}
    fn on_blur(&mut self) {}
}
