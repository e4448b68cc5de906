use super::click_router::WidgetId;

/// Actions produced by components in response to user input.
///
/// The app component applies these after the component pass; this is
/// where document-level click watches are kept in sync with widget open
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A selection-tracking dropdown opened its list and needs a
    /// terminal-wide click watch
    ListOpened(WidgetId),
    /// A selection-tracking dropdown closed its list; its watch is
    /// released
    ListClosed(WidgetId),
    /// An item was picked from a selection-tracking dropdown; the list
    /// is already closed and the watch is released
    ItemPicked { widget: WidgetId, label: String },
    /// A toggle-only dropdown flipped its list; click watches are
    /// untouched
    ListToggled { widget: WidgetId, open: bool },

    // App control
    Quit,
    None,
}
