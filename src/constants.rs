//! Constants used throughout the application
//!
//! This module centralizes the widget's item list, geometry, and default
//! values so rendering, hit testing, and tests stay consistent.

// Widget content
/// The five entries shown in the list
pub const LIST_ITEMS: [&str; 5] = ["Item1", "Item2", "Item3", "Item4", "Item5"];
/// Label shown by the toggle-only variant, which never echoes a selection
pub const DEFAULT_TOGGLE_LABEL: &str = "Select an item";
/// Indicator on the right edge of the toggle button while closed
pub const INDICATOR_CLOSED: &str = "▾";
/// Indicator on the right edge of the toggle button while open
pub const INDICATOR_OPEN: &str = "▴";

// Pane captions
pub const TRACKING_PANE_TITLE: &str = "Tracks selection";
pub const TOGGLE_PANE_TITLE: &str = "Toggle only";

// Status bar text
pub const STATUS_NO_SELECTION: &str = "nothing selected";
pub const STATUS_HINTS: &str = "click to open • q: quit";

// Widget geometry
/// Total width of the dropdown slot, borders included
pub const DROPDOWN_WIDTH: u16 = 24;
/// Collapsed height: top border, button row, bottom border
pub const DROPDOWN_CLOSED_HEIGHT: u16 = 3;
/// Expanded height: top border, button row, separator rule, five item
/// rows, bottom border
pub const DROPDOWN_OPEN_HEIGHT: u16 = 9;
/// Rows from the top of the slot to the first item row while open
pub const DROPDOWN_ITEMS_TOP_OFFSET: u16 = 3;

// Configuration and logging
pub const CONFIG_FILE_NAME: &str = "droplist.toml";
pub const CONFIG_DIR_NAME: &str = "droplist";
pub const LOG_FILE_NAME: &str = "droplist.log";

// Theme defaults
pub const DEFAULT_BORDER_COLOR: &str = "#20CC20";
pub const DEFAULT_HOVER_COLOR: &str = "#20CCCC";
pub const DEFAULT_SEPARATOR_COLOR: &str = "#CCCCCC";
pub const DEFAULT_TEXT_COLOR: &str = "#FFFFFF";
