//! Terminal-wide click observation
//!
//! The terminal has no document to attach listeners to, so a widget that
//! needs to react to "a click anywhere" arms a watch here while its list
//! is open and releases it when the list closes. The app offers a click
//! to this registry only after the widgets' own hit tests declined it,
//! which keeps an item click from reaching a watch armed during the same
//! interaction.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Unique identifier for a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(usize);

impl WidgetId {
    /// Allocate a fresh id from a process-local counter.
    pub fn next() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "widget-{}", self.0)
    }
}

/// Registry of widgets observing terminal-wide clicks.
///
/// At most one watch exists per widget id: arming is deduplicated and
/// releasing an id that is not armed is a no-op, so repeated open/close
/// cycles cannot accumulate stray watches.
#[derive(Debug, Default)]
pub struct ClickRouter {
    watchers: Vec<WidgetId>,
}

impl ClickRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a click watch for the given widget. Re-arming is a no-op.
    pub fn watch(&mut self, id: WidgetId) {
        if !self.watchers.contains(&id) {
            log::debug!("click watch armed for {id}");
            self.watchers.push(id);
        }
    }

    /// Release the widget's click watch. Releasing an id that is not
    /// armed is a no-op.
    pub fn release(&mut self, id: WidgetId) {
        if let Some(index) = self.watchers.iter().position(|w| *w == id) {
            log::debug!("click watch released for {id}");
            self.watchers.remove(index);
        }
    }

    /// Check whether the widget currently holds a watch.
    #[must_use]
    pub fn is_watching(&self, id: WidgetId) -> bool {
        self.watchers.contains(&id)
    }

    /// Number of armed watches.
    #[must_use]
    pub fn watcher_count(&self) -> usize {
        self.watchers.len()
    }

    /// Widgets to notify about a click no component consumed.
    #[must_use]
    pub fn watchers(&self) -> &[WidgetId] {
        &self.watchers
    }
}
