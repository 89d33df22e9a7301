//! Shared context between controls and their adapter.
//!
//! Controls push notifications here as they change state; the adapter
//! drains the queue after each interaction and re-renders what the events
//! name. The context also owns the focus state that hover updates write to.

use std::sync::{Arc, RwLock};

use crate::focus::{FocusId, FocusState};
use crate::widgets::events::MenuEvent;

/// Internal context state.
#[derive(Debug, Default)]
struct ContextInner {
    /// Pending events to dispatch
    pending_events: Vec<MenuEvent>,
    /// Input focus tracking
    focus: FocusState,
}

/// Context handed to control operations.
///
/// Cheap to clone; clones share the same queue and focus state.
#[derive(Debug, Default)]
pub struct MenuContext {
    inner: Arc<RwLock<ContextInner>>,
}

impl MenuContext {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Event queue
    // -------------------------------------------------------------------------

    /// Push an event to the queue.
    ///
    /// Controls call this to signal that something happened. The adapter
    /// drains the queue and dispatches its own handlers.
    pub fn push_event(&self, event: MenuEvent) {
        if let Ok(mut inner) = self.inner.write() {
            inner.pending_events.push(event);
        }
    }

    /// Drain all pending events.
    ///
    /// Returns the events and clears the queue.
    pub fn drain_events(&self) -> Vec<MenuEvent> {
        self.inner
            .write()
            .ok()
            .map(|mut inner| std::mem::take(&mut inner.pending_events))
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    /// Hand input focus to an element.
    pub fn focus(&self, id: impl Into<FocusId>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.focus.set_focus(id);
        }
    }

    /// Clear input focus.
    pub fn clear_focus(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.focus.clear_focus();
        }
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<FocusId> {
        self.inner
            .read()
            .ok()
            .and_then(|inner| inner.focus.current().cloned())
    }

    /// Check if an element is focused.
    pub fn is_focused(&self, id: &str) -> bool {
        self.inner
            .read()
            .map(|inner| inner.focus.is_focused(id))
            .unwrap_or(false)
    }

    /// Check if focus changed since last check.
    pub fn take_focus_changed(&self) -> bool {
        self.inner
            .write()
            .map(|mut inner| inner.focus.take_focus_changed())
            .unwrap_or(false)
    }
}

impl Clone for MenuContext {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
