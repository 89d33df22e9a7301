//! Widget event handling types and traits.
//!
//! Two directions of traffic cross this module. `MenuIntent` carries
//! pre-decoded input into the control: the adapter translates raw
//! mouse/keyboard events into intents at its boundary so the core never
//! binds to event plumbing. `MenuEvent` carries notifications back out:
//! controls push them via `MenuContext::push_event()` and the adapter
//! drains the queue after each interaction.

use crate::context::MenuContext;
use crate::input::KeyCombo;

// =============================================================================
// Notification events
// =============================================================================

/// Identifies which handler to call for a menu event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEventKind {
    /// The item list was opened
    ListOpen,
    /// The item list was closed
    ListClose,
    /// An item's checked state changed
    ItemChanged,
}

/// A menu event to be dispatched.
///
/// Controls push these events via `MenuContext::push_event()`.
#[derive(Debug, Clone)]
pub struct MenuEvent {
    /// Which kind of event
    pub kind: MenuEventKind,
    /// Control ID that triggered the event
    pub widget_id: String,
    /// Toggled item, for `ItemChanged` events
    pub item_id: Option<String>,
}

impl MenuEvent {
    /// Create a new menu event.
    pub fn new(kind: MenuEventKind, widget_id: impl Into<String>) -> Self {
        Self {
            kind,
            widget_id: widget_id.into(),
            item_id: None,
        }
    }

    /// Create an `ItemChanged` event carrying the toggled item.
    pub fn item_changed(widget_id: impl Into<String>, item_id: impl Into<String>) -> Self {
        Self {
            kind: MenuEventKind::ItemChanged,
            widget_id: widget_id.into(),
            item_id: Some(item_id.into()),
        }
    }
}

// =============================================================================
// Decoded input intents
// =============================================================================

/// Vertical navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A pre-decoded input intent for a control.
///
/// The adapter owns hit testing and event decoding; by the time input
/// reaches the control it is one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuIntent {
    /// Open the item list
    OpenRequested,
    /// Close the item list
    CloseRequested,
    /// The monitor trigger was clicked (toggles the list)
    MonitorClicked,
    /// Pointer entered the monitor surface
    MonitorEnter,
    /// Pointer left the monitor surface
    MonitorLeave,
    /// Pointer entered the item list
    ListEnter,
    /// Pointer left the item list
    ListLeave,
    /// Mouse button pressed on an item (starts drag-select)
    ItemPressed(String),
    /// Pointer entered an item row
    ItemEntered(String),
    /// Arrow key navigation while the list is open
    DirectionKey(Direction),
    /// Selection key pressed (toggles the hovered item, starts drag-select)
    SelectKeyDown,
    /// Selection key released (ends drag-select)
    SelectKeyUp,
    /// Escape pressed (cancel)
    EscapePressed,
}

// =============================================================================
// Event Result
// =============================================================================

/// Result of handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Trait for widgets that can handle events.
///
/// All methods have default implementations that return
/// `EventResult::Ignored`, so widgets only need to implement the events
/// they care about.
pub trait WidgetEvents {
    /// Handle a pre-decoded intent.
    fn on_intent(&self, _intent: MenuIntent, _cx: &MenuContext) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a key press when this widget is focused.
    fn on_key(&self, _key: &KeyCombo, _cx: &MenuContext) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a key release when this widget is focused.
    fn on_key_release(&self, _key: &KeyCombo, _cx: &MenuContext) -> EventResult {
        EventResult::Ignored
    }
}
