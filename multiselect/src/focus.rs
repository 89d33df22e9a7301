//! Input focus tracking.
//!
//! Hovering an item hands it input focus so keyboard navigation keeps
//! working wherever the pointer left off. The adapter reads this state to
//! move the real focus in its own surface.

/// Unique identifier for a focusable element
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FocusId(pub String);

impl FocusId {
    /// Create a new focus ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for FocusId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FocusId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Focus state manager
#[derive(Debug, Default)]
pub struct FocusState {
    /// Currently focused element ID
    current: Option<FocusId>,
    /// Whether focus needs to be updated
    focus_changed: bool,
}

impl FocusState {
    /// Create a new focus state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element
    pub fn current(&self) -> Option<&FocusId> {
        self.current.as_ref()
    }

    /// Check if an element is focused
    pub fn is_focused(&self, id: &str) -> bool {
        self.current.as_ref().is_some_and(|current| current.0 == id)
    }

    /// Set focus to a specific element
    pub fn set_focus(&mut self, id: impl Into<FocusId>) {
        self.current = Some(id.into());
        self.focus_changed = true;
    }

    /// Clear focus
    pub fn clear_focus(&mut self) {
        self.current = None;
        self.focus_changed = true;
    }

    /// Check if focus changed since last check
    pub fn take_focus_changed(&mut self) -> bool {
        let changed = self.focus_changed;
        self.focus_changed = false;
        changed
    }
}
