//! Control registry for document-level dismissal.
//!
//! The source of these semantics wired ambient document listeners per
//! control. Here that becomes an explicit registry: controls register on
//! creation and deregister on disposal, and the adapter forwards
//! document-level clicks, mouse-ups, and escape to one place. Dismissal is
//! applied per control, so several controls may be open at once and a
//! click outside one does not disturb the others' checked state.

use thiserror::Error;

use crate::context::MenuContext;
use crate::widgets::multiselect::{MenuAction, MultiSelect, MultiSelectId};

/// Errors that can occur when registering a control.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// The control is already registered.
    #[error("control '{id}' is already registered")]
    AlreadyRegistered {
        /// The offending control id.
        id: String,
    },
}

/// Registry of live controls sharing the document-level input surface.
#[derive(Debug, Default)]
pub struct ControlRegistry {
    /// Registered controls in registration order.
    controls: Vec<MultiSelect>,
}

impl ControlRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a control.
    ///
    /// The registry keeps a state-sharing handle; the caller keeps using
    /// its own. Registering the same control twice is an error.
    pub fn register(&mut self, control: &MultiSelect) -> Result<(), RegistryError> {
        if self.controls.iter().any(|c| c.id() == control.id()) {
            return Err(RegistryError::AlreadyRegistered {
                id: control.id_string(),
            });
        }
        self.controls.push(control.clone());
        Ok(())
    }

    /// Deregister a control. Returns true if it was registered.
    pub fn deregister(&mut self, id: MultiSelectId) -> bool {
        let before = self.controls.len();
        self.controls.retain(|c| c.id() != id);
        self.controls.len() != before
    }

    /// Get a registered control by id.
    pub fn get(&self, id: MultiSelectId) -> Option<&MultiSelect> {
        self.controls.iter().find(|c| c.id() == id)
    }

    /// Get the number of registered controls.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Check if no controls are registered.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Iterate over registered controls.
    pub fn iter(&self) -> impl Iterator<Item = &MultiSelect> {
        self.controls.iter()
    }

    // -------------------------------------------------------------------------
    // Document-level input
    // -------------------------------------------------------------------------

    /// Handle a click anywhere in the document.
    ///
    /// Closes each open control whose pending action is `Close`, i.e. the
    /// pointer last left its interactive surfaces. The adapter must route
    /// pointer enter/leave to the controls before this runs.
    pub fn document_click(&self, cx: &MenuContext) {
        for control in &self.controls {
            if control.is_open() && control.action() == MenuAction::Close {
                control.close(cx);
            }
        }
    }

    /// Handle a mouse-up anywhere in the document.
    ///
    /// Ends every drag-select in progress.
    pub fn document_mouse_up(&self) {
        for control in &self.controls {
            control.set_active(false);
        }
    }

    /// Handle the escape key.
    ///
    /// Cancels every open control: the list closes and the hover clears.
    pub fn escape_pressed(&self, cx: &MenuContext) {
        for control in &self.controls {
            if control.is_open() {
                control.cancel(cx);
            }
        }
    }
}
