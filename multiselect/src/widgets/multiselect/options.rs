//! MultiSelect configuration.

use std::fmt;
use std::sync::Arc;

use super::sync::FormSync;

/// Per-control configuration.
#[derive(Clone)]
pub struct MenuOptions {
    /// Character budget for the monitor text; 0 disables truncation.
    pub max_monitor_text: usize,

    /// Monitor text shown when no items are checked.
    pub empty_text: String,

    /// Height hint forwarded to the rendering adapter. Unused by the
    /// control itself.
    pub max_height: Option<u16>,

    /// Checked-state mirroring target, if the host wants one.
    pub form_sync: Option<Arc<dyn FormSync>>,

    /// Use `name[]`-style sync target names instead of indexed ones.
    pub php_style_array_names: bool,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            max_monitor_text: 16,
            empty_text: "Select options...".to_string(),
            max_height: None,
            form_sync: None,
            php_style_array_names: false,
        }
    }
}

impl MenuOptions {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the monitor text budget (0 disables truncation).
    pub fn max_monitor_text(mut self, max: usize) -> Self {
        self.max_monitor_text = max;
        self
    }

    /// Set the empty-selection monitor text.
    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// Set the height hint for the rendering adapter.
    pub fn max_height(mut self, height: u16) -> Self {
        self.max_height = Some(height);
        self
    }

    /// Install a form sync receiver.
    pub fn form_sync(mut self, sync: Arc<dyn FormSync>) -> Self {
        self.form_sync = Some(sync);
        self
    }

    /// Use PHP-style array names for sync targets.
    pub fn php_style_array_names(mut self) -> Self {
        self.php_style_array_names = true;
        self
    }
}

impl fmt::Debug for MenuOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuOptions")
            .field("max_monitor_text", &self.max_monitor_text)
            .field("empty_text", &self.empty_text)
            .field("max_height", &self.max_height)
            .field("form_sync", &self.form_sync.is_some())
            .field("php_style_array_names", &self.php_style_array_names)
            .finish()
    }
}
