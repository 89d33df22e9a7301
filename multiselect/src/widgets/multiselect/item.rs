//! Items managed by a MultiSelect control.

/// One checkbox+label pair in the list.
///
/// Items are created when the control is built and only their checked
/// state mutates afterwards. Identifiers are unique within one control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Stable identifier
    id: String,
    /// Display label
    label: String,
    /// Submit value flushed by form sync when checked
    value: String,
    /// Checked state
    checked: bool,
    /// Disabled items stay visible but cannot be toggled
    enabled: bool,
}

impl MenuItem {
    /// Create an unchecked item. The submit value defaults to the id.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            value: id.clone(),
            id,
            label: label.into(),
            checked: false,
            enabled: true,
        }
    }

    /// Set the submit value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the initial checked state.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Enable or disable the item.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Get the item identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the submit value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Check if the item is checked.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Check if the item can be toggled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }
}

/// Trait for values that can build items in a MultiSelect control.
///
/// # Example
///
/// ```ignore
/// struct Topping {
///     id: u32,
///     name: String,
/// }
///
/// impl MenuItemSource for Topping {
///     fn menu_id(&self) -> String {
///         self.id.to_string()
///     }
///
///     fn menu_label(&self) -> String {
///         self.name.clone()
///     }
/// }
/// ```
pub trait MenuItemSource {
    /// Unique identifier for this item.
    fn menu_id(&self) -> String;

    /// Display text for this item.
    fn menu_label(&self) -> String;

    /// Submit value for form sync. Defaults to the identifier.
    fn menu_value(&self) -> String {
        self.menu_id()
    }

    /// Initial checked state. Defaults to unchecked.
    fn menu_checked(&self) -> bool {
        false
    }

    /// Whether the item can be toggled. Defaults to enabled.
    fn menu_enabled(&self) -> bool {
        true
    }
}

impl MenuItemSource for String {
    fn menu_id(&self) -> String {
        self.clone()
    }

    fn menu_label(&self) -> String {
        self.clone()
    }
}

impl MenuItemSource for &str {
    fn menu_id(&self) -> String {
        (*self).to_string()
    }

    fn menu_label(&self) -> String {
        (*self).to_string()
    }
}

// Implement for (id, label) tuples
impl<S1, S2> MenuItemSource for (S1, S2)
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    fn menu_id(&self) -> String {
        self.0.as_ref().to_string()
    }

    fn menu_label(&self) -> String {
        self.1.as_ref().to_string()
    }
}

impl MenuItemSource for MenuItem {
    fn menu_id(&self) -> String {
        self.id.clone()
    }

    fn menu_label(&self) -> String {
        self.label.clone()
    }

    fn menu_value(&self) -> String {
        self.value.clone()
    }

    fn menu_checked(&self) -> bool {
        self.checked
    }

    fn menu_enabled(&self) -> bool {
        self.enabled
    }
}

impl MenuItem {
    /// Build an item from any source value.
    pub fn from_source<S: MenuItemSource>(source: &S) -> Self {
        MenuItem::new(source.menu_id(), source.menu_label())
            .with_value(source.menu_value())
            .with_checked(source.menu_checked())
            .with_enabled(source.menu_enabled())
    }
}
