//! Visual state hooks for the rendering adapter.
//!
//! The control never touches presentation. Instead it exposes these enums
//! and the adapter translates them into whatever its surface uses for the
//! hover/selected/active appearance.

/// Visual state of a single list item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemVisual {
    /// Unchecked, not highlighted
    #[default]
    Normal,
    /// Checked, not highlighted
    Checked,
    /// Unchecked, highlighted for keyboard navigation
    Hovered,
    /// Checked and highlighted
    CheckedHovered,
}

impl ItemVisual {
    /// Combine the checked and hovered flags into a visual state.
    pub fn from_flags(checked: bool, hovered: bool) -> Self {
        match (checked, hovered) {
            (false, false) => Self::Normal,
            (true, false) => Self::Checked,
            (false, true) => Self::Hovered,
            (true, true) => Self::CheckedHovered,
        }
    }

    /// Whether this state includes the checked appearance.
    pub fn is_checked(self) -> bool {
        matches!(self, Self::Checked | Self::CheckedHovered)
    }

    /// Whether this state includes the hover highlight.
    pub fn is_hovered(self) -> bool {
        matches!(self, Self::Hovered | Self::CheckedHovered)
    }
}

/// Visual state of the monitor trigger surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MonitorVisual {
    /// List is closed
    #[default]
    Idle,
    /// List is open
    Active,
}
