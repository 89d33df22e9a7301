//! Widgets - the multi-select control and its event types.

pub mod events;
pub mod multiselect;

pub use events::{Direction, EventResult, MenuEvent, MenuEventKind, MenuIntent, WidgetEvents};
pub use multiselect::{
    FormSync, HoverTarget, MenuAction, MenuItem, MenuItemSource, MenuOptions, MultiSelect,
    MultiSelectId,
};
