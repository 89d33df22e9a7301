pub mod context;
pub mod focus;
pub mod input;
pub mod registry;
pub mod style;
pub mod utils;
pub mod widgets;

pub use registry::ControlRegistry;

pub mod prelude {
    pub use crate::context::MenuContext;
    pub use crate::focus::{FocusId, FocusState};
    pub use crate::input::{Key, KeyCombo, Modifiers};
    pub use crate::registry::{ControlRegistry, RegistryError};
    pub use crate::style::{ItemVisual, MonitorVisual};
    pub use crate::widgets::events::{
        Direction, EventResult, MenuEvent, MenuEventKind, MenuIntent, WidgetEvents,
    };
    pub use crate::widgets::multiselect::{
        FormSync, HoverTarget, MenuAction, MenuItem, MenuItemSource, MenuOptions, MultiSelect,
        MultiSelectId,
    };
}
