//! MultiSelect widget - a checkbox set behind a single dropdown monitor.
//!
//! The control owns the interaction state machine only: open/close
//! lifecycle, hover navigation, checked state, and the summarized monitor
//! text. Rendering and raw event plumbing live in the adapter.

pub mod events;
pub mod item;
pub mod options;
mod state;
pub mod sync;

pub use item::{MenuItem, MenuItemSource};
pub use options::MenuOptions;
pub use state::{HoverTarget, MenuAction, MultiSelect, MultiSelectId};
pub use sync::{FormSync, sync_field_name};
