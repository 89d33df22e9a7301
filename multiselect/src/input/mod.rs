//! Input module - decoded key events handed to the control.

pub mod keys;

pub use keys::{Key, KeyCombo, Modifiers};
