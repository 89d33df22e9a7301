//! Form synchronization contract.
//!
//! Hosts that mirror checked state into form fields implement [`FormSync`]
//! and hand it to the control via [`MenuOptions`](super::MenuOptions). The
//! control calls it on every checked-state change for the changed item, and
//! on close for every item. The mechanics of the target fields stay on the
//! adapter side.

use super::item::MenuItem;

/// Receiver for checked-state mirroring.
///
/// `value` is the item's submit value when checked and the empty string
/// when unchecked.
pub trait FormSync: Send + Sync {
    /// Write one item's state to its sync target.
    fn sync(&self, item: &MenuItem, value: &str);
}

/// Compute the sync target name for an item.
///
/// With `php_style` the target carries the `[]` array suffix so repeated
/// fields aggregate server-side; otherwise each item gets an indexed name.
pub fn sync_field_name(base: &str, index: usize, php_style: bool) -> String {
    if php_style {
        format!("{base}[]")
    } else {
        format!("{base}{index}")
    }
}
