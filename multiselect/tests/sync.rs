use std::sync::{Arc, Mutex};

use multiselect::prelude::*;
use multiselect::widgets::multiselect::sync_field_name;

/// Records every sync call as an (item id, value) pair.
#[derive(Default)]
struct RecordingSync {
    calls: Mutex<Vec<(String, String)>>,
}

impl FormSync for RecordingSync {
    fn sync(&self, item: &MenuItem, value: &str) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((item.id().to_string(), value.to_string()));
        }
    }
}

impl RecordingSync {
    fn take(&self) -> Vec<(String, String)> {
        self.calls
            .lock()
            .map(|mut calls| std::mem::take(&mut *calls))
            .unwrap_or_default()
    }
}

fn control_with_sync() -> (MultiSelect, Arc<RecordingSync>) {
    let sync = Arc::new(RecordingSync::default());
    let menu = MultiSelect::with_items(vec![
        MenuItem::new("a", "A").with_value("alpha"),
        MenuItem::new("b", "B").with_value("beta"),
    ])
    .with_options(MenuOptions::new().form_sync(sync.clone()));
    (menu, sync)
}

#[test]
fn test_toggle_syncs_the_changed_item() {
    let cx = MenuContext::new();
    let (menu, sync) = control_with_sync();

    menu.toggle_item(&cx, "a");
    assert_eq!(sync.take(), vec![("a".to_string(), "alpha".to_string())]);

    menu.toggle_item(&cx, "a");
    assert_eq!(sync.take(), vec![("a".to_string(), String::new())]);
}

#[test]
fn test_close_flushes_every_item() {
    let cx = MenuContext::new();
    let (menu, sync) = control_with_sync();

    menu.open(&cx);
    menu.toggle_item(&cx, "b");
    sync.take();

    menu.close(&cx);
    assert_eq!(
        sync.take(),
        vec![
            ("a".to_string(), String::new()),
            ("b".to_string(), "beta".to_string()),
        ]
    );
}

#[test]
fn test_no_sync_configured_is_fine() {
    let cx = MenuContext::new();
    let menu = MultiSelect::with_items(vec![("a", "A")]);
    menu.toggle_item(&cx, "a");
    menu.close(&cx);
    assert_eq!(menu.checked_ids(), vec!["a"]);
}

#[test]
fn test_sync_field_names() {
    assert_eq!(sync_field_name("toppings", 0, true), "toppings[]");
    assert_eq!(sync_field_name("toppings", 1, true), "toppings[]");
    assert_eq!(sync_field_name("toppings", 0, false), "toppings0");
    assert_eq!(sync_field_name("toppings", 2, false), "toppings2");
}
