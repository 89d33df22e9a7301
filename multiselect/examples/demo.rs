//! MultiSelect Walkthrough
//!
//! Drives the control the way an adapter would: decoded keys and intents
//! go in, notifications come out, and the monitor text is printed after
//! each step.

use std::fs::File;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::LevelFilter;
use multiselect::prelude::*;
use simplelog::{Config, WriteLogger};

/// Prints sync calls the way a form adapter would mirror them.
struct PrintingSync;

impl FormSync for PrintingSync {
    fn sync(&self, item: &MenuItem, value: &str) {
        println!(
            "  sync {} = {:?}",
            sync_target(item),
            value
        );
    }
}

fn sync_target(item: &MenuItem) -> String {
    format!("toppings[{}]", item.id())
}

fn report(menu: &MultiSelect, cx: &MenuContext) {
    println!(
        "monitor: {:?} ({:?})",
        menu.monitor_text(),
        menu.monitor_visual()
    );
    for event in cx.drain_events() {
        println!("  event: {:?}", event.kind);
    }
}

fn main() {
    let _ = WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("demo.log").expect("create log file"),
    );

    let cx = MenuContext::new();
    let menu = MultiSelect::with_items(vec![
        ("cheese", "Extra cheese"),
        ("ham", "Ham"),
        ("olives", "Olives"),
        ("peppers", "Roasted peppers"),
    ])
    .with_options(
        MenuOptions::new()
            .max_monitor_text(24)
            .empty_text("Pick your toppings...")
            .form_sync(Arc::new(PrintingSync)),
    );

    let mut registry = ControlRegistry::new();
    registry.register(&menu).expect("register control");

    println!("-- initial");
    report(&menu, &cx);

    // A real adapter converts crossterm events at its boundary.
    println!("-- space opens the list");
    let space: KeyCombo = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE).into();
    menu.on_key(&space, &cx);
    report(&menu, &cx);

    println!("-- arrow down, then space toggles the hovered item");
    menu.on_key(&KeyCombo::key(Key::Down), &cx);
    menu.on_key(&KeyCombo::key(Key::Space), &cx);
    menu.on_key_release(&KeyCombo::key(Key::Space), &cx);
    report(&menu, &cx);

    println!("-- drag across two items with the pointer");
    menu.handle_intent(MenuIntent::ItemPressed("olives".to_string()), &cx);
    menu.handle_intent(MenuIntent::ItemEntered("peppers".to_string()), &cx);
    registry.document_mouse_up();
    report(&menu, &cx);

    println!("-- click outside dismisses and flushes the form");
    menu.handle_intent(MenuIntent::ListLeave, &cx);
    registry.document_click(&cx);
    report(&menu, &cx);
}
