use multiselect::prelude::*;

fn control() -> MultiSelect {
    MultiSelect::with_items(vec![("a", "A"), ("b", "B"), ("c", "C")])
}

fn kinds(cx: &MenuContext) -> Vec<MenuEventKind> {
    cx.drain_events().into_iter().map(|e| e.kind).collect()
}

#[test]
fn test_initial_state() {
    let menu = control();
    assert!(!menu.is_open());
    assert!(!menu.is_active());
    assert_eq!(menu.action(), MenuAction::Open);
    assert_eq!(menu.hovered_id(), None);
}

#[test]
fn test_open_emits_list_open() {
    let cx = MenuContext::new();
    let menu = control();
    menu.open(&cx);
    assert!(menu.is_open());
    assert_eq!(kinds(&cx), vec![MenuEventKind::ListOpen]);
}

#[test]
fn test_redundant_open_is_a_no_op() {
    let cx = MenuContext::new();
    let menu = control();
    menu.open(&cx);
    menu.open(&cx);
    assert_eq!(kinds(&cx), vec![MenuEventKind::ListOpen]);
}

#[test]
fn test_open_then_close_emits_in_order_and_resets_flags() {
    let cx = MenuContext::new();
    let menu = control();
    menu.open(&cx);
    menu.set_active(true);
    menu.set_action(MenuAction::Close);
    menu.close(&cx);

    assert_eq!(
        kinds(&cx),
        vec![MenuEventKind::ListOpen, MenuEventKind::ListClose]
    );
    assert!(!menu.is_open());
    assert!(!menu.is_active());
    assert_eq!(menu.action(), MenuAction::Open);
}

#[test]
fn test_no_spontaneous_transitions() {
    let cx = MenuContext::new();
    let menu = control();
    menu.open(&cx);
    menu.toggle_item(&cx, "a");
    menu.hover(&cx, HoverTarget::Next);
    menu.set_action(MenuAction::Close);
    assert!(menu.is_open());
    menu.close(&cx);
    assert!(!menu.is_open());
}

#[test]
fn test_toggle_menu_alternates() {
    let cx = MenuContext::new();
    let menu = control();
    menu.toggle_menu(&cx);
    assert!(menu.is_open());
    menu.toggle_menu(&cx);
    assert!(!menu.is_open());
}

#[test]
fn test_toggle_item_flips_state_and_emits() {
    let cx = MenuContext::new();
    let menu = control();
    menu.toggle_item(&cx, "b");
    assert!(menu.item("b").is_some_and(|it| it.is_checked()));

    let events = cx.drain_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, MenuEventKind::ItemChanged);
    assert_eq!(events[0].item_id.as_deref(), Some("b"));

    menu.toggle_item(&cx, "b");
    assert!(menu.item("b").is_some_and(|it| !it.is_checked()));
}

#[test]
fn test_toggle_unknown_item_is_silent() {
    let cx = MenuContext::new();
    let menu = control();
    menu.toggle_item(&cx, "missing");
    assert!(cx.drain_events().is_empty());
}

#[test]
fn test_toggle_disabled_item_is_silent() {
    let cx = MenuContext::new();
    let menu = MultiSelect::with_items(vec![
        MenuItem::new("a", "A"),
        MenuItem::new("b", "B").with_enabled(false),
    ]);
    menu.toggle_item(&cx, "b");
    assert!(menu.item("b").is_some_and(|it| !it.is_checked()));
    assert!(cx.drain_events().is_empty());
}

#[test]
fn test_multiple_items_may_be_checked() {
    let cx = MenuContext::new();
    let menu = control();
    menu.toggle_item(&cx, "a");
    menu.toggle_item(&cx, "b");
    menu.toggle_item(&cx, "c");
    assert_eq!(menu.checked_ids(), vec!["a", "b", "c"]);
}

#[test]
fn test_escape_closes_and_clears_hover() {
    let cx = MenuContext::new();
    let menu = control();
    menu.open(&cx);
    menu.hover(&cx, HoverTarget::Item("b".to_string()));
    let result = menu.handle_intent(MenuIntent::EscapePressed, &cx);
    assert!(result.is_handled());
    assert!(!menu.is_open());
    assert_eq!(menu.hovered_id(), None);
}

#[test]
fn test_drag_select_toggles_entered_items() {
    let cx = MenuContext::new();
    let menu = control();
    menu.open(&cx);
    menu.handle_intent(MenuIntent::ItemPressed("a".to_string()), &cx);
    assert!(menu.is_active());
    menu.handle_intent(MenuIntent::ItemEntered("b".to_string()), &cx);
    assert_eq!(menu.checked_ids(), vec!["a", "b"]);

    // After the drag ends, entering an item only hovers it
    menu.handle_intent(MenuIntent::SelectKeyUp, &cx);
    menu.handle_intent(MenuIntent::ItemEntered("c".to_string()), &cx);
    assert_eq!(menu.checked_ids(), vec!["a", "b"]);
    assert_eq!(menu.hovered_id().as_deref(), Some("c"));
}

#[test]
fn test_keyboard_drag_toggles_along_the_way() {
    let cx = MenuContext::new();
    let menu = control();
    menu.open(&cx);
    // Space toggles the hovered item and starts the drag run
    menu.handle_intent(MenuIntent::SelectKeyDown, &cx);
    assert_eq!(menu.checked_ids(), vec!["a"]);
    menu.handle_intent(MenuIntent::DirectionKey(Direction::Down), &cx);
    assert_eq!(menu.checked_ids(), vec!["a", "b"]);
    menu.handle_intent(MenuIntent::SelectKeyUp, &cx);
    menu.handle_intent(MenuIntent::DirectionKey(Direction::Down), &cx);
    assert_eq!(menu.checked_ids(), vec!["a", "b"]);
    assert_eq!(menu.hovered_id().as_deref(), Some("c"));
}

#[test]
fn test_key_handling_closed_state_opens() {
    let cx = MenuContext::new();
    let menu = control();
    let result = menu.on_key(&KeyCombo::key(Key::Space), &cx);
    assert!(result.is_handled());
    assert!(menu.is_open());
}

#[test]
fn test_key_handling_ignores_modified_keys() {
    let cx = MenuContext::new();
    let menu = control();
    let result = menu.on_key(&KeyCombo::key(Key::Space).ctrl(), &cx);
    assert_eq!(result, EventResult::Ignored);
    assert!(!menu.is_open());
}

#[test]
fn test_key_handling_open_state_navigates_and_toggles() {
    let cx = MenuContext::new();
    let menu = control();
    menu.on_key(&KeyCombo::key(Key::Down), &cx);
    assert!(menu.is_open());
    assert_eq!(menu.hovered_id().as_deref(), Some("a"));

    menu.on_key(&KeyCombo::key(Key::Down), &cx);
    assert_eq!(menu.hovered_id().as_deref(), Some("b"));

    menu.on_key(&KeyCombo::key(Key::Space), &cx);
    assert_eq!(menu.checked_ids(), vec!["b"]);
    menu.on_key_release(&KeyCombo::key(Key::Space), &cx);
    assert!(!menu.is_active());

    menu.on_key(&KeyCombo::key(Key::Escape), &cx);
    assert!(!menu.is_open());
}

#[test]
fn test_enter_closes_open_list() {
    let cx = MenuContext::new();
    let menu = control();
    menu.open(&cx);
    menu.on_key(&KeyCombo::key(Key::Enter), &cx);
    assert!(!menu.is_open());
}

#[test]
fn test_visual_states() {
    let cx = MenuContext::new();
    let menu = control();
    assert_eq!(menu.monitor_visual(), MonitorVisual::Idle);
    menu.open(&cx);
    assert_eq!(menu.monitor_visual(), MonitorVisual::Active);

    // Opening hovers the first item
    assert_eq!(menu.item_visual("a"), Some(ItemVisual::Hovered));
    menu.toggle_item(&cx, "a");
    assert_eq!(menu.item_visual("a"), Some(ItemVisual::CheckedHovered));
    menu.hover(&cx, HoverTarget::Next);
    assert_eq!(menu.item_visual("a"), Some(ItemVisual::Checked));
    assert_eq!(menu.item_visual("b"), Some(ItemVisual::Hovered));
    assert_eq!(menu.item_visual("missing"), None);
}

#[test]
fn test_duplicate_item_ids_are_dropped() {
    let menu = MultiSelect::with_items(vec![("a", "A"), ("a", "Again"), ("b", "B")]);
    assert_eq!(menu.len(), 2);
    assert!(menu.item("a").is_some_and(|it| it.label() == "A"));
}

#[test]
fn test_dirty_tracking() {
    let cx = MenuContext::new();
    let menu = control();
    assert!(!menu.is_dirty());
    menu.open(&cx);
    assert!(menu.is_dirty());
    menu.clear_dirty();
    assert!(!menu.is_dirty());
    menu.toggle_item(&cx, "a");
    assert!(menu.is_dirty());
}
