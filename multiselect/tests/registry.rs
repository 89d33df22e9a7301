use multiselect::prelude::*;

fn control() -> MultiSelect {
    MultiSelect::with_items(vec![("a", "A"), ("b", "B")])
}

#[test]
fn test_register_and_deregister() {
    let mut registry = ControlRegistry::new();
    let menu = control();
    assert!(registry.is_empty());
    registry.register(&menu).unwrap();
    assert_eq!(registry.len(), 1);
    assert!(registry.get(menu.id()).is_some());
    assert!(registry.deregister(menu.id()));
    assert!(!registry.deregister(menu.id()));
    assert!(registry.is_empty());
}

#[test]
fn test_register_twice_fails() {
    let mut registry = ControlRegistry::new();
    let menu = control();
    registry.register(&menu).unwrap();
    let err = registry.register(&menu).unwrap_err();
    assert!(matches!(err, RegistryError::AlreadyRegistered { .. }));
}

#[test]
fn test_outside_click_dismisses_when_close_is_armed() {
    let cx = MenuContext::new();
    let mut registry = ControlRegistry::new();
    let menu = control();
    registry.register(&menu).unwrap();

    menu.open(&cx);
    // Pointer left the list, then a click landed elsewhere
    menu.handle_intent(MenuIntent::ListLeave, &cx);
    registry.document_click(&cx);
    assert!(!menu.is_open());
}

#[test]
fn test_outside_click_spares_control_after_pointer_reenters() {
    let cx = MenuContext::new();
    let mut registry = ControlRegistry::new();
    let menu = control();
    registry.register(&menu).unwrap();

    menu.open(&cx);
    menu.handle_intent(MenuIntent::ListLeave, &cx);
    menu.handle_intent(MenuIntent::ListEnter, &cx);
    registry.document_click(&cx);
    assert!(menu.is_open());
}

#[test]
fn test_outside_click_ignores_closed_controls() {
    let cx = MenuContext::new();
    let mut registry = ControlRegistry::new();
    let menu = control();
    registry.register(&menu).unwrap();

    menu.set_action(MenuAction::Close);
    registry.document_click(&cx);
    assert!(cx.drain_events().is_empty());
}

#[test]
fn test_dismissal_is_scoped_per_control() {
    let cx = MenuContext::new();
    let mut registry = ControlRegistry::new();
    let first = control();
    let second = control();
    registry.register(&first).unwrap();
    registry.register(&second).unwrap();

    first.open(&cx);
    second.open(&cx);
    first.handle_intent(MenuIntent::ListLeave, &cx);
    second.handle_intent(MenuIntent::ListEnter, &cx);
    registry.document_click(&cx);

    assert!(!first.is_open());
    assert!(second.is_open());
}

#[test]
fn test_document_mouse_up_ends_drag_everywhere() {
    let mut registry = ControlRegistry::new();
    let first = control();
    let second = control();
    registry.register(&first).unwrap();
    registry.register(&second).unwrap();

    first.set_active(true);
    second.set_active(true);
    registry.document_mouse_up();
    assert!(!first.is_active());
    assert!(!second.is_active());
}

#[test]
fn test_escape_cancels_open_controls_only() {
    let cx = MenuContext::new();
    let mut registry = ControlRegistry::new();
    let open_menu = control();
    let closed_menu = control();
    registry.register(&open_menu).unwrap();
    registry.register(&closed_menu).unwrap();

    open_menu.open(&cx);
    open_menu.hover(&cx, HoverTarget::Last);
    cx.drain_events();

    registry.escape_pressed(&cx);
    assert!(!open_menu.is_open());
    assert_eq!(open_menu.hovered_id(), None);
    // Only the open control emitted a close
    let events = cx.drain_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, MenuEventKind::ListClose);
    assert_eq!(events[0].widget_id, open_menu.id_string());
}
