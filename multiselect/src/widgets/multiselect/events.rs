//! Event handling for the MultiSelect widget.

use crate::context::MenuContext;
use crate::input::{Key, KeyCombo};
use crate::widgets::events::{Direction, EventResult, MenuIntent, WidgetEvents};

use super::state::{HoverTarget, MenuAction, MultiSelect};

impl MultiSelect {
    /// Apply a pre-decoded input intent.
    ///
    /// The adapter owns hit testing and raw event decoding; everything it
    /// learns arrives here as a [`MenuIntent`]. Document-level clicks,
    /// mouse-ups, and escape go through the
    /// [`ControlRegistry`](crate::registry::ControlRegistry) instead.
    pub fn handle_intent(&self, intent: MenuIntent, cx: &MenuContext) -> EventResult {
        match intent {
            MenuIntent::OpenRequested => {
                self.open(cx);
                EventResult::Consumed
            }
            MenuIntent::CloseRequested => {
                self.close(cx);
                EventResult::Consumed
            }
            MenuIntent::MonitorClicked => {
                self.toggle_menu(cx);
                EventResult::Consumed
            }
            MenuIntent::MonitorEnter | MenuIntent::ListEnter => {
                self.set_action(MenuAction::Open);
                EventResult::Consumed
            }
            MenuIntent::MonitorLeave => {
                self.set_action(MenuAction::Close);
                EventResult::Consumed
            }
            MenuIntent::ListLeave => {
                self.set_action(MenuAction::Close);
                self.hover(cx, HoverTarget::None);
                EventResult::Consumed
            }
            MenuIntent::ItemPressed(id) => {
                // Mouse down on an item starts a drag-select run.
                self.set_active(true);
                self.toggle_item(cx, &id);
                EventResult::Consumed
            }
            MenuIntent::ItemEntered(id) => {
                if self.is_active() {
                    self.toggle_item(cx, &id);
                }
                self.hover(cx, HoverTarget::Item(id));
                EventResult::Consumed
            }
            MenuIntent::DirectionKey(direction) => {
                if !self.is_open() {
                    return EventResult::Ignored;
                }
                let target = match direction {
                    Direction::Up => HoverTarget::Previous,
                    Direction::Down => HoverTarget::Next,
                };
                self.hover(cx, target);
                if self.is_active()
                    && let Some(id) = self.hovered_id()
                {
                    self.toggle_item(cx, &id);
                }
                EventResult::Consumed
            }
            MenuIntent::SelectKeyDown => {
                if !self.is_open() {
                    return EventResult::Ignored;
                }
                self.set_active(true);
                if let Some(id) = self.hovered_id() {
                    self.toggle_item(cx, &id);
                }
                EventResult::Consumed
            }
            MenuIntent::SelectKeyUp => {
                self.set_active(false);
                EventResult::Consumed
            }
            MenuIntent::EscapePressed => {
                self.cancel(cx);
                EventResult::Consumed
            }
        }
    }
}

impl WidgetEvents for MultiSelect {
    fn on_intent(&self, intent: MenuIntent, cx: &MenuContext) -> EventResult {
        self.handle_intent(intent, cx)
    }

    fn on_key(&self, key: &KeyCombo, cx: &MenuContext) -> EventResult {
        // Ignore keys with ctrl/alt modifiers
        if key.modifiers.ctrl || key.modifiers.alt {
            return EventResult::Ignored;
        }

        if !self.is_open() {
            // Closed state - open on Space, Enter, or an arrow key
            match key.key {
                Key::Enter | Key::Space | Key::Down | Key::Up => {
                    self.handle_intent(MenuIntent::OpenRequested, cx)
                }
                _ => EventResult::Ignored,
            }
        } else {
            // Open state - navigate and toggle
            match key.key {
                Key::Up => self.handle_intent(MenuIntent::DirectionKey(Direction::Up), cx),
                Key::Down => self.handle_intent(MenuIntent::DirectionKey(Direction::Down), cx),
                Key::Space => self.handle_intent(MenuIntent::SelectKeyDown, cx),
                Key::Enter => self.handle_intent(MenuIntent::CloseRequested, cx),
                Key::Escape => self.handle_intent(MenuIntent::EscapePressed, cx),
                Key::Home => {
                    self.hover(cx, HoverTarget::First);
                    EventResult::Consumed
                }
                Key::End => {
                    self.hover(cx, HoverTarget::Last);
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            }
        }
    }

    fn on_key_release(&self, key: &KeyCombo, cx: &MenuContext) -> EventResult {
        match key.key {
            Key::Space => self.handle_intent(MenuIntent::SelectKeyUp, cx),
            _ => EventResult::Ignored,
        }
    }
}
