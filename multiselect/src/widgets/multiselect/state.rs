//! MultiSelect widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::{debug, warn};

use crate::context::MenuContext;
use crate::style::{ItemVisual, MonitorVisual};
use crate::utils::text::summarize;
use crate::widgets::events::{MenuEvent, MenuEventKind};

use super::item::{MenuItem, MenuItemSource};
use super::options::MenuOptions;

/// Unique identifier for a MultiSelect widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MultiSelectId(usize);

impl MultiSelectId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for MultiSelectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__multiselect_{}", self.0)
    }
}

/// Pending intent consumed by the document-level dismiss pass.
///
/// Pointer-leave on the interactive surfaces arms `Close`; pointer-enter
/// re-arms `Open`. A document click observed while the intent is `Close`
/// dismisses the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuAction {
    /// Keep the list where it is on the next document click
    #[default]
    Open,
    /// Dismiss the list on the next document click
    Close,
}

/// Hover navigation target.
///
/// `Next`/`Previous` re-anchor at the boundary instead of wrapping: moving
/// down past the last item keeps the last item hovered, and moving up past
/// the first keeps the first. The same fallback applies when nothing is
/// hovered yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverTarget {
    /// Hover the first item
    First,
    /// Hover the last item
    Last,
    /// Hover the item after the current one
    Next,
    /// Hover the item before the current one
    Previous,
    /// Clear the hover
    None,
    /// Hover exactly this item
    Item(String),
}

/// Internal state for a MultiSelect widget.
#[derive(Debug)]
struct MenuInner {
    /// Items in display order
    items: Vec<MenuItem>,
    /// Index of the hovered item, if any
    hovered: Option<usize>,
    /// Pending action for the document-level dismiss pass
    action: MenuAction,
    /// Configuration
    options: MenuOptions,
}

impl Default for MenuInner {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            hovered: None,
            action: MenuAction::Open,
            options: MenuOptions::default(),
        }
    }
}

/// A multi-select dropdown control with reactive state.
///
/// `MultiSelect` turns an ordered set of checkbox+label pairs into one
/// dropdown-style control. The monitor surface shows a summary of the
/// checked items; opening the list allows toggling any number of them by
/// keyboard or pointer.
///
/// # Example
///
/// ```ignore
/// let cx = MenuContext::new();
/// let toppings = MultiSelect::with_items(vec!["Cheese", "Ham", "Olives"]);
///
/// toppings.open(&cx);
/// toppings.toggle_item(&cx, "Cheese");
/// assert_eq!(toppings.monitor_text(), "Cheese");
/// ```
#[derive(Debug)]
pub struct MultiSelect {
    /// Unique identifier for this control instance
    id: MultiSelectId,
    /// Internal state
    inner: Arc<RwLock<MenuInner>>,
    /// Whether the item list is open
    open: Arc<AtomicBool>,
    /// Whether a drag-select is in progress
    active: Arc<AtomicBool>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl MultiSelect {
    /// Create a new control with no items.
    pub fn new() -> Self {
        Self {
            id: MultiSelectId::new(),
            inner: Arc::new(RwLock::new(MenuInner::default())),
            open: Arc::new(AtomicBool::new(false)),
            active: Arc::new(AtomicBool::new(false)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a control from item sources.
    ///
    /// Items keep their given order. A source whose id collides with an
    /// earlier one is dropped with a warning; ids are unique per control.
    pub fn with_items<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: MenuItemSource,
    {
        let mut list: Vec<MenuItem> = Vec::new();
        for source in items {
            let item = MenuItem::from_source(&source);
            if list.iter().any(|existing| existing.id() == item.id()) {
                warn!("multiselect: duplicate item id '{}' dropped", item.id());
                continue;
            }
            list.push(item);
        }

        Self {
            id: MultiSelectId::new(),
            inner: Arc::new(RwLock::new(MenuInner {
                items: list,
                ..Default::default()
            })),
            open: Arc::new(AtomicBool::new(false)),
            active: Arc::new(AtomicBool::new(false)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Replace the configuration.
    pub fn with_options(self, options: MenuOptions) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.options = options;
        }
        self
    }

    /// Get the unique ID for this control.
    pub fn id(&self) -> MultiSelectId {
        self.id
    }

    /// Get the ID as a string (for focus and event targeting).
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Item access
    // -------------------------------------------------------------------------

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.items.len()).unwrap_or(0)
    }

    /// Check if the control has no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get all items in display order.
    pub fn items(&self) -> Vec<MenuItem> {
        self.inner.read().map(|g| g.items.clone()).unwrap_or_default()
    }

    /// Get an item by id.
    pub fn item(&self, id: &str) -> Option<MenuItem> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.items.iter().find(|it| it.id() == id).cloned())
    }

    /// Get the ids of all checked items in display order.
    pub fn checked_ids(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| {
                g.items
                    .iter()
                    .filter(|it| it.is_checked())
                    .map(|it| it.id().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    /// Check if the item list is open.
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Open the item list.
    ///
    /// Only transitions from the closed state; redundant calls are no-ops.
    /// Hovers the first item and emits [`MenuEventKind::ListOpen`].
    pub fn open(&self, cx: &MenuContext) {
        if !self.open.swap(true, Ordering::SeqCst) {
            debug!("{} list open", self.id);
            self.hover(cx, HoverTarget::First);
            self.dirty.store(true, Ordering::SeqCst);
            cx.push_event(MenuEvent::new(MenuEventKind::ListOpen, self.id_string()));
        }
    }

    /// Close the item list.
    ///
    /// Runs from any state. Resets the drag flag and the pending action to
    /// their initial values, flushes form sync when configured, and emits
    /// [`MenuEventKind::ListClose`].
    pub fn close(&self, cx: &MenuContext) {
        if self.open.swap(false, Ordering::SeqCst) {
            debug!("{} list close", self.id);
        }
        self.active.store(false, Ordering::SeqCst);
        if let Ok(mut guard) = self.inner.write() {
            guard.action = MenuAction::Open;
        }
        self.flush_sync();
        self.dirty.store(true, Ordering::SeqCst);
        cx.push_event(MenuEvent::new(MenuEventKind::ListClose, self.id_string()));
    }

    /// Toggle the item list open/closed.
    pub fn toggle_menu(&self, cx: &MenuContext) {
        if self.is_open() {
            self.close(cx);
        } else {
            self.open(cx);
        }
    }

    /// Cancel the interaction: close the list and clear the hover.
    ///
    /// This is the escape-key contract.
    pub fn cancel(&self, cx: &MenuContext) {
        self.close(cx);
        self.hover(cx, HoverTarget::None);
    }

    // -------------------------------------------------------------------------
    // Dismiss bookkeeping
    // -------------------------------------------------------------------------

    /// Get the pending action for the document-level dismiss pass.
    pub fn action(&self) -> MenuAction {
        self.inner
            .read()
            .map(|g| g.action)
            .unwrap_or(MenuAction::Open)
    }

    /// Set the pending action.
    ///
    /// The adapter arms `Close` when the pointer leaves the interactive
    /// surfaces and `Open` when it re-enters, before any document click is
    /// dispatched.
    pub fn set_action(&self, action: MenuAction) {
        if let Ok(mut guard) = self.inner.write() {
            guard.action = action;
        }
    }

    /// Check if a drag-select is in progress.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Set the drag-select flag.
    ///
    /// While set, entering an item toggles it. Cleared on document-level
    /// mouse-up and on selection-key release.
    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Hover navigation
    // -------------------------------------------------------------------------

    /// Get the hovered item, if any.
    pub fn hovered(&self) -> Option<MenuItem> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.hovered.and_then(|i| g.items.get(i).cloned()))
    }

    /// Get the hovered item's id, if any.
    pub fn hovered_id(&self) -> Option<String> {
        self.hovered().map(|item| item.id().to_string())
    }

    /// Move the hover highlight.
    ///
    /// The newly hovered item receives input focus through the context so
    /// keyboard navigation follows the highlight. A target naming an item
    /// not present in this control is a no-op.
    pub fn hover(&self, cx: &MenuContext, target: HoverTarget) {
        let focus_id = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            let count = guard.items.len();
            let current = guard.hovered;

            let next = match target {
                HoverTarget::None => None,
                HoverTarget::First => (count > 0).then_some(0),
                HoverTarget::Last => count.checked_sub(1),
                HoverTarget::Next => match current {
                    // Re-anchor at the end instead of wrapping.
                    Some(i) if i + 1 < count => Some(i + 1),
                    _ => count.checked_sub(1),
                },
                HoverTarget::Previous => match current {
                    Some(i) if i > 0 => Some(i - 1),
                    _ => (count > 0).then_some(0),
                },
                HoverTarget::Item(ref id) => {
                    match guard.items.iter().position(|it| it.id() == id) {
                        Some(i) => Some(i),
                        // Unknown item: keep the current hover untouched.
                        None => return,
                    }
                }
            };

            guard.hovered = next;
            next.and_then(|i| guard.items.get(i))
                .map(|it| it.id().to_string())
        };

        if let Some(id) = focus_id {
            cx.focus(id);
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Checked state
    // -------------------------------------------------------------------------

    /// Flip an item's checked state.
    ///
    /// Emits [`MenuEventKind::ItemChanged`] carrying the item id and syncs
    /// the item when form sync is configured. Unknown or disabled items are
    /// silent no-ops; any number of items may be checked at once.
    pub fn toggle_item(&self, cx: &MenuContext, id: &str) {
        let changed = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            match guard.items.iter_mut().find(|it| it.id() == id) {
                Some(item) if item.is_enabled() => {
                    let checked = !item.is_checked();
                    item.set_checked(checked);
                    debug!("{} item '{}' checked={}", self.id, id, checked);
                    true
                }
                _ => false,
            }
        };

        if changed {
            self.dirty.store(true, Ordering::SeqCst);
            self.sync_item(id);
            cx.push_event(MenuEvent::item_changed(self.id_string(), id));
        }
    }

    /// Set an item's checked state programmatically.
    ///
    /// Intended for seeding initial state; emits no event and bypasses the
    /// enabled check.
    pub fn set_checked(&self, id: &str, checked: bool) {
        if let Ok(mut guard) = self.inner.write()
            && let Some(item) = guard.items.iter_mut().find(|it| it.id() == id)
            && item.is_checked() != checked
        {
            item.set_checked(checked);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Monitor summary
    // -------------------------------------------------------------------------

    /// Compute the monitor text from the checked items.
    ///
    /// Recomputed on every call; never cached across a checked-state
    /// change.
    pub fn monitor_text(&self) -> String {
        let Ok(guard) = self.inner.read() else {
            return String::new();
        };
        let labels: Vec<&str> = guard
            .items
            .iter()
            .filter(|it| it.is_checked())
            .map(|it| it.label())
            .collect();
        summarize(
            &labels,
            guard.options.max_monitor_text,
            &guard.options.empty_text,
        )
    }

    // -------------------------------------------------------------------------
    // Visual state
    // -------------------------------------------------------------------------

    /// Get the visual state for an item, or `None` for unknown ids.
    pub fn item_visual(&self, id: &str) -> Option<ItemVisual> {
        self.inner.read().ok().and_then(|g| {
            let index = g.items.iter().position(|it| it.id() == id)?;
            Some(ItemVisual::from_flags(
                g.items[index].is_checked(),
                g.hovered == Some(index),
            ))
        })
    }

    /// Get the visual state for the monitor surface.
    pub fn monitor_visual(&self) -> MonitorVisual {
        if self.is_open() {
            MonitorVisual::Active
        } else {
            MonitorVisual::Idle
        }
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Get a copy of the configuration.
    pub fn options(&self) -> MenuOptions {
        self.inner
            .read()
            .map(|g| g.options.clone())
            .unwrap_or_default()
    }

    /// Get the height hint for the rendering adapter.
    pub fn max_height(&self) -> Option<u16> {
        self.inner
            .read()
            .map(|g| g.options.max_height)
            .unwrap_or(None)
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the control state has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Form sync
    // -------------------------------------------------------------------------

    /// Sync a single item after a checked-state change.
    fn sync_item(&self, id: &str) {
        let Some((sync, item)) = self.inner.read().ok().and_then(|g| {
            let sync = g.options.form_sync.clone()?;
            let item = g.items.iter().find(|it| it.id() == id).cloned()?;
            Some((sync, item))
        }) else {
            return;
        };
        // The receiver runs outside the lock so it may call back in.
        let value = if item.is_checked() { item.value() } else { "" };
        sync.sync(&item, value);
    }

    /// Flush every item's checked value to the sync targets.
    fn flush_sync(&self) {
        let Some((sync, items)) = self.inner.read().ok().and_then(|g| {
            let sync = g.options.form_sync.clone()?;
            Some((sync, g.items.clone()))
        }) else {
            return;
        };
        for item in &items {
            let value = if item.is_checked() { item.value() } else { "" };
            sync.sync(item, value);
        }
    }
}

impl Clone for MultiSelect {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            open: Arc::clone(&self.open),
            active: Arc::clone(&self.active),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for MultiSelect {
    fn default() -> Self {
        Self::new()
    }
}
