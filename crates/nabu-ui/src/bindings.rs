use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::command::Command;
use crate::state::{SharedState, StateKind};
use crate::toolkit::WidgetHandle;

// ── Bindings ──────────────────────────────────────────────────────────────

/// The binding registry populated during one render pass: `id` → widget,
/// variable name → state cell, plus the queue button clicks push commands
/// onto.
///
/// Owned by the caller and passed explicitly through the render call tree —
/// there is no global registry. Its lifetime is one render pass: the owner
/// destroys the previous widget subtree and calls [`clear`](Bindings::clear)
/// before rendering again.
pub struct Bindings {
    widgets: HashMap<String, WidgetHandle>,
    variables: HashMap<String, SharedState>,
    events: Rc<RefCell<Vec<Command>>>,
}

impl Bindings {
    pub fn new() -> Self {
        Self {
            widgets: HashMap::new(),
            variables: HashMap::new(),
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }

    // ── widgets ───────────────────────────────────────────────────────────

    /// The widget registered under `id`, if any.
    pub fn widget(&self, id: &str) -> Option<&WidgetHandle> {
        self.widgets.get(id)
    }

    pub fn widget_ids(&self) -> impl Iterator<Item = &str> {
        self.widgets.keys().map(String::as_str)
    }

    /// Register a widget under `id`. A repeated id overwrites the previous
    /// entry — last write wins.
    pub(crate) fn insert_widget(&mut self, id: impl Into<String>, handle: WidgetHandle) {
        self.widgets.insert(id.into(), handle);
    }

    // ── variables ─────────────────────────────────────────────────────────

    /// The state cell registered under `name`, if any.
    pub fn variable(&self, name: &str) -> Option<&SharedState> {
        self.variables.get(name)
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, &SharedState)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The cell for `name`, lazily created with `kind` on first reference.
    /// A later reference with a different kind reuses the existing cell —
    /// best effort, logged, never fatal.
    pub(crate) fn variable_or_create(&mut self, name: &str, kind: StateKind) -> SharedState {
        if let Some(cell) = self.variables.get(name) {
            if cell.kind() != kind {
                log::warn!(
                    "variable {name:?} already holds {:?} state, requested {kind:?}; reusing",
                    cell.kind()
                );
            }
            return cell.clone();
        }
        let cell = match kind {
            StateKind::Text => SharedState::text(),
            StateKind::Flag => SharedState::flag(),
        };
        self.variables.insert(name.to_string(), cell.clone());
        cell
    }

    // ── events ────────────────────────────────────────────────────────────

    /// The queue button callbacks push resolved commands onto. Cloned into
    /// each button's closure at render time.
    pub(crate) fn event_sink(&self) -> Rc<RefCell<Vec<Command>>> {
        Rc::clone(&self.events)
    }

    /// Drain all commands queued since the last call.
    pub fn take_events(&self) -> Vec<Command> {
        self.events.borrow_mut().drain(..).collect()
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Empty the maps and the event queue. The owner is responsible for
    /// destroying the widget subtree first; after `clear` no stale widget,
    /// cell, or queued command is observable.
    pub fn clear(&mut self) {
        self.widgets.clear();
        self.variables.clear();
        self.events.borrow_mut().clear();
    }
}

impl Default for Bindings {
    fn default() -> Self {
        Self::new()
    }
}
