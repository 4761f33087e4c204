use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

// ── StateValue ────────────────────────────────────────────────────────────

/// The value held by a [`SharedState`] cell.
#[derive(Debug, Clone, PartialEq)]
pub enum StateValue {
    /// String state, shared by radio buttons with a common `variable`.
    Text(String),
    /// Boolean state, owned by a checkbox.
    Flag(bool),
}

/// Which variant a cell currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    Text,
    Flag,
}

// ── SharedState ───────────────────────────────────────────────────────────

/// A boxed value cell observed by any number of widgets.
///
/// Cloning is cheap and clones observe the same value. The cell outlives
/// every widget that writes it — the value stays readable until the owning
/// registry is reset.
#[derive(Clone)]
pub struct SharedState(Rc<RefCell<StateValue>>);

impl SharedState {
    /// A fresh string cell, initially empty.
    pub fn text() -> Self {
        Self(Rc::new(RefCell::new(StateValue::Text(String::new()))))
    }

    /// A fresh boolean cell, initially `false`.
    pub fn flag() -> Self {
        Self(Rc::new(RefCell::new(StateValue::Flag(false))))
    }

    pub fn kind(&self) -> StateKind {
        match *self.0.borrow() {
            StateValue::Text(_) => StateKind::Text,
            StateValue::Flag(_) => StateKind::Flag,
        }
    }

    /// The string value, or `None` when the cell holds a flag.
    pub fn get_text(&self) -> Option<String> {
        match &*self.0.borrow() {
            StateValue::Text(s) => Some(s.clone()),
            StateValue::Flag(_) => None,
        }
    }

    /// The boolean value; a string cell reads as `false`.
    pub fn get_flag(&self) -> bool {
        matches!(*self.0.borrow(), StateValue::Flag(true))
    }

    /// Overwrite with a string value. The cell becomes a string cell.
    pub fn set_text(&self, v: impl Into<String>) {
        *self.0.borrow_mut() = StateValue::Text(v.into());
    }

    /// Overwrite with a boolean value. The cell becomes a flag cell.
    pub fn set_flag(&self, v: bool) {
        *self.0.borrow_mut() = StateValue::Flag(v);
    }

    /// Reset to the empty value of the current kind (`""` / `false`).
    pub fn reset(&self) {
        let mut value = self.0.borrow_mut();
        *value = match *value {
            StateValue::Text(_) => StateValue::Text(String::new()),
            StateValue::Flag(_) => StateValue::Flag(false),
        };
    }

    /// True when `self` and `other` observe the same underlying cell.
    pub fn shares(&self, other: &SharedState) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SharedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedState({:?})", self.0.borrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_cell() {
        let a = SharedState::text();
        let b = a.clone();
        a.set_text("male");
        assert_eq!(b.get_text().as_deref(), Some("male"));
        assert!(a.shares(&b));
    }

    #[test]
    fn reset_keeps_the_kind() {
        let f = SharedState::flag();
        f.set_flag(true);
        f.reset();
        assert_eq!(f.kind(), StateKind::Flag);
        assert!(!f.get_flag());
    }
}
