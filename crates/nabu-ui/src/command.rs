use std::collections::HashMap;

// ── Command ───────────────────────────────────────────────────────────────

/// An action a button can trigger.
///
/// The set is closed over the built-in demo commands, with [`Command::Host`]
/// as the injection point for application-defined handlers — there is no
/// open-ended dynamic dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    /// Collect the form fields into a summary and show it.
    ShowMessage,
    /// Clear text widgets and reset all variable cells.
    ClearText,
    /// A host-registered command, dispatched under its registered name.
    Host(String),
}

// ── CommandTable ──────────────────────────────────────────────────────────

/// The name → command lookup consulted when a `command="…"` attribute is
/// resolved at render time. Names not in the table leave their button with
/// a no-op action; resolution never fails.
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    entries: HashMap<String, Command>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table pre-populated with the built-in demo commands under their
    /// historical names.
    pub fn with_demo_commands() -> Self {
        let mut table = Self::new();
        table.entries.insert("show_message".to_string(), Command::ShowMessage);
        table.entries.insert("clear_text".to_string(), Command::ClearText);
        table
    }

    /// Register a host command under `name`. Dispatch later hands back
    /// `Command::Host(name)`.
    pub fn register_host(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.entries.insert(name.clone(), Command::Host(name));
    }

    pub fn resolve(&self, name: &str) -> Option<Command> {
        self.entries.get(name).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_names_resolve() {
        let t = CommandTable::with_demo_commands();
        assert_eq!(t.resolve("show_message"), Some(Command::ShowMessage));
        assert_eq!(t.resolve("clear_text"), Some(Command::ClearText));
        assert_eq!(t.resolve("self_destruct"), None);
    }

    #[test]
    fn host_commands_carry_their_name() {
        let mut t = CommandTable::new();
        t.register_host("refresh");
        assert_eq!(t.resolve("refresh"), Some(Command::Host("refresh".to_string())));
    }
}
