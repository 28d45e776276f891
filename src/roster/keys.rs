//! Key bindings handled by the roster itself.
//!
//! Editing keys belong to the search bar and page keys to the navigation
//! block; the roster only switches focus between the two and quits.

use crate::key::{self, new_binding, with_help, with_keys_str};

/// Roster-level key bindings.
#[derive(Debug, Clone)]
pub struct RosterKeyMap {
    /// Move focus between the search bar and the page controls.
    pub switch_focus: key::Binding,
    /// Leave the program.
    pub quit: key::Binding,
}

impl Default for RosterKeyMap {
    fn default() -> Self {
        Self {
            switch_focus: new_binding(vec![
                with_keys_str(&["tab"]),
                with_help("tab", "switch focus"),
            ]),
            quit: new_binding(vec![
                with_keys_str(&["esc", "ctrl+c"]),
                with_help("esc", "quit"),
            ]),
        }
    }
}

impl key::KeyMap for RosterKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.switch_focus, &self.quit]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.switch_focus, &self.quit]]
    }
}
