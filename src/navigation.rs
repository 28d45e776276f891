//! Page-number navigation controls.
//!
//! A [`Navigation`] is one control per page of the active list, labelled
//! `"1"` to `"N"`, with exactly one control active. It is always rebuilt as a
//! whole rather than patched: the controller drops the old set and builds a
//! new one when the page count may have changed.
//!
//! Activating a control deactivates the current one, activates the target
//! and hands back a [`Message::PageRequested`] carrying the target's label.

use crate::key::{self, KeyMap as KeyMapTrait};
use crate::paginator::page_count;
use crate::roster::{Message, RosterStyles};
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings for moving between page controls.
#[derive(Debug, Clone)]
pub struct NavigationKeyMap {
    /// Activate the control before the active one.
    /// Default keys: PageUp, Left Arrow, 'h'
    pub prev_page: key::Binding,
    /// Activate the control after the active one.
    /// Default keys: PageDown, Right Arrow, 'l'
    pub next_page: key::Binding,
}

impl Default for NavigationKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup", "left", "h"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown", "right", "l"]),
                key::with_help("→/l", "next page"),
            ]),
        }
    }
}

impl KeyMapTrait for NavigationKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.prev_page, &self.next_page]]
    }
}

/// A single page control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationControl {
    page: usize,
    active: bool,
}

impl NavigationControl {
    /// The 1-based page this control targets.
    pub fn page(&self) -> usize {
        self.page
    }

    /// The text shown on the control.
    pub fn label(&self) -> String {
        self.page.to_string()
    }

    /// Whether this is the active control.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// The navigation block: one control per page.
///
/// # Examples
///
/// ```
/// use roster_pager::navigation::Navigation;
/// use roster_pager::roster::Message;
///
/// let mut nav = Navigation::build(27, 10);
/// assert_eq!(nav.len(), 3);
/// assert_eq!(nav.active_page(), Some(1));
///
/// let request = nav.activate(1);
/// assert_eq!(request, Some(Message::PageRequested("2".to_string())));
/// assert_eq!(nav.active_page(), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct Navigation {
    controls: Vec<NavigationControl>,
    /// Key bindings.
    pub keymap: NavigationKeyMap,
}

impl Navigation {
    /// Builds controls for an active list of `len` entries.
    ///
    /// At least one control is produced even for an empty list. The first
    /// control starts active.
    pub fn build(len: usize, per_page: usize) -> Self {
        let count = page_count(len, per_page);
        let controls = (0..count)
            .map(|i| NavigationControl {
                page: i + 1,
                active: i == 0,
            })
            .collect();
        Self {
            controls,
            keymap: NavigationKeyMap::default(),
        }
    }

    /// Number of controls.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Always false: a navigation block has at least one control.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// The controls in page order.
    pub fn controls(&self) -> &[NavigationControl] {
        &self.controls
    }

    /// Position of the active control.
    pub fn active_index(&self) -> Option<usize> {
        self.controls.iter().position(|c| c.active)
    }

    /// Page of the active control.
    pub fn active_page(&self) -> Option<usize> {
        self.active_index().map(|i| self.controls[i].page)
    }

    /// Activates the control at `index` and returns its page request.
    ///
    /// An index without a control changes nothing and returns `None`.
    pub fn activate(&mut self, index: usize) -> Option<Message> {
        if index >= self.controls.len() {
            return None;
        }
        for control in &mut self.controls {
            control.active = false;
        }
        let control = &mut self.controls[index];
        control.active = true;
        Some(Message::PageRequested(control.label()))
    }

    /// Activates the control labelled `label`, if there is one.
    pub fn activate_label(&mut self, label: &str) -> Option<Message> {
        let index = self.controls.iter().position(|c| c.label() == label)?;
        self.activate(index)
    }

    /// Activates the control after the active one; stays put on the last.
    pub fn activate_next(&mut self) -> Option<Message> {
        let current = self.active_index().unwrap_or(0);
        let next = (current + 1).min(self.controls.len().saturating_sub(1));
        self.activate(next)
    }

    /// Activates the control before the active one; stays put on the first.
    pub fn activate_prev(&mut self) -> Option<Message> {
        let current = self.active_index().unwrap_or(0);
        self.activate(current.saturating_sub(1))
    }

    /// Marks the control for `page` active without emitting a request.
    ///
    /// Used to keep the active flag in step with the page actually shown
    /// after a request was clamped. Unknown pages leave the set unchanged.
    pub fn set_active(&mut self, page: usize) {
        if !self.controls.iter().any(|c| c.page == page) {
            return;
        }
        for control in &mut self.controls {
            control.active = control.page == page;
        }
    }

    /// Maps a key press to a control activation.
    ///
    /// Prev/next bindings move one control; a digit activates the control
    /// with that label. Only single-digit labels can be reached this way:
    /// controls 10 and up are reached with the next/prev keys.
    pub fn update(&mut self, msg: &KeyMsg) -> Option<Message> {
        if self.keymap.next_page.matches(msg) {
            return self.activate_next();
        }
        if self.keymap.prev_page.matches(msg) {
            return self.activate_prev();
        }
        match msg.key {
            KeyCode::Char(c)
                if c.is_ascii_digit() && !msg.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.activate_label(&c.to_string())
            }
            _ => None,
        }
    }

    /// Renders the controls side by side, the active one bracketed.
    pub fn view(&self, styles: &RosterStyles) -> String {
        self.controls
            .iter()
            .map(|c| {
                if c.active {
                    styles.active_control.render(&format!("[{}]", c.label()))
                } else {
                    styles.inactive_control.render(&format!(" {} ", c.label()))
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
