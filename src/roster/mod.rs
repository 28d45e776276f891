//! Searchable, paginated roster component.
//!
//! This module exposes a generic `Model<I: Item>` plus its supporting types:
//! - `Item`: implement for your entry type; `display_text()` is what search matches
//! - `Student`: a ready-made entry with name, email and join date
//! - `ItemStore`: the fixed set of entries and their visibility flags
//! - `Message`: commands consumed by `Model::dispatch`
//!
//! ## Control flow
//!
//! The search bar and the page controls never touch roster state directly.
//! They produce [`Message`] values, and `Model::dispatch` turns every one of
//! them into a single view update:
//!
//! - `SearchChanged` / `SearchSubmitted` always land on page 1
//! - `ControlActivated` moves the active control and yields `PageRequested`
//! - `PageRequested` carries the control label, clamped to the page range
//!
//! Inside a bubbletea-rs program, `update()` maps key events onto these
//! messages: typing edits the search text, `tab` moves focus to the page
//! controls, where `←`/`→` or a digit picks a page.
//!
//! ## Example
//!
//! ```
//! use roster_pager::roster::{Message, Model, Student};
//!
//! let students: Vec<Student> = (1..=27)
//!     .map(|i| Student::new(&format!("Student {i}"), "s@example.com", "Joined 01/01/20"))
//!     .collect();
//! let mut roster = Model::new(students);
//!
//! roster.dispatch(Message::PageRequested("3".to_string()));
//! assert_eq!(roster.visible_items().len(), 7);
//! ```

mod controller;
mod keys;
mod model;
mod notice;
mod rendering;
mod store;
mod student;
mod types;

/// Styles for the roster view.
pub mod style;

pub use controller::heading_text;
pub use keys::RosterKeyMap;
pub use model::Model;
pub use notice::NoResultsNotice;
pub use store::{Entry, ItemCollection, ItemStore};
pub use student::Student;
pub use style::RosterStyles;
pub use types::{Focus, Item, Message};

use crate::search::{self, PasteErrMsg, PasteMsg};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};

impl<I: Item> Model<I> {
    /// Moves key focus, keeping the search bar's own focus flag in step.
    ///
    /// Focus only moves to a part that exists.
    pub fn set_focus(&mut self, focus: Focus) {
        let available = match focus {
            Focus::Search => self.search.is_some(),
            Focus::Navigation => self.navigation.is_some(),
        };
        if !available {
            return;
        }
        self.focus = focus;
        if let Some(search) = self.search.as_mut() {
            if focus == Focus::Search {
                let _ = search.focus();
            } else {
                search.blur();
            }
        }
    }

    fn toggle_focus(&mut self) {
        match self.focus {
            Focus::Search => self.set_focus(Focus::Navigation),
            Focus::Navigation => self.set_focus(Focus::Search),
        }
    }

    fn handle_key(&mut self, msg: &Msg, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }
        if self.keymap.switch_focus.matches(key_msg) {
            self.toggle_focus();
            return None;
        }

        let request = match self.focus {
            Focus::Search => {
                let bar = self.search.as_mut()?;
                if bar.keymap.paste.matches(key_msg) {
                    return Some(search::paste());
                }
                bar.update(msg)
            }
            Focus::Navigation => self.navigation.as_mut()?.update(key_msg),
        };
        if let Some(request) = request {
            self.dispatch(request);
        }
        None
    }
}

impl<I: Item + Send + Sync + 'static> BubbleTeaModel for Model<I> {
    /// Starts with an empty roster and the default configuration.
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(vec![]), None)
    }

    /// Routes messages to the focused part and applies the result.
    ///
    /// A [`Message`] sent as a `Msg` is dispatched directly, so programs can
    /// drive the roster from their own commands.
    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(roster_msg) = msg.downcast_ref::<Message>() {
            self.dispatch(roster_msg.clone());
            return None;
        }

        if msg.downcast_ref::<PasteMsg>().is_some() || msg.downcast_ref::<PasteErrMsg>().is_some() {
            if let Some(request) = self.search.as_mut().and_then(|s| s.update(&msg)) {
                self.dispatch(request);
            }
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(&msg, key_msg);
        }
        None
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}
