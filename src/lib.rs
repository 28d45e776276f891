#![warn(missing_docs)]

//! # roster-pager
//!
//! A searchable, paginated roster component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications.
//!
//! The roster shows a fixed number of entries per page, one page-number
//! control per page, a live search bar that filters entries as you type, a
//! count heading ("27 Students") and a notice when nothing matches.
//!
//! ## Overview
//!
//! The component follows the Elm Architecture pattern with `init()`,
//! `update()` and `view()`. Underneath, every input is turned into a
//! [`roster::Message`] and handled by one function,
//! [`roster::Model::dispatch`], so the whole behaviour can be driven and
//! tested without a terminal.
//!
//! ## Components
//!
//! | Component | Module | Role |
//! |-----------|--------|------|
//! | `Model` | [`roster`] | Owns the entries and runs every view update |
//! | `SearchBar` | [`search`] | Query input plus search button |
//! | `Navigation` | [`navigation`] | One page control per page |
//! | `Pager` | [`paginator`] | Page arithmetic and entry visibility |
//! | `apply_filter` | [`filter`] | Matches the query against entries |
//!
//! ## Quick Start
//!
//! ```rust
//! use roster_pager::prelude::*;
//!
//! let students = vec![
//!     Student::new("Ana Smith", "ana.smith@example.com", "Joined 07/15/15"),
//!     Student::new("Bo Li", "bo.li@example.com", "Joined 03/02/16"),
//! ];
//! let mut roster = Roster::new(students);
//! assert_eq!(roster.heading(), "2 Students");
//!
//! roster.dispatch(Message::SearchChanged("ana".to_string()));
//! assert_eq!(roster.heading(), "1 Student");
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use roster_pager::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     roster: Roster<Student>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let students = vec![Student::new("Ana Smith", "ana@example.com", "Joined 07/15/15")];
//!         (Self { roster: Roster::new(students) }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         Model::update(&mut self.roster, msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.roster.view()
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! View updates emit `tracing` spans and events (`update_ui`, navigation
//! rebuilds, clamped page labels). The crate installs no subscriber.

pub mod config;
pub mod error;
pub mod filter;
pub mod key;
pub mod navigation;
pub mod paginator;
pub mod roster;
pub mod search;

use bubbletea_rs::Cmd;

/// Core trait for components that take keyboard focus.
///
/// - `focus()` marks the component focused and may return a command
/// - `blur()` clears the focused state
/// - `focused()` reports the current state
///
/// # Examples
///
/// ```rust
/// use roster_pager::prelude::*;
///
/// let mut bar = SearchBar::new();
/// assert!(!bar.focused());
///
/// bar.focus();
/// assert!(bar.focused());
///
/// bar.blur();
/// assert!(!bar.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use config::Config;
pub use error::{Error, Result};
pub use filter::{apply_filter, MatchMode};
pub use key::{matches_binding, new_binding, with_help, with_keys_str, Binding, KeyMap, KeyPress};
pub use navigation::{Navigation, NavigationControl, NavigationKeyMap};
pub use paginator::{coerce_page_label, page_bounds, page_count, Pager};
pub use roster::{
    heading_text, Focus, Item, ItemCollection, ItemStore, Message, Model as Roster,
    NoResultsNotice, RosterKeyMap, RosterStyles, Student,
};
pub use search::{paste, PasteErrMsg, PasteMsg, SearchBar, SearchKeyMap};

/// Prelude module for convenient imports.
///
/// ```rust
/// use roster_pager::prelude::*;
///
/// let roster: Roster<Student> = Roster::new(vec![]);
/// assert_eq!(roster.heading(), "0 Students");
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::filter::MatchMode;
    pub use crate::key::{Binding, KeyMap};
    pub use crate::navigation::Navigation;
    pub use crate::roster::{Focus, Item, Message, Model as Roster, RosterStyles, Student};
    pub use crate::search::SearchBar;
    pub use crate::Component;
}
