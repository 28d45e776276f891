//! Core types for the roster component.
//!
//! - `Item` trait for entries that can be listed and searched
//! - `Message` commands consumed by the controller
//! - `Focus` for routing key input

use bubbletea_rs::Msg;
use std::fmt::Display;

/// Trait for entries that can be listed and searched in a roster.
///
/// `display_text()` is the text the search bar matches against. It should
/// contain everything a reader sees for the entry, not just its title.
///
/// # Examples
///
/// ```
/// use roster_pager::roster::Item;
/// use std::fmt::Display;
///
/// #[derive(Clone)]
/// struct Book {
///     title: String,
///     author: String,
/// }
///
/// impl Display for Book {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{} by {}", self.title, self.author)
///     }
/// }
///
/// impl Item for Book {
///     fn display_text(&self) -> String {
///         format!("{} {}", self.title, self.author)
///     }
/// }
/// ```
pub trait Item: Display + Clone {
    /// Returns the visible text of this entry, used for matching.
    fn display_text(&self) -> String;
}

/// Commands understood by [`Model::dispatch`](super::Model::dispatch).
///
/// Search-originated messages always land on page 1; navigation-originated
/// ones carry the activated control's label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The search text changed (one keystroke).
    SearchChanged(String),
    /// The search button was activated.
    SearchSubmitted,
    /// A page was requested by its control label, e.g. `"2"`.
    PageRequested(String),
    /// The navigation control at this position was activated.
    ControlActivated(usize),
}

impl From<Message> for Msg {
    fn from(msg: Message) -> Self {
        Box::new(msg) as Msg
    }
}

/// Which part of the roster receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Typing edits the search text.
    #[default]
    Search,
    /// Keys move between page controls.
    Navigation,
}
