//! The view update: the single place roster state changes.
//!
//! Every trigger (initial load, keystroke, search button, page control) ends
//! in [`Model::update_ui`], which runs these steps in order:
//!
//! 1. pick the active list: the whole store for an empty query, else the
//!    filter result
//! 2. show the requested page of it
//! 3. rebuild the navigation block, but only when landing on page 1
//! 4. rewrite the heading
//! 5. show the no-results notice and drop navigation for an empty list,
//!    otherwise drop the notice
//!
//! Because navigation is only rebuilt on page 1, its control count can lag
//! behind the active list while another page is shown. Requests for pages
//! that no longer exist are clamped to the last page.

use super::notice::NoResultsNotice;
use super::store::ItemCollection;
use super::types::{Focus, Item, Message};
use super::Model;
use crate::filter::apply_filter;
use crate::navigation::Navigation;
use crate::paginator::coerce_page_label;

/// Heading text for `count` entries: singular only for exactly one.
///
/// ```
/// use roster_pager::roster::heading_text;
///
/// assert_eq!(heading_text(1, "Student", "Students"), "1 Student");
/// assert_eq!(heading_text(0, "Student", "Students"), "0 Students");
/// assert_eq!(heading_text(27, "Student", "Students"), "27 Students");
/// ```
pub fn heading_text(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {}", singular)
    } else {
        format!("{} {}", count, plural)
    }
}

impl<I: Item> Model<I> {
    /// The current search text, read from the search bar.
    ///
    /// Without a mounted search bar the query is empty.
    pub fn query(&self) -> String {
        self.search.as_ref().map(|s| s.value()).unwrap_or_default()
    }

    /// Returns true while the search text is non-empty.
    pub fn is_searching(&self) -> bool {
        !self.query().is_empty()
    }

    /// The list pagination currently runs over.
    pub fn active_list(&self) -> ItemCollection {
        let query = self.query();
        if query.is_empty() {
            self.store.all()
        } else {
            apply_filter(&query, &self.store, self.config.match_mode)
        }
    }

    /// Handles one controller message.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_pager::roster::{Message, Model, Student};
    ///
    /// let mut roster = Model::new(vec![
    ///     Student::new("Ana Smith", "ana@example.com", "Joined 01/01/20"),
    ///     Student::new("Bo Li", "bo@example.com", "Joined 02/01/20"),
    /// ]);
    ///
    /// roster.dispatch(Message::SearchChanged("ana".to_string()));
    /// assert_eq!(roster.heading(), "1 Student");
    ///
    /// roster.dispatch(Message::SearchChanged("zzz".to_string()));
    /// assert_eq!(roster.heading(), "0 Students");
    /// assert_eq!(roster.notice().unwrap().message(), "No results for 'zzz'");
    /// assert!(roster.navigation().is_none());
    /// ```
    pub fn dispatch(&mut self, msg: Message) {
        match msg {
            Message::SearchChanged(text) => {
                if let Some(search) = self.search.as_mut() {
                    if search.value() != text {
                        search.set_value(&text);
                    }
                }
                self.update_ui(1);
            }
            Message::SearchSubmitted => self.update_ui(1),
            Message::PageRequested(label) => self.request_page(&label),
            Message::ControlActivated(index) => {
                let request = self.navigation.as_mut().and_then(|n| n.activate(index));
                if let Some(request) = request {
                    self.dispatch(request);
                }
            }
        }
    }

    /// Shows the page named by a control label.
    ///
    /// Labels are clamped into the page range of the current active list. A
    /// label that is not a number falls back to page 1.
    pub fn request_page(&mut self, label: &str) {
        let count = self.pager.page_count(self.active_list().len());
        let page = match coerce_page_label(label, count) {
            Ok(page) => {
                if label.trim().parse::<usize>().ok() != Some(page) {
                    tracing::warn!(label, page, page_count = count, "page label clamped");
                }
                page
            }
            Err(err) => {
                tracing::warn!(error = %err, "falling back to page 1");
                1
            }
        };
        self.update_ui(page);
    }

    /// Recomputes and renders the roster for `page` (1-based).
    ///
    /// Pages outside the active list's range are clamped into it.
    pub fn update_ui(&mut self, page: usize) {
        let query = self.query();
        let active = self.active_list();
        let page = page.clamp(1, self.pager.page_count(active.len()));

        let _span = tracing::debug_span!(
            "update_ui",
            page,
            query_len = query.len(),
            active_len = active.len()
        )
        .entered();

        self.pager.show_page(&mut self.store, &active, page);
        self.page = page;

        if page == 1 {
            let nav = Navigation::build(active.len(), self.pager.per_page());
            tracing::debug!(controls = nav.len(), "navigation rebuilt");
            self.navigation = Some(nav);
        } else if let Some(nav) = self.navigation.as_mut() {
            nav.set_active(page);
        }

        self.heading = heading_text(
            active.len(),
            &self.config.item_singular,
            &self.config.item_plural,
        );

        if active.is_empty() {
            match self.notice.as_mut() {
                Some(notice) => notice.set_query(&query),
                None => self.notice = Some(NoResultsNotice::for_query(&query)),
            }
            if self.navigation.take().is_some() {
                tracing::debug!("navigation removed");
            }
            if self.focus == Focus::Navigation && self.search.is_some() {
                self.set_focus(Focus::Search);
            }
        } else {
            self.notice = None;
        }
    }
}
