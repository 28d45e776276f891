//! View rendering for the roster.
//!
//! Sections, top to bottom: heading, search bar, entries (or the no-results
//! notice), page controls, help. Absent sections are skipped entirely.

use super::types::{Focus, Item};
use super::Model;
use crate::key::{self, KeyMap};

impl<I: Item> Model<I> {
    pub(super) fn view_heading(&self) -> String {
        self.styles.heading.render(&self.heading)
    }

    /// Visible entries, one block per entry: the first line of the display
    /// text as the title, the rest indented below it.
    pub(super) fn view_entries(&self) -> String {
        if let Some(notice) = &self.notice {
            return self.styles.no_results.render(notice.message());
        }

        self.store
            .visible_items()
            .iter()
            .map(|item| {
                let text = item.display_text();
                let mut lines = text.lines();
                let title = lines.next().unwrap_or_default();
                let mut block = self.styles.entry_title.render(title);
                for detail in lines {
                    block.push('\n');
                    block.push_str("  ");
                    block.push_str(&self.styles.entry_detail.render(detail));
                }
                block
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(super) fn view_help(&self) -> String {
        self.styles
            .help
            .render(&key::short_help_line(&self.short_help()))
    }

    /// Renders the whole roster.
    pub fn view(&self) -> String {
        let mut sections = vec![self.view_heading()];
        if let Some(search) = &self.search {
            sections.push(search.view(&self.styles));
        }
        let entries = self.view_entries();
        if !entries.is_empty() {
            sections.push(entries);
        }
        if let Some(nav) = &self.navigation {
            sections.push(nav.view(&self.styles));
        }
        if self.config.show_help {
            sections.push(self.view_help());
        }
        sections.join("\n\n")
    }
}

// Help changes with focus: editing keys for the search bar, page keys for
// the controls.
impl<I: Item> KeyMap for Model<I> {
    fn short_help(&self) -> Vec<&key::Binding> {
        let mut bindings = Vec::new();
        match (self.focus, &self.search, &self.navigation) {
            (Focus::Search, Some(search), _) => bindings.extend(search.keymap.short_help()),
            (Focus::Navigation, _, Some(nav)) => bindings.extend(nav.keymap.short_help()),
            _ => {}
        }
        bindings.extend(self.keymap.short_help());
        bindings
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        let mut columns = Vec::new();
        if let Some(search) = &self.search {
            columns.extend(search.keymap.full_help());
        }
        if let Some(nav) = &self.navigation {
            columns.extend(nav.keymap.full_help());
        }
        columns.extend(self.keymap.full_help());
        columns
    }
}
