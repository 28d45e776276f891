//! Page arithmetic and visibility assignment.
//!
//! Pages are 1-based, matching the labels on the navigation controls. A page
//! `p` covers the half-open index range `[(p - 1) * per_page, p * per_page)`
//! of the active list, cut off at the list's length.
//!
//! [`Pager::show_page`] is the only place that changes entry visibility: it
//! hides the whole store first and then shows the in-range slice of the
//! active list, so entries that were filtered out never stay visible.

use crate::error::{Error, Result};
use crate::roster::{Item, ItemStore};

/// Number of pages needed for `len` entries, never less than 1.
///
/// ```
/// use roster_pager::paginator::page_count;
///
/// assert_eq!(page_count(27, 10), 3);
/// assert_eq!(page_count(30, 10), 3);
/// assert_eq!(page_count(0, 10), 1);
/// ```
pub fn page_count(len: usize, per_page: usize) -> usize {
    len.div_ceil(per_page.max(1)).max(1)
}

/// Half-open index bounds of a 1-based page within a list of `len` entries.
///
/// Page 0 is read as page 1. Pages past the end yield an empty range at `len`.
///
/// ```
/// use roster_pager::paginator::page_bounds;
///
/// assert_eq!(page_bounds(27, 1, 10), (0, 10));
/// assert_eq!(page_bounds(27, 3, 10), (20, 27));
/// assert_eq!(page_bounds(27, 9, 10), (27, 27));
/// ```
pub fn page_bounds(len: usize, page: usize, per_page: usize) -> (usize, usize) {
    let per_page = per_page.max(1);
    let start = page.max(1).saturating_sub(1).saturating_mul(per_page).min(len);
    let end = start.saturating_add(per_page).min(len);
    (start, end)
}

/// Reads a control label as a page number clamped into `[1, page_count]`.
///
/// # Errors
///
/// Returns [`Error::InvalidPageLabel`] if the label is not an unsigned integer.
///
/// ```
/// use roster_pager::paginator::coerce_page_label;
///
/// assert_eq!(coerce_page_label("2", 3).unwrap(), 2);
/// assert_eq!(coerce_page_label(" 7 ", 3).unwrap(), 3);
/// assert_eq!(coerce_page_label("0", 3).unwrap(), 1);
/// assert!(coerce_page_label("two", 3).is_err());
/// ```
pub fn coerce_page_label(label: &str, page_count: usize) -> Result<usize> {
    let page: usize = label
        .trim()
        .parse()
        .map_err(|_| Error::InvalidPageLabel {
            label: label.to_string(),
        })?;
    Ok(page.clamp(1, page_count.max(1)))
}

/// Assigns visibility for one page of an active list.
///
/// # Examples
///
/// ```
/// use roster_pager::paginator::Pager;
/// use roster_pager::roster::{ItemStore, Student};
///
/// let mut store = ItemStore::new(
///     (0..27)
///         .map(|i| Student::new(&format!("Student {i}"), "s@example.com", "Joined"))
///         .collect(),
/// );
/// let pager = Pager::new(10);
/// let active = store.all();
///
/// pager.show_page(&mut store, &active, 3);
/// assert_eq!(store.visible_indices(), (20..27).collect::<Vec<_>>());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    per_page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            per_page: crate::config::DEFAULT_PER_PAGE,
        }
    }
}

impl Pager {
    /// Creates a pager. Values below 1 are clamped to 1.
    pub fn new(per_page: usize) -> Self {
        Self {
            per_page: per_page.max(1),
        }
    }

    /// Sets the page size (builder pattern). Values below 1 are clamped to 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.set_per_page(per_page);
        self
    }

    /// Sets the page size. Values below 1 are clamped to 1.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Entries per page.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of pages for a list of `len` entries.
    pub fn page_count(&self, len: usize) -> usize {
        page_count(len, self.per_page)
    }

    /// Index bounds of `page` within a list of `len` entries.
    pub fn bounds(&self, len: usize, page: usize) -> (usize, usize) {
        page_bounds(len, page, self.per_page)
    }

    /// Number of entries on `page`.
    pub fn items_on_page(&self, len: usize, page: usize) -> usize {
        let (start, end) = self.bounds(len, page);
        end - start
    }

    /// Hides every entry in the store, then shows the entries of `active`
    /// that fall on `page`. Returns the bounds that were shown.
    pub fn show_page<I: Item>(
        &self,
        store: &mut ItemStore<I>,
        active: &[usize],
        page: usize,
    ) -> (usize, usize) {
        store.hide_all();
        let (start, end) = self.bounds(active.len(), page);
        for &index in &active[start..end] {
            store.set_visible(index, true);
        }
        (start, end)
    }
}
