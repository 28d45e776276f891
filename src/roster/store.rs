//! The item store: the fixed, ordered set of roster entries.
//!
//! Entries are handed over once and never added or removed afterwards. The
//! only thing that changes is each entry's visibility flag, which the pager
//! sets on every view update.

use super::Item;

/// An ordered subset of the store, as indices in store order.
pub type ItemCollection = Vec<usize>;

/// One roster entry and whether it is currently shown.
#[derive(Debug, Clone)]
pub struct Entry<I: Item> {
    item: I,
    visible: bool,
}

impl<I: Item> Entry<I> {
    /// The wrapped item.
    pub fn item(&self) -> &I {
        &self.item
    }

    /// Whether the entry is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Owner of every roster entry.
///
/// # Examples
///
/// ```
/// use roster_pager::roster::{ItemStore, Student};
///
/// let store = ItemStore::new(vec![
///     Student::new("Ana", "ana@example.com", "Joined 01/01/20"),
///     Student::new("Bo", "bo@example.com", "Joined 02/01/20"),
/// ]);
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.all(), vec![0, 1]);
/// // Entries start visible, as they are in the host page before paging.
/// assert_eq!(store.visible_indices(), vec![0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct ItemStore<I: Item> {
    entries: Vec<Entry<I>>,
}

impl<I: Item> ItemStore<I> {
    /// Takes ownership of the entries, all initially visible.
    pub fn new(items: Vec<I>) -> Self {
        Self {
            entries: items
                .into_iter()
                .map(|item| Entry {
                    item,
                    visible: true,
                })
                .collect(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at `index`.
    pub fn get(&self, index: usize) -> Option<&Entry<I>> {
        self.entries.get(index)
    }

    /// Iterates `(index, item)` pairs in store order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &I)> {
        self.entries.iter().enumerate().map(|(i, e)| (i, &e.item))
    }

    /// The full roster as a collection.
    pub fn all(&self) -> ItemCollection {
        (0..self.entries.len()).collect()
    }

    /// Hides every entry.
    pub fn hide_all(&mut self) {
        for entry in &mut self.entries {
            entry.visible = false;
        }
    }

    /// Shows or hides one entry. Out-of-range indices are ignored.
    pub fn set_visible(&mut self, index: usize, visible: bool) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.visible = visible;
        }
    }

    /// Indices of the visible entries, in store order.
    pub fn visible_indices(&self) -> ItemCollection {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.visible)
            .map(|(i, _)| i)
            .collect()
    }

    /// The visible items, in store order.
    pub fn visible_items(&self) -> Vec<&I> {
        self.entries
            .iter()
            .filter(|e| e.visible)
            .map(|e| &e.item)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Student;

    fn store(n: usize) -> ItemStore<Student> {
        ItemStore::new(
            (0..n)
                .map(|i| Student::new(&format!("S{i}"), "s@example.com", "Joined"))
                .collect(),
        )
    }

    #[test]
    fn test_hide_all_then_show_one() {
        let mut s = store(3);
        s.hide_all();
        assert!(s.visible_indices().is_empty());
        s.set_visible(1, true);
        assert_eq!(s.visible_indices(), vec![1]);
        assert_eq!(s.visible_items()[0].name, "S1");
    }

    #[test]
    fn test_get_exposes_item_and_flag() {
        let mut s = store(2);
        s.set_visible(0, false);
        let first = s.get(0).unwrap();
        assert_eq!(first.item().name, "S0");
        assert!(!first.is_visible());
        assert!(s.get(1).unwrap().is_visible());
        assert!(s.get(2).is_none());
    }

    #[test]
    fn test_set_visible_out_of_range_is_ignored() {
        let mut s = store(2);
        s.set_visible(7, false);
        assert_eq!(s.visible_indices(), vec![0, 1]);
    }
}
