//! Main Model struct: construction, configuration and accessors.

use super::keys::RosterKeyMap;
use super::notice::NoResultsNotice;
use super::store::ItemStore;
use super::style::RosterStyles;
use super::types::{Focus, Item};
use crate::config::Config;
use crate::navigation::Navigation;
use crate::paginator::Pager;
use crate::search::SearchBar;
use crate::Component;

/// A searchable, paginated roster.
///
/// The model owns the item store and the search bar, and it is the only
/// holder of derived view state: the page shown, the navigation block, the
/// heading and the no-results notice. All of it is recomputed from the store
/// and the current query on every update.
///
/// Construction mounts the search bar first and then performs the initial
/// view update, so a new model already shows page 1.
///
/// # Examples
///
/// ```
/// use roster_pager::roster::{Model, Student};
///
/// let students: Vec<Student> = (1..=27)
///     .map(|i| Student::new(&format!("Student {i}"), "s@example.com", "Joined 01/01/20"))
///     .collect();
/// let roster = Model::new(students);
///
/// assert_eq!(roster.heading(), "27 Students");
/// assert_eq!(roster.page(), 1);
/// assert_eq!(roster.navigation().map(|n| n.len()), Some(3));
/// assert_eq!(roster.visible_items().len(), 10);
/// ```
pub struct Model<I: Item> {
    pub(super) store: ItemStore<I>,
    pub(super) config: Config,
    pub(super) pager: Pager,

    // Mounted once; `None` when the config leaves it out.
    pub(super) search: Option<SearchBar>,
    pub(super) navigation: Option<Navigation>,
    pub(super) notice: Option<NoResultsNotice>,
    pub(super) heading: String,
    pub(super) page: usize,

    pub(super) focus: Focus,
    pub(super) styles: RosterStyles,
    pub(super) keymap: RosterKeyMap,
}

impl<I: Item> Model<I> {
    /// Creates a roster with the default configuration (10 per page).
    pub fn new(items: Vec<I>) -> Self {
        Self::with_config(items, Config::default())
    }

    /// Creates a roster with an explicit configuration.
    pub fn with_config(items: Vec<I>, config: Config) -> Self {
        let pager = Pager::new(config.per_page);
        let mut model = Self {
            store: ItemStore::new(items),
            config,
            pager,
            search: None,
            navigation: None,
            notice: None,
            heading: String::new(),
            page: 1,
            focus: Focus::Search,
            styles: RosterStyles::default(),
            keymap: RosterKeyMap::default(),
        };

        if model.config.show_search_bar {
            model.mount_search_bar();
        } else {
            model.focus = Focus::Navigation;
        }
        model.update_ui(1);
        model
    }

    fn mount_search_bar(&mut self) {
        let mut bar = SearchBar::new()
            .with_placeholder(&self.config.placeholder)
            .with_button_label(&self.config.button_label);
        let _ = bar.focus();
        self.search = Some(bar);
    }

    /// Replaces the styles (builder pattern).
    pub fn with_styles(mut self, styles: RosterStyles) -> Self {
        self.styles = styles;
        self
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The item store.
    pub fn store(&self) -> &ItemStore<I> {
        &self.store
    }

    /// Items currently shown, in roster order.
    pub fn visible_items(&self) -> Vec<&I> {
        self.store.visible_items()
    }

    /// The page currently shown (1-based).
    pub fn page(&self) -> usize {
        self.page
    }

    /// The heading text, e.g. `"27 Students"`.
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// The search bar, if mounted.
    pub fn search_bar(&self) -> Option<&SearchBar> {
        self.search.as_ref()
    }

    /// Mutable access to the search bar, if mounted.
    ///
    /// Editing the query here does not update the view; call
    /// [`update_ui`](Self::update_ui) or dispatch a message afterwards.
    pub fn search_bar_mut(&mut self) -> Option<&mut SearchBar> {
        self.search.as_mut()
    }

    /// The navigation block, if present.
    pub fn navigation(&self) -> Option<&Navigation> {
        self.navigation.as_ref()
    }

    /// The no-results notice, if shown.
    pub fn notice(&self) -> Option<&NoResultsNotice> {
        self.notice.as_ref()
    }

    /// Which part of the roster receives key input.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Styles used by [`view`](Self::view).
    pub fn styles(&self) -> &RosterStyles {
        &self.styles
    }
}
