//! The "no results" entry shown in place of the roster when nothing matches.

/// Notice naming the query that matched nothing.
///
/// ```
/// use roster_pager::roster::NoResultsNotice;
///
/// let mut notice = NoResultsNotice::for_query("zzz");
/// assert_eq!(notice.message(), "No results for 'zzz'");
///
/// notice.set_query("zzzz");
/// assert_eq!(notice.message(), "No results for 'zzzz'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoResultsNotice {
    message: String,
}

impl NoResultsNotice {
    /// Creates the notice for `query`. The query is shown verbatim.
    pub fn for_query(query: &str) -> Self {
        Self {
            message: format!("No results for '{}'", query),
        }
    }

    /// Rewrites the notice text in place for a new query.
    pub fn set_query(&mut self, query: &str) {
        self.message = format!("No results for '{}'", query);
    }

    /// The notice text.
    pub fn message(&self) -> &str {
        &self.message
    }
}
