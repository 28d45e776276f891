//! Styles for the roster view.
//!
//! Colours follow the list widget palette and use `AdaptiveColor` so they
//! read well on light and dark terminals. No default style adds padding or
//! borders, so the rendered text lines up with the plain text once ANSI
//! codes are stripped.
//!
//! ```rust
//! use roster_pager::roster::RosterStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = RosterStyles::default();
//! styles.heading = Style::new().foreground(Color::from("#FF6B6B")).bold(true);
//! ```

use lipgloss_extras::prelude::*;

/// Separator between help entries.
pub const BULLET: &str = "•";

/// Styling for every part of the roster view.
#[derive(Debug, Clone)]
pub struct RosterStyles {
    /// The "{n} Students" heading.
    pub heading: Style,
    /// Search prompt prefix.
    pub search_prompt: Style,
    /// Query text.
    pub search_text: Style,
    /// Placeholder text.
    pub search_placeholder: Style,
    /// Cursor cell in the search input.
    pub search_cursor: Style,
    /// The search button.
    pub search_button: Style,
    /// First line of an entry.
    pub entry_title: Style,
    /// Remaining lines of an entry.
    pub entry_detail: Style,
    /// The no-results notice.
    pub no_results: Style,
    /// Active page control.
    pub active_control: Style,
    /// Inactive page controls.
    pub inactive_control: Style,
    /// Help footer.
    pub help: Style,
}

impl Default for RosterStyles {
    fn default() -> Self {
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            heading: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1a1a1a",
                    Dark: "#dddddd",
                })
                .bold(true),
            search_prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            search_text: Style::new(),
            search_placeholder: Style::new().foreground(Color::from("240")),
            search_cursor: Style::new().reverse(true),
            search_button: Style::new().foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            entry_title: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            entry_detail: Style::new().foreground(subdued_color.clone()),
            no_results: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            active_control: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#847A85",
                    Dark: "#979797",
                })
                .bold(true),
            inactive_control: Style::new().foreground(subdued_color.clone()),
            help: Style::new().foreground(subdued_color),
        }
    }
}
