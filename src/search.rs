//! Search bar: a single-line query input with a search button.
//!
//! The bar owns the query text. The controller reads it on demand through
//! [`SearchBar::value`] and never caches it. Every key the bar receives turns
//! into a [`Message::SearchChanged`] and the button (enter) into
//! [`Message::SearchSubmitted`]. Both make the controller go back to page 1.
//!
//! ```rust
//! use roster_pager::search::SearchBar;
//! use roster_pager::roster::Message;
//! use roster_pager::Component;
//! use bubbletea_rs::{KeyMsg, Msg};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let mut bar = SearchBar::new();
//! bar.focus();
//!
//! let msg: Msg = Box::new(KeyMsg { key: KeyCode::Char('a'), modifiers: KeyModifiers::NONE });
//! assert_eq!(bar.update(&msg), Some(Message::SearchChanged("a".to_string())));
//! ```

use crate::key::{self, new_binding, with_help, with_keys_str, Binding};
use crate::roster::{Message, RosterStyles};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Clipboard text delivered to the search bar.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard read failure.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

/// Key bindings for editing the query.
#[derive(Debug, Clone)]
pub struct SearchKeyMap {
    /// Activate the search button.
    pub submit: Binding,
    /// Delete one character backward.
    pub delete_character_backward: Binding,
    /// Delete one character forward.
    pub delete_character_forward: Binding,
    /// Delete from start of line to cursor.
    pub delete_before_cursor: Binding,
    /// Move cursor one character left.
    pub character_backward: Binding,
    /// Move cursor one character right.
    pub character_forward: Binding,
    /// Move to start of line.
    pub line_start: Binding,
    /// Move to end of line.
    pub line_end: Binding,
    /// Paste from clipboard.
    pub paste: Binding,
}

impl Default for SearchKeyMap {
    fn default() -> Self {
        Self {
            submit: new_binding(vec![with_keys_str(&["enter"]), with_help("enter", "search")]),
            delete_character_backward: new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]),
            delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
            delete_before_cursor: new_binding(vec![
                with_keys_str(&["ctrl+u"]),
                with_help("ctrl+u", "clear"),
            ]),
            character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
            character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
            line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
            line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
            paste: new_binding(vec![with_keys_str(&["ctrl+v"])]),
        }
    }
}

impl key::KeyMap for SearchKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.submit, &self.delete_before_cursor]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.submit, &self.paste],
            vec![
                &self.delete_character_backward,
                &self.delete_character_forward,
                &self.delete_before_cursor,
            ],
            vec![
                &self.character_backward,
                &self.character_forward,
                &self.line_start,
                &self.line_end,
            ],
        ]
    }
}

/// The search input and its button.
#[derive(Debug, Clone)]
pub struct SearchBar {
    value: Vec<char>,
    pos: usize,
    focus: bool,
    /// Prompt shown before the input.
    pub prompt: String,
    /// Text shown while the input is empty.
    pub placeholder: String,
    /// Label of the search button.
    pub button_label: String,
    /// Maximum display width of the input; 0 means unlimited.
    pub width: usize,
    /// Key bindings.
    pub keymap: SearchKeyMap,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self {
            value: Vec::new(),
            pos: 0,
            focus: false,
            prompt: "> ".to_string(),
            placeholder: "Search for students...".to_string(),
            button_label: "Search".to_string(),
            width: 0,
            keymap: SearchKeyMap::default(),
        }
    }
}

impl SearchBar {
    /// Creates an empty, unfocused search bar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placeholder (builder pattern).
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    /// Sets the button label (builder pattern).
    pub fn with_button_label(mut self, label: &str) -> Self {
        self.button_label = label.to_string();
        self
    }

    /// Sets the maximum input width (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// The current query text.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the query text and moves the cursor to its end.
    pub fn set_value(&mut self, s: &str) {
        self.value = s.chars().collect();
        self.pos = self.value.len();
    }

    /// Clears the query.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
    }

    /// Cursor position in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the text.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// Moves the cursor to the start.
    pub fn cursor_start(&mut self) {
        self.pos = 0;
    }

    /// Moves the cursor to the end.
    pub fn cursor_end(&mut self) {
        self.pos = self.value.len();
    }

    /// Handles key and paste messages while focused.
    ///
    /// Returns the message the controller should act on, if any. Every key
    /// other than submit reports the current text, whether or not it edited
    /// anything, so any keystroke in the bar lands the roster on page 1.
    pub fn update(&mut self, msg: &Msg) -> Option<Message> {
        if !self.focus {
            return None;
        }

        if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            self.insert(paste_msg.0.chars().filter(|c| !c.is_control()));
            return Some(Message::SearchChanged(self.value()));
        }

        if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
            tracing::warn!(error = %paste_err.0, "clipboard paste failed");
            return None;
        }

        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        if self.keymap.submit.matches(key_msg) {
            return Some(Message::SearchSubmitted);
        }
        self.handle_key(key_msg);
        Some(Message::SearchChanged(self.value()))
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) {
        if self.keymap.delete_character_backward.matches(key_msg) {
            self.delete_grapheme_backward();
        } else if self.keymap.delete_character_forward.matches(key_msg) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if self.keymap.delete_before_cursor.matches(key_msg) {
            self.value.drain(..self.pos);
            self.pos = 0;
        } else if self.keymap.character_backward.matches(key_msg) {
            self.pos = self.pos.saturating_sub(1);
        } else if self.keymap.character_forward.matches(key_msg) {
            self.set_cursor(self.pos + 1);
        } else if self.keymap.line_start.matches(key_msg) {
            self.cursor_start();
        } else if self.keymap.line_end.matches(key_msg) {
            self.cursor_end();
        } else if let KeyCode::Char(ch) = key_msg.key {
            // Shift is encoded in the character case.
            let chorded = key_msg.modifiers.contains(KeyModifiers::CONTROL)
                || key_msg.modifiers.contains(KeyModifiers::ALT);
            if !chorded {
                self.insert(std::iter::once(ch));
            }
        }
    }

    fn insert(&mut self, chars: impl Iterator<Item = char>) {
        for ch in chars {
            self.value.insert(self.pos, ch);
            self.pos += 1;
        }
    }

    fn delete_grapheme_backward(&mut self) {
        if self.pos == 0 {
            return;
        }
        let head: String = self.value[..self.pos].iter().collect();
        let width = head
            .graphemes(true)
            .next_back()
            .map(|g| g.chars().count())
            .unwrap_or(1);
        let start = self.pos - width;
        self.value.drain(start..self.pos);
        self.pos = start;
    }

    /// Renders the prompt, the query (or placeholder) and the button.
    pub fn view(&self, styles: &RosterStyles) -> String {
        let input = if self.value.is_empty() {
            if self.focus {
                let mut chars = self.placeholder.chars();
                let first = chars.next().map(String::from).unwrap_or_else(|| " ".to_string());
                format!(
                    "{}{}",
                    styles.search_cursor.render(&first),
                    styles.search_placeholder.render(chars.as_str())
                )
            } else {
                styles.search_placeholder.render(&self.placeholder)
            }
        } else {
            self.view_value(styles)
        };

        format!(
            "{}{} {}",
            styles.search_prompt.render(&self.prompt),
            input,
            styles.search_button.render(&format!("[ {} ]", self.button_label))
        )
    }

    fn view_value(&self, styles: &RosterStyles) -> String {
        let (offset, end) = self.visible_window();
        let before: String = self.value[offset..self.pos].iter().collect();
        let mut out = styles.search_text.render(&before);

        if self.focus {
            let at = self
                .value
                .get(self.pos)
                .map(|c| c.to_string())
                .unwrap_or_else(|| " ".to_string());
            out.push_str(&styles.search_cursor.render(&at));
            if self.pos < end {
                let after: String = self.value[self.pos + 1..end].iter().collect();
                out.push_str(&styles.search_text.render(&after));
            }
        } else {
            let after: String = self.value[self.pos..end].iter().collect();
            out.push_str(&styles.search_text.render(&after));
        }
        out
    }

    /// Character range of the value that fits in `width`, keeping the cursor visible.
    fn visible_window(&self) -> (usize, usize) {
        if self.width == 0 {
            return (0, self.value.len());
        }
        let char_width = |c: &char| c.width().unwrap_or(0);

        // Walk left from the cursor until the width is used up.
        let mut used = 1; // cursor cell
        let mut offset = self.pos;
        while offset > 0 {
            let w = char_width(&self.value[offset - 1]);
            if used + w > self.width {
                break;
            }
            used += w;
            offset -= 1;
        }

        let mut end = self.pos.min(self.value.len());
        if end < self.value.len() {
            end += 1; // character under the cursor
        }
        while end < self.value.len() {
            let w = char_width(&self.value[end]);
            if used + w > self.width {
                break;
            }
            used += w;
            end += 1;
        }
        (offset, end)
    }
}

impl Component for SearchBar {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

/// Creates a command that reads the system clipboard.
///
/// The command produces a [`PasteMsg`] with the clipboard text, or a
/// [`PasteErrMsg`] if the clipboard cannot be read or support is disabled.
pub fn paste() -> Cmd {
    bubbletea_rs::tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}
