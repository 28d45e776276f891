//! Type-safe key bindings shared by the roster components.
//!
//! Bindings are declared with string names (`"ctrl+u"`, `"pgdown"`, `"h"`) and
//! matched against the `KeyMsg` values delivered by bubbletea-rs. Each binding
//! carries a short help entry so components can describe their controls.
//!
//! ```rust
//! use roster_pager::key::{new_binding, with_help, with_keys_str};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let next = new_binding(vec![
//!     with_keys_str(&["right", "l"]),
//!     with_help("→/l", "next page"),
//! ]);
//!
//! let msg = KeyMsg { key: KeyCode::Char('l'), modifiers: KeyModifiers::NONE };
//! assert!(next.matches(&msg));
//! ```

use crate::roster::style::BULLET;
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key combination: a key code plus modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Parses a key name such as `"ctrl+u"`, `"pgup"` or `"x"`.
    ///
    /// Returns `None` for names that do not describe a key.
    pub fn parse(name: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut rest = name;
        loop {
            if let Some(r) = rest.strip_prefix("ctrl+") {
                modifiers |= KeyModifiers::CONTROL;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("alt+") {
                modifiers |= KeyModifiers::ALT;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("shift+") {
                modifiers |= KeyModifiers::SHIFT;
                rest = r;
            } else {
                break;
            }
        }

        let code = match rest {
            "enter" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "esc" => KeyCode::Esc,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pgup" => KeyCode::PageUp,
            "pgdown" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };

        Some(Self { code, modifiers })
    }

    fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        // Shift is folded into the character case for printable keys.
        let relevant = KeyModifiers::CONTROL | KeyModifiers::ALT;
        (self.modifiers & relevant) == (msg.modifiers & relevant)
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// How the key is shown, e.g. `"←/h"`.
    pub key: String,
    /// What the key does.
    pub desc: String,
}

/// A set of keys bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

/// Option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Sets the keys of a binding from key names. Unknown names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys.iter().filter_map(|k| KeyPress::parse(k)).collect();
    Box::new(move |b: &mut Binding| b.keys = parsed)
}

/// Sets the help entry of a binding.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b: &mut Binding| b.help = help)
}

/// Starts the binding disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b: &mut Binding| b.disabled = true)
}

/// Returns true if `msg` triggers `binding`.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

impl Binding {
    /// Returns true if the binding is enabled and one of its keys was pressed.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }

    /// The help entry.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Keys bound to this action.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// A binding with no keys or that was disabled never matches.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }
}

/// Components that can describe their key bindings.
pub trait KeyMap {
    /// Bindings shown in the one-line help footer.
    fn short_help(&self) -> Vec<&Binding>;

    /// All bindings, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// Renders bindings as `"key desc • key desc"`, skipping disabled ones.
pub fn short_help_line(bindings: &[&Binding]) -> String {
    bindings
        .iter()
        .filter(|b| b.enabled() && !b.help().key.is_empty())
        .map(|b| format!("{} {}", b.help().key, b.help().desc))
        .collect::<Vec<_>>()
        .join(&format!(" {BULLET} "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_parse_named_and_modified_keys() {
        let p = KeyPress::parse("ctrl+u").unwrap();
        assert_eq!(p.code, KeyCode::Char('u'));
        assert!(p.modifiers.contains(KeyModifiers::CONTROL));

        assert_eq!(KeyPress::parse("pgdown").unwrap().code, KeyCode::PageDown);
        assert!(KeyPress::parse("nonsense").is_none());
    }

    #[test]
    fn test_binding_respects_ctrl() {
        let clear = new_binding(vec![with_keys_str(&["ctrl+u"])]);
        assert!(clear.matches(&key(KeyCode::Char('u'), KeyModifiers::CONTROL)));
        assert!(!clear.matches(&key(KeyCode::Char('u'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_keys_and_free_matcher() {
        let prev = new_binding(vec![
            with_keys_str(&["pgup", "left", "bogus+"]),
            with_help("←", "prev"),
        ]);
        let codes: Vec<KeyCode> = prev.keys().iter().map(|k| k.code).collect();
        assert_eq!(codes, vec![KeyCode::PageUp, KeyCode::Left]);

        assert!(matches_binding(&key(KeyCode::Left, KeyModifiers::NONE), &prev));
        assert!(!matches_binding(&key(KeyCode::Right, KeyModifiers::NONE), &prev));
    }

    #[test]
    fn test_shift_is_ignored_for_chars() {
        let b = new_binding(vec![with_keys_str(&["H"])]);
        assert!(b.matches(&key(KeyCode::Char('H'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = new_binding(vec![with_keys_str(&["l"]), with_disabled()]);
        assert!(!b.matches(&key(KeyCode::Char('l'), KeyModifiers::NONE)));
        b.set_enabled(true);
        assert!(b.matches(&key(KeyCode::Char('l'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_short_help_line() {
        let a = new_binding(vec![with_keys_str(&["tab"]), with_help("tab", "switch focus")]);
        let b = new_binding(vec![with_keys_str(&["esc"]), with_help("esc", "quit")]);
        let hidden = new_binding(vec![with_keys_str(&["x"])]);
        assert_eq!(
            short_help_line(&[&a, &hidden, &b]),
            "tab switch focus • esc quit"
        );
    }
}
