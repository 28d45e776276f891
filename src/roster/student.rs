//! Default roster entry.
//!
//! `Student` carries the three lines shown for each person on a class roster:
//! name, email and the date they joined.
//!
//! ```rust
//! use roster_pager::roster::{Item, Student};
//!
//! let s = Student::new("Ana Smith", "ana.smith@example.com", "Joined 07/15/15");
//! assert!(s.display_text().contains("ana.smith@example.com"));
//! assert_eq!(s.to_string(), "Ana Smith");
//! ```

use super::Item;
use std::fmt::Display;

/// A person on the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Full name, shown as the entry title.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Join date as displayed, e.g. `"Joined 07/15/15"`.
    pub joined: String,
}

impl Student {
    /// Creates a student entry.
    pub fn new(name: &str, email: &str, joined: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            joined: joined.to_string(),
        }
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Item for Student {
    fn display_text(&self) -> String {
        format!("{}\n{}\n{}", self.name, self.email, self.joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text_covers_every_line() {
        let s = Student::new("Bo Li", "bo@example.com", "Joined 01/02/03");
        let text = s.display_text();
        assert!(text.contains("Bo Li"));
        assert!(text.contains("bo@example.com"));
        assert!(text.contains("Joined 01/02/03"));
    }
}
