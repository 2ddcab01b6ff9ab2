//! Non-fatal conversion warnings.
//!
//! Validation problems never abort an element or a file. They are collected
//! per file, tagged with the element they came from, and printed once the
//! file has been written.

use std::fmt;

use owo_colors::{Stream, Style};
use thiserror::Error;

use crate::logger::styled;

/// A single validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Issue {
    #[error("unsupported shaper attribute `{name}`")]
    UnknownAttribute { name: String },

    #[error("unsupported cut type `{value}`")]
    UnknownCutType { value: String },

    #[error("malformed token `{token}` skipped")]
    MalformedToken { token: String },

    #[error("no cut type for fill `{fill}` / stroke `{stroke}`")]
    Unclassified { fill: String, stroke: String },

    #[error("value `{value}` of `{name}` contains whitespace and will not survive re-encoding")]
    SpacedValue { name: String, value: String },

    #[error("prefix `{prefix}` was bound to `{previous}`, rebound to the controller namespace")]
    PrefixRebound { prefix: String, previous: String },
}

/// An [`Issue`] attached to the element that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human-readable element identity, e.g. `path "Triangle"`.
    pub element: String,
    pub issue: Issue,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{} {}",
            styled("[", Style::new().dimmed(), Stream::Stderr),
            styled(&self.element, Style::new().cyan(), Stream::Stderr),
            styled("]", Style::new().dimmed(), Stream::Stderr),
            self.issue
        )
    }
}

/// Warnings gathered while converting one document.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: impl Into<String>, issue: Issue) {
        self.items.push(Diagnostic {
            element: element.into(),
            issue,
        });
    }

    /// Attach every issue in `issues` to the same element.
    pub fn extend(&mut self, element: &str, issues: impl IntoIterator<Item = Issue>) {
        for issue in issues {
            self.push(element, issue);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Print all warnings through the logger.
    pub fn print(&self) {
        if self.is_empty() {
            return;
        }
        for diagnostic in self.iter() {
            crate::log!("warning"; "{}", diagnostic);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display() {
        let issue = Issue::UnknownCutType {
            value: "engrave".into(),
        };
        assert_eq!(issue.to_string(), "unsupported cut type `engrave`");
    }

    #[test]
    fn test_diagnostics_extend() {
        let mut diags = Diagnostics::new();
        diags.extend(
            "path \"Triangle\"",
            [
                Issue::UnknownAttribute { name: "feed".into() },
                Issue::MalformedToken {
                    token: "shaper:cutDepth".into(),
                },
            ],
        );
        assert_eq!(diags.len(), 2);
        assert!(diags.iter().all(|d| d.element == "path \"Triangle\""));
    }

    #[test]
    fn test_diagnostic_display_contains_element() {
        let diag = Diagnostic {
            element: "rect#a".into(),
            issue: Issue::UnknownAttribute { name: "feed".into() },
        };
        let display = diag.to_string();
        assert!(display.contains("rect#a"));
        assert!(display.contains("`feed`"));

        owo_colors::set_override(false);
        assert_eq!(diag.to_string(), "[rect#a] unsupported shaper attribute `feed`");
    }
}
