//! Batch outcome and summary formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::{Stream, Style};

use crate::logger::styled;
use crate::utils::{plural_count, plural_s};

fn err(text: impl fmt::Display, style: Style) -> String {
    styled(text, style, Stream::Stderr)
}

fn out(text: impl fmt::Display, style: Style) -> String {
    styled(text, style, Stream::Stdout)
}

/// Outcome of converting a batch of files.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files written successfully.
    pub converted: usize,
    /// Warnings emitted across all converted files.
    pub warnings: usize,
    /// Failure message per input path.
    pub failures: BTreeMap<String, String>,
}

impl BatchReport {
    pub fn add_success(&mut self, warnings: usize) {
        self.converted += 1;
        self.warnings += warnings;
    }

    pub fn add_failure(&mut self, source: String, reason: String) {
        self.failures.insert(source, reason);
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Print failed files to stderr.
    pub fn print(&self) {
        if self.failures.is_empty() {
            return;
        }
        eprintln!();

        let count = self.failures.len();
        eprintln!(
            "{} {}",
            err("failed", Style::new().red().bold()),
            err(
                format!("({count} file{})", plural_s(count)),
                Style::new().dimmed()
            )
        );

        for (path, reason) in &self.failures {
            eprintln!(
                "{}{}{}",
                err("[", Style::new().dimmed()),
                err(path, Style::new().cyan()),
                err("]", Style::new().dimmed())
            );
            eprintln!("{} {}", err("→", Style::new().red()), reason);
        }
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            out(
                format!("converted {}", plural_count(self.converted, "file")),
                Style::new().green()
            )
        )?;
        if self.warnings > 0 {
            write!(
                f,
                "{}{}",
                out(", ", Style::new().dimmed()),
                out(plural_count(self.warnings, "warning"), Style::new().yellow())
            )?;
        }
        if self.has_failures() {
            write!(
                f,
                "{}{}",
                out(", ", Style::new().dimmed()),
                out(
                    format!("{} failed", self.failures.len()),
                    Style::new().red().bold()
                )
            )?;
        }
        Ok(())
    }
}
