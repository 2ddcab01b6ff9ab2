//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` for output only shown with `--verbose`
//!
//! # Example
//!
//! ```ignore
//! log!("encode"; "{} -> {}", input.display(), output.display());
//! debug!("encode"; "renamed {} to {}", old, new);
//! ```
//!
//! `warning` and `error` lines go to stderr, everything else to stdout.

use owo_colors::{OwoColorize, Stream, Style};
use std::{
    fmt,
    io::{Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let stream = stream_for(&module_lower);
    let line = format!("{} {message}", colorize_prefix(module, &module_lower, stream));

    if matches!(stream, Stream::Stderr) {
        let mut err = stderr().lock();
        writeln!(err, "{line}").ok();
        err.flush().ok();
    } else {
        let mut out = stdout().lock();
        writeln!(out, "{line}").ok();
        out.flush().ok();
    }
}

#[inline]
fn stream_for(module_lower: &str) -> Stream {
    match module_lower {
        "warning" | "error" => Stream::Stderr,
        _ => Stream::Stdout,
    }
}

/// Render `text` with `style` if `stream` gets colors.
///
/// Honors `--color` through `owo_colors::set_override`.
pub fn styled(text: impl fmt::Display, style: Style, stream: Stream) -> String {
    text.if_supports_color(stream, |text| text.style(style))
        .to_string()
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str, stream: Stream) -> String {
    let style = match module_lower {
        "encode" => Style::new().bright_blue(),
        "decode" => Style::new().bright_green(),
        "warning" => Style::new().bright_magenta(),
        "error" => Style::new().bright_red(),
        _ => Style::new().bright_yellow(),
    };
    styled(format!("[{module}]"), style.bold(), stream)
}
