//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for lines only shown with `--verbose`
//!
//! # Example
//!
//! ```ignore
//! log!("minify"; "{} -> {}", src.display(), dest.display());
//! debug!("scan"; "skipping directory {}", name);
//! ```

use owo_colors::{OwoColorize, Stream, Style};
use std::{
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

/// Log a message with a colored module prefix.
///
/// `[error]` lines go to stderr so the host build system surfaces them even
/// when it only captures the error stream.
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let line = format_line(module, &module_lower, message);

    if module_lower == "error" {
        let mut stderr = stderr().lock();
        writeln!(stderr, "{line}").ok();
        stderr.flush().ok();
    } else {
        let mut stdout = stdout().lock();
        writeln!(stdout, "{line}").ok();
        stdout.flush().ok();
    }
}

fn format_line(module: &str, module_lower: &str, message: &str) -> String {
    format!("{} {message}", colorize_prefix(module, module_lower))
}

/// Apply color to a module prefix based on module type
///
/// Honors `--color` through `owo_colors::set_override` and falls back to
/// TTY detection of the target stream.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    let (style, stream) = match module_lower {
        "config" => (Style::new().bright_blue().bold(), Stream::Stdout),
        "clean" => (Style::new().bright_magenta().bold(), Stream::Stdout),
        "pack" | "done" => (Style::new().bright_green().bold(), Stream::Stdout),
        "error" => (Style::new().bright_red().bold(), Stream::Stderr),
        _ => (Style::new().bright_yellow().bold(), Stream::Stdout),
    };
    prefix
        .if_supports_color(stream, |text| text.style(style))
        .to_string()
}

// ============================================================================
// Tests
// ============================================================================
