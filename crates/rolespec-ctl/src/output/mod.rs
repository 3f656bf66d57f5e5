//! Diagnostics printed around the rendered documents.
//!
//! A rendered document is plain text and never passes through here. These
//! helpers cover the rest: the `Written to <file>` line after `--output`, and
//! the error and hint lines on failure. `anstream` strips the colors when the
//! stream is not a terminal.

mod styles;

use std::io::Write;

pub(crate) use styles::clap_styles;

use styles::{ERROR, HINT, SUCCESS};

/// `✓ <msg>` on stdout, after a file was written.
pub(crate) fn success(msg: impl std::fmt::Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{SUCCESS}✓ {msg}{SUCCESS:#}").ok();
}

/// `✗ <msg>` on stderr.
pub(crate) fn error(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{ERROR}✗ {msg}{ERROR:#}").ok();
}

/// Dimmed guidance on stderr, printed below an error.
pub(crate) fn hint(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{HINT}{msg}{HINT:#}").ok();
}
