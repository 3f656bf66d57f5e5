//! Colors for `rolespec-ctl` diagnostics and `--help`.

use anstyle::{AnsiColor, Color, Effects, Style};

/// `Written to <file>` confirmations.
pub(crate) const SUCCESS: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));

/// Load, read, and write failures.
pub(crate) const ERROR: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));

/// Follow-up line under an error, e.g. where the specs file is expected.
pub(crate) const HINT: Style = Style::new().effects(Effects::DIMMED);

const HEADING: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::Green)))
    .effects(Effects::BOLD);

const LITERAL: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));

/// Help styling: green section headings, cyan subcommand and option names.
pub(crate) fn clap_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .header(HEADING)
        .usage(HEADING)
        .literal(LITERAL)
        .placeholder(LITERAL)
        .error(
            Style::new()
                .fg_color(Some(Color::Ansi(AnsiColor::Red)))
                .effects(Effects::BOLD),
        )
}
