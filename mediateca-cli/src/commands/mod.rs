pub mod config;
pub mod episodes;
pub mod ingest;
pub mod query;
pub mod rate;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Yellow warning marker for error lines, honoring color support.
pub fn warn_marker() -> String {
    "\u{26A0}"
        .if_supports_color(Stdout, |t| t.yellow())
        .to_string()
}
