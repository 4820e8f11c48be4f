//! Text-level entry points.
//!
//! Splits the input into lines, runs one pass over them, and joins the result
//! with `\n`. Every line ending in the input is normalised on the way through.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::comment::{add_comments, remove_comments};
use crate::config::FormatConfig;
use crate::lines::{join_lines, split_lines};
use crate::reflow::format_comments;

/// Which pass to run over the text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Comment out every line.
    Add,
    /// Uncomment every line.
    Remove,
    /// Rewrap comment lines to the configured width.
    Format,
}

impl Mode {
    /// Every mode, in display order.
    pub const ALL: [Mode; 3] = [Mode::Add, Mode::Remove, Mode::Format];

    /// The lowercase name used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Add => "add",
            Mode::Remove => "remove",
            Mode::Format => "format",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

/// A string that names no [`Mode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode `{0}` (expected add, remove or format)")]
pub struct ParseModeError(pub String);

/// Transform `text` with the default configuration.
pub fn transform(mode: Mode, text: &str) -> String {
    transform_with_config(mode, text, &FormatConfig::default())
}

/// Transform `text` with an explicit configuration.
///
/// Only [`Mode::Format`] reads `config.max_width`.
#[tracing::instrument(level = "debug", skip(text, config), fields(bytes = text.len()))]
pub fn transform_with_config(mode: Mode, text: &str, config: &FormatConfig) -> String {
    let lines = split_lines(text);
    let out = match mode {
        Mode::Add => add_comments(&lines),
        Mode::Remove => remove_comments(&lines),
        Mode::Format => format_comments(&lines, config.max_width),
    };
    tracing::debug!(lines_in = lines.len(), lines_out = out.len(), "pass complete");
    join_lines(&out)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests panic on unexpected state for clear failure messages"
)]
