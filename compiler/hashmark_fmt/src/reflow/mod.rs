//! Comment reflow.
//!
//! Rewraps the text of each `#` comment line so that the rebuilt lines fit in
//! the configured width. Lines that are not comments are left exactly as they
//! are, which makes reflow safe to run over a selection mixing code and
//! comments.
//!
//! Every comment line is wrapped on its own; consecutive comment lines are
//! not merged into one paragraph.

use std::borrow::Cow;

use tracing::trace;

use crate::config::MARKER;
use crate::lines::split_indent;
use crate::wrap::wrap_text;

/// Width taken by the rebuilt `"# "` prefix.
const PREFIX_WIDTH: usize = 2;

/// Reflow a single line into zero or more lines.
///
/// Returns the line untouched when it is not a comment, or when the
/// indentation plus prefix leave no room for text. A comment with no words
/// (a bare `#`) produces no lines at all.
pub fn format_comment(line: &str, width: usize) -> Vec<Cow<'_, str>> {
    let (indent, stripped) = split_indent(line);
    let Some(content) = stripped.strip_prefix(MARKER) else {
        return vec![Cow::Borrowed(line)];
    };
    let content = content.strip_prefix(' ').unwrap_or(content);

    let indent_width = indent.chars().count();
    let effective_width = match width.checked_sub(indent_width + PREFIX_WIDTH) {
        Some(w) if w > 0 => w,
        _ => {
            trace!(width, indent_width, "no room to wrap, keeping line");
            return vec![Cow::Borrowed(line)];
        }
    };

    wrap_text(content, effective_width)
        .into_iter()
        .map(|segment| Cow::Owned(format!("{indent}{MARKER} {segment}")))
        .collect()
}

/// Reflow every comment line to `width`.
///
/// The output may have more or fewer lines than the input; untouched lines
/// keep their relative position.
pub fn format_comments<'a>(lines: &[&'a str], width: usize) -> Vec<Cow<'a, str>> {
    trace!(lines = lines.len(), width, "reflowing comments");
    lines
        .iter()
        .flat_map(|&line| format_comment(line, width))
        .collect()
}
