//! Adding and removing comment markers.
//!
//! Both passes work one line at a time and never look at neighbouring lines.
//! Removing is the near-inverse of adding: for any line with content and no
//! marker, `remove_comment(&add_comment(line)) == line`. Blank lines are the
//! exception. Adding collapses them to a bare `#`, and removing a bare `#`
//! yields an empty line, so any indentation a blank line carried is lost.

use std::borrow::Cow;

use tracing::trace;

use crate::config::MARKER;
use crate::lines::split_indent;

/// Comment out a single line.
///
/// - Blank lines (empty after trimming) become a bare `#`.
/// - Lines whose first non-whitespace character is already `#` are returned
///   unchanged, so commenting twice is a no-op.
/// - Anything else is prefixed with `"# "`, indentation included.
pub fn add_comment(line: &str) -> Cow<'_, str> {
    if line.trim().is_empty() {
        return Cow::Owned(MARKER.to_string());
    }
    if is_commented(line) {
        return Cow::Borrowed(line);
    }
    Cow::Owned(format!("{MARKER} {line}"))
}

/// Uncomment a single line.
///
/// Empty and whitespace-only lines pass through verbatim. Otherwise the first
/// `#` after the indentation is dropped along with at most one space after
/// it; the indentation is kept. Lines without a marker are unchanged.
pub fn remove_comment(line: &str) -> Cow<'_, str> {
    if line.trim().is_empty() {
        return Cow::Borrowed(line);
    }

    let (indent, stripped) = split_indent(line);
    let Some(body) = stripped.strip_prefix(MARKER) else {
        return Cow::Borrowed(line);
    };
    let body = body.strip_prefix(' ').unwrap_or(body);

    if indent.is_empty() {
        Cow::Borrowed(body)
    } else {
        Cow::Owned(format!("{indent}{body}"))
    }
}

/// Comment out every line.
pub fn add_comments<'a>(lines: &[&'a str]) -> Vec<Cow<'a, str>> {
    trace!(lines = lines.len(), "adding comment markers");
    lines.iter().copied().map(add_comment).collect()
}

/// Uncomment every line.
pub fn remove_comments<'a>(lines: &[&'a str]) -> Vec<Cow<'a, str>> {
    trace!(lines = lines.len(), "removing comment markers");
    lines.iter().copied().map(remove_comment).collect()
}

/// Whether the first character after the indentation is the marker.
pub fn is_commented(line: &str) -> bool {
    line.trim_start().starts_with(MARKER)
}
