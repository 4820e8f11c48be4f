//! Applying a pass to selected spans of a document.
//!
//! An editor hands over one or more selections. Each non-empty selection is
//! transformed on its own and spliced back in place; text outside the
//! selections is never touched. Selections share no state, so the order they
//! are processed in does not matter.

use std::fmt;

use thiserror::Error;

use crate::config::FormatConfig;
use crate::transform::{transform_with_config, Mode};

/// A byte range `start..end` into a document.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Select the whole of `text`.
    pub fn all(text: &str) -> Self {
        Self::new(0, text.len())
    }

    /// Select lines `first..=last` (1-based) of `text`.
    ///
    /// The selection ends before the line ending of `last`, so the document's
    /// line structure around the selection is left alone.
    pub fn from_line_range(text: &str, first: usize, last: usize) -> Result<Self, SelectionError> {
        let starts: Vec<usize> = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        let line_count = starts.len();

        if first == 0 || first > last || last > line_count {
            return Err(SelectionError::InvalidLineRange {
                first,
                last,
                line_count,
            });
        }

        let start = starts[first - 1];
        let end = if last < line_count {
            // `starts[last]` is just past the `\n` that ends line `last`
            let newline = starts[last] - 1;
            if text[..newline].ends_with('\r') {
                newline - 1
            } else {
                newline
            }
        } else {
            text.len()
        };

        Ok(Self::new(start, end))
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn validate(self, text: &str) -> Result<(), SelectionError> {
        if self.start > self.end {
            return Err(SelectionError::Reversed(self));
        }
        if self.end > text.len() {
            return Err(SelectionError::OutOfBounds {
                selection: self,
                len: text.len(),
            });
        }
        for offset in [self.start, self.end] {
            if !text.is_char_boundary(offset) {
                return Err(SelectionError::NotCharBoundary(offset));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A selection that cannot be applied to the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("selection {0} ends before it starts")]
    Reversed(Selection),
    #[error("selection {selection} is out of bounds for a document of {len} bytes")]
    OutOfBounds { selection: Selection, len: usize },
    #[error("offset {0} is not on a character boundary")]
    NotCharBoundary(usize),
    #[error("selections {0} and {1} overlap")]
    Overlap(Selection, Selection),
    #[error("line range {first}:{last} is invalid for a document of {line_count} lines")]
    InvalidLineRange {
        first: usize,
        last: usize,
        line_count: usize,
    },
}

/// Transform each selection of `text` independently.
///
/// Empty selections are skipped. Non-empty selections must not overlap; they
/// may be given in any order.
pub fn transform_selections(
    mode: Mode,
    text: &str,
    selections: &[Selection],
    config: &FormatConfig,
) -> Result<String, SelectionError> {
    let mut ordered = Vec::with_capacity(selections.len());
    for &selection in selections {
        selection.validate(text)?;
        if selection.is_empty() {
            tracing::trace!(%selection, "skipping empty selection");
            continue;
        }
        ordered.push(selection);
    }
    ordered.sort_by_key(|s| s.start);

    for pair in ordered.windows(2) {
        if let [a, b] = pair {
            if a.end > b.start {
                return Err(SelectionError::Overlap(*a, *b));
            }
        }
    }

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for selection in ordered {
        out.push_str(&text[cursor..selection.start]);
        out.push_str(&transform_with_config(
            mode,
            &text[selection.start..selection.end],
            config,
        ));
        cursor = selection.end;
    }
    out.push_str(&text[cursor..]);

    Ok(out)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests panic on unexpected state for clear failure messages"
)]
