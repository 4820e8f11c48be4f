//! The `add`, `remove`, `format` and `exec` commands: run a registered
//! command over files or stdin.
//!
//! Multiple files are processed in parallel. Results are reported in the
//! order the paths were given.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use hashmark_fmt::{FormatConfig, Selection, SelectionError};
use rayon::prelude::*;
use similar::TextDiff;
use thiserror::Error;
use tracing::debug;

use super::read_file;
use crate::error::CliError;
use crate::registry::CommandRegistry;

/// A 1-based, inclusive range of lines: `START:END`, or `LINE` for one line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LineRange {
    pub first: usize,
    pub last: usize,
}

impl FromStr for LineRange {
    type Err = LineRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LineRangeError(s.to_string());
        let parse = |part: &str| part.trim().parse::<usize>().map_err(|_| invalid());

        let (first, last) = match s.split_once(':') {
            Some((first, last)) => (parse(first)?, parse(last)?),
            None => {
                let line = parse(s)?;
                (line, line)
            }
        };
        if first == 0 || first > last {
            return Err(invalid());
        }
        Ok(Self { first, last })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid line range `{0}` (expected START:END or LINE, counting from 1)")]
pub struct LineRangeError(pub String);

/// Configuration for the edit commands.
#[derive(Clone, Debug, Default)]
pub struct EditConfig {
    /// Report files that would change without modifying them.
    /// The run fails if any file would be modified.
    pub check: bool,
    /// Print a diff instead of modifying files.
    pub diff: bool,
    /// Read from stdin and write to stdout.
    pub stdin: bool,
    /// Line ranges to edit. Empty means the whole document.
    pub lines: Vec<LineRange>,
    pub format: FormatConfig,
}

/// Result of editing a single file.
#[derive(Debug, PartialEq, Eq)]
pub enum EditResult {
    /// The command left the file as it was.
    Unchanged,
    /// The file was rewritten.
    Edited,
    /// The file would change (check or diff mode). Carries the diff in diff
    /// mode.
    WouldEdit { diff: Option<String> },
    /// The file could not be edited. Contains the error message.
    Failed(String),
}

/// Counts over every path in a run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EditSummary {
    pub edited: usize,
    pub unchanged: usize,
    pub errors: usize,
}

impl EditSummary {
    /// Whether the run should exit successfully.
    pub fn is_success(&self, check: bool) -> bool {
        self.errors == 0 && !(check && self.edited > 0)
    }

    fn record(&mut self, result: &EditResult) {
        match result {
            EditResult::Edited | EditResult::WouldEdit { .. } => self.edited += 1,
            EditResult::Unchanged => self.unchanged += 1,
            EditResult::Failed(_) => self.errors += 1,
        }
    }
}

/// Unchanged lines shown around each change in a diff.
const DIFF_CONTEXT: usize = 2;

/// Line ending a document uses, taken from its first line.
///
/// The engine always joins lines with `\n`. Edited text is put back into the
/// document's own convention so that a CRLF file stays CRLF.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(newline) if text[..newline].ends_with('\r') => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }

    /// Rewrite every bare `\n` in `text` to this line ending.
    fn apply(self, text: String) -> String {
        if self == LineEnding::Lf {
            return text;
        }
        let mut out = String::with_capacity(text.len() + text.len() / 16);
        let mut after_cr = false;
        for c in text.chars() {
            if c == '\n' && !after_cr {
                out.push('\r');
            }
            out.push(c);
            after_cr = c == '\r';
        }
        out
    }
}

/// The whole document minus its final line ending.
///
/// Files normally end with a newline, and treating the empty "line" after it
/// as content would make `add` append a stray `#`.
fn whole_document(text: &str) -> Selection {
    let body = text
        .strip_suffix('\n')
        .map_or(text, |body| body.strip_suffix('\r').unwrap_or(body));
    Selection::new(0, body.len())
}

fn selections_for(text: &str, lines: &[LineRange]) -> Result<Vec<Selection>, SelectionError> {
    if lines.is_empty() {
        return Ok(vec![whole_document(text)]);
    }
    lines
        .iter()
        .map(|range| Selection::from_line_range(text, range.first, range.last))
        .collect()
}

/// Run command `command_id` over `content`.
pub fn edit_content(
    command_id: &str,
    content: &str,
    registry: &CommandRegistry,
    config: &EditConfig,
) -> Result<String, CliError> {
    let selections = selections_for(content, &config.lines)?;
    let edited = registry.execute(command_id, content, &selections, &config.format)?;
    Ok(LineEnding::detect(content).apply(edited))
}

/// Run command `command_id` over a file, writing the result back unless in
/// check or diff mode.
pub fn edit_file(
    path: &Path,
    command_id: &str,
    registry: &CommandRegistry,
    config: &EditConfig,
) -> EditResult {
    match try_edit_file(path, command_id, registry, config) {
        Ok(result) => result,
        Err(e @ (CliError::Read { .. } | CliError::Write { .. })) => {
            EditResult::Failed(e.to_string())
        }
        Err(e) => EditResult::Failed(format!("{}: {e}", path.display())),
    }
}

fn try_edit_file(
    path: &Path,
    command_id: &str,
    registry: &CommandRegistry,
    config: &EditConfig,
) -> Result<EditResult, CliError> {
    let content = read_file(path)?;
    let edited = edit_content(command_id, &content, registry, config)?;

    if edited == content {
        return Ok(EditResult::Unchanged);
    }

    if config.check {
        return Ok(EditResult::WouldEdit { diff: None });
    }

    if config.diff {
        let diff = render_diff(&path.display().to_string(), &content, &edited);
        return Ok(EditResult::WouldEdit { diff: Some(diff) });
    }

    std::fs::write(path, &edited).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(EditResult::Edited)
}

/// Run command `command_id` over everything `reader` yields.
pub fn edit_reader<R: Read>(
    mut reader: R,
    command_id: &str,
    registry: &CommandRegistry,
    config: &EditConfig,
) -> Result<String, CliError> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(CliError::Stdin)?;
    edit_content(command_id, &content, registry, config)
}

/// Render a unified diff between original and edited content.
///
/// Lines are aligned before comparing, so a reflow that adds or drops lines
/// only marks the lines it touched.
pub fn render_diff(path: &str, original: &str, edited: &str) -> String {
    TextDiff::from_lines(original, edited)
        .unified_diff()
        .context_radius(DIFF_CONTEXT)
        .header(path, path)
        .to_string()
}

/// Run an edit command over `paths`, or over stdin when `paths` is empty or
/// `config.stdin` is set.
pub fn run_edit(
    command_id: &str,
    paths: &[PathBuf],
    registry: &CommandRegistry,
    config: &EditConfig,
) -> Result<EditSummary, CliError> {
    if registry.get(command_id).is_none() {
        return Err(CliError::UnknownCommand(command_id.to_string()));
    }

    if config.stdin || paths.is_empty() {
        if !paths.is_empty() {
            return Err(CliError::Usage("cannot specify paths with --stdin"));
        }
        if config.check {
            return Err(CliError::Usage("cannot use --check with --stdin"));
        }
        if config.diff {
            return Err(CliError::Usage("cannot use --diff with --stdin"));
        }
        let edited = edit_reader(std::io::stdin().lock(), command_id, registry, config)?;
        print!("{edited}");
        return Ok(EditSummary {
            edited: 1,
            ..EditSummary::default()
        });
    }

    debug!(command_id, files = paths.len(), "editing files");

    let results: Vec<EditResult> = paths
        .par_iter()
        .map(|path| {
            if path.is_file() {
                edit_file(path, command_id, registry, config)
            } else {
                EditResult::Failed(CliError::NotAFile(path.clone()).to_string())
            }
        })
        .collect();

    let mut summary = EditSummary::default();
    for (path, result) in paths.iter().zip(&results) {
        let path = path.display();
        match result {
            EditResult::Edited => println!("Edited: {path}"),
            EditResult::WouldEdit { diff: Some(diff) } => print!("{diff}"),
            EditResult::WouldEdit { diff: None } => println!("Would edit: {path}"),
            EditResult::Unchanged => {}
            EditResult::Failed(message) => eprintln!("error: {message}"),
        }
        summary.record(result);
    }

    if paths.len() > 1 {
        let verb = if config.check || config.diff {
            "would edit"
        } else {
            "edited"
        };
        println!(
            "\n{} {verb}, {} unchanged",
            summary.edited, summary.unchanged
        );
    }

    Ok(summary)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests panic on unexpected state for clear failure messages"
)]
