//! Line splitting and joining.
//!
//! Input may mix `\n` and `\r\n` endings. Output always uses `\n`.

/// Split text into lines on `\n` or `\r\n`.
///
/// A lone `\r` is kept as content. The result always has one more element
/// than there are separators, so a trailing separator yields a final empty
/// line and empty input yields a single empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Join lines with `\n`, without a trailing separator.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let capacity = lines.iter().map(|l| l.as_ref().len() + 1).sum();
    let mut out = String::with_capacity(capacity);
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line.as_ref());
    }
    out
}

/// Split the leading whitespace run off a line.
///
/// Returns `(indent, rest)` where `indent` is the maximal whitespace prefix.
pub(crate) fn split_indent(line: &str) -> (&str, &str) {
    let rest = line.trim_start();
    line.split_at(line.len() - rest.len())
}
