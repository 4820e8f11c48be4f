//! Greedy word wrapping.
//!
//! Words are packed left to right into segments joined by single spaces. A
//! segment is closed as soon as the next word would push it past the width.
//! There is no lookahead and no hyphenation: a word wider than the limit sits
//! alone in its own segment rather than being split.
//!
//! Widths are measured in `char`s.

/// Wrap `text` into segments of at most `max_width` characters.
///
/// Any whitespace run separates words, so the output never contains
/// repeated, leading or trailing spaces. Text with no words produces no
/// segments at all.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.chars().count();

        if current_width == 0 {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            segments.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}
