//! Hashmark Formatter
//!
//! Adds, removes, and reflows `#` line comments over a block of text.
//!
//! # Architecture
//!
//! Every pass is a pure function from lines to lines:
//!
//! ```text
//! text ──► split_lines ──► { add | remove | format } ──► join_lines ──► text
//!                                              │
//!                                              └──► wrap_text
//! ```
//!
//! Adding and removing map each line to exactly one line. Reflow maps each
//! comment line to zero or more lines and leaves everything else alone.
//!
//! # Modules
//!
//! - [`lines`]: Splitting on `\n`/`\r\n` and joining with `\n`
//! - [`comment`]: Adding and removing the `#` marker
//! - [`reflow`]: Rewrapping comment lines to a width
//! - [`wrap`]: Greedy word wrapping
//! - [`transform`]: Text-in, text-out entry points
//! - [`selection`]: Applying a pass to spans of a larger document
//!
//! # Example
//!
//! ```
//! use hashmark_fmt::{transform, Mode};
//!
//! assert_eq!(transform(Mode::Add, "hello\nworld"), "# hello\n# world");
//! assert_eq!(transform(Mode::Remove, "# hello\n#world"), "hello\nworld");
//! ```

pub mod comment;
pub mod config;
pub mod lines;
pub mod reflow;
pub mod selection;
pub mod transform;
pub mod wrap;

pub use comment::{add_comment, add_comments, is_commented, remove_comment, remove_comments};
pub use config::{ConfigError, FormatConfig, DEFAULT_WIDTH, MARKER};
pub use lines::{join_lines, split_lines};
pub use reflow::{format_comment, format_comments};
pub use selection::{transform_selections, Selection, SelectionError};
pub use transform::{transform, transform_with_config, Mode, ParseModeError};
pub use wrap::wrap_text;
