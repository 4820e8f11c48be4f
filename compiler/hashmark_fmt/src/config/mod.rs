//! Formatting configuration.
//!
//! The only tunable is the wrap width used by the reflow pass. Adding and
//! removing comments ignore it.

use thiserror::Error;

/// Default target line width for reflowed comments.
pub const DEFAULT_WIDTH: usize = 80;

/// The comment marker recognised and produced by every pass.
pub const MARKER: char = '#';

/// Configuration for a transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Target maximum length of a reflowed line, counting indentation and the
    /// `"# "` prefix. Defaults to 80 characters.
    pub max_width: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_WIDTH,
        }
    }
}

impl FormatConfig {
    /// Create a config, rejecting a zero width.
    ///
    /// Hosts should build their config through this so that a bad width
    /// surfaces as an error instead of silently leaving every line alone.
    pub fn new(max_width: usize) -> Result<Self, ConfigError> {
        if max_width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        Ok(Self { max_width })
    }

    /// Create a config with the specified max width, without validation.
    ///
    /// Widths too narrow to hold any text make the reflow pass leave lines
    /// unchanged.
    pub fn with_max_width(max_width: usize) -> Self {
        Self { max_width }
    }
}

/// Invalid configuration supplied by a host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("wrap width must be at least 1")]
    ZeroWidth,
}
