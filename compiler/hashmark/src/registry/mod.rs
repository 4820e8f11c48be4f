//! Command registry.
//!
//! Maps editor command identifiers to engine modes. The host builds one
//! registry and passes it to whatever needs to run commands; nothing here is
//! global.

use std::collections::BTreeMap;

use hashmark_fmt::{transform_selections, FormatConfig, Mode, Selection};
use tracing::info;

use crate::error::CliError;

pub const ADD_COMMENTS: &str = "commentFormatter.addComments";
pub const REMOVE_COMMENTS: &str = "commentFormatter.removeComments";
pub const FORMAT_COMMENTS: &str = "commentFormatter.formatComments";

/// A registered command: the pass it runs and the message reported when it
/// runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub mode: Mode,
    pub message: String,
}

impl Command {
    pub fn new(mode: Mode, message: impl Into<String>) -> Self {
        Self {
            mode,
            message: message.into(),
        }
    }
}

/// Registry of commands, keyed by identifier.
#[derive(Clone, Debug, Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Command>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the three built-in commands.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(
            ADD_COMMENTS,
            Command::new(Mode::Add, "Add comments command executed"),
        );
        registry.register(
            REMOVE_COMMENTS,
            Command::new(Mode::Remove, "Remove comments command executed"),
        );
        registry.register(
            FORMAT_COMMENTS,
            Command::new(Mode::Format, "Format comments command executed"),
        );
        registry
    }

    /// Register a command, returning the one it replaced, if any.
    pub fn register(&mut self, id: impl Into<String>, command: Command) -> Option<Command> {
        self.commands.insert(id.into(), command)
    }

    pub fn get(&self, id: &str) -> Option<&Command> {
        self.commands.get(id)
    }

    /// The first identifier, in sorted order, registered for `mode`.
    pub fn id_for(&self, mode: Mode) -> Option<&str> {
        self.iter()
            .find(|(_, command)| command.mode == mode)
            .map(|(id, _)| id)
    }

    /// Registered commands in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Command)> {
        self.commands.iter().map(|(id, cmd)| (id.as_str(), cmd))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Run command `id` over the given selections of `text`.
    pub fn execute(
        &self,
        id: &str,
        text: &str,
        selections: &[Selection],
        config: &FormatConfig,
    ) -> Result<String, CliError> {
        let command = self
            .get(id)
            .ok_or_else(|| CliError::UnknownCommand(id.to_string()))?;
        info!(id, mode = %command.mode, "{}", command.message);
        Ok(transform_selections(command.mode, text, selections, config)?)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests panic on unexpected state for clear failure messages"
)]
mod tests;
