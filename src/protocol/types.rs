//! Command Protocol Data Types
//!
//! This module defines the values produced by the line parser.
//!
//! ## Protocol Format
//!
//! One command per line, tokens separated by any run of whitespace:
//!
//! | Command | Arity | Syntax          |
//! |---------|-------|-----------------|
//! | `SET`   | 2     | `SET key value` |
//! | `GET`   | 1     | `GET key`       |
//! | `DEL`   | 1     | `DEL key`       |
//!
//! Command names are case-sensitive.

use std::fmt;

/// The closed set of operation tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    Set,
    Get,
    Del,
}

impl CommandName {
    /// Every supported command, in the order they are advertised.
    pub const ALL: [CommandName; 3] = [CommandName::Set, CommandName::Get, CommandName::Del];

    /// Matches a token against the supported names. Case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "SET" => Some(CommandName::Set),
            "GET" => Some(CommandName::Get),
            "DEL" => Some(CommandName::Del),
            _ => None,
        }
    }

    /// The wire spelling of the command.
    pub fn as_str(self) -> &'static str {
        match self {
            CommandName::Set => "SET",
            CommandName::Get => "GET",
            CommandName::Del => "DEL",
        }
    }

    /// Exact number of arguments the command takes.
    pub fn arity(self) -> usize {
        match self {
            CommandName::Set => 2,
            CommandName::Get | CommandName::Del => 1,
        }
    }

    /// Human-readable usage string.
    pub fn usage(self) -> &'static str {
        match self {
            CommandName::Set => "SET key value",
            CommandName::Get => "GET key",
            CommandName::Del => "DEL key",
        }
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated command.
///
/// Only the parser builds these, so arity and argument charset have already
/// been checked by the time a `Command` reaches the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert or overwrite `key`
    Set { key: String, value: String },

    /// Look up `key`
    Get { key: String },

    /// Remove `key`
    Del { key: String },
}

impl Command {
    /// Returns the operation tag.
    pub fn name(&self) -> CommandName {
        match self {
            Command::Set { .. } => CommandName::Set,
            Command::Get { .. } => CommandName::Get,
            Command::Del { .. } => CommandName::Del,
        }
    }

    /// Returns the arguments in their original order.
    pub fn args(&self) -> Vec<&str> {
        match self {
            Command::Set { key, value } => vec![key.as_str(), value.as_str()],
            Command::Get { key } | Command::Del { key } => vec![key.as_str()],
        }
    }

    /// Returns the key the command operates on.
    pub fn key(&self) -> &str {
        match self {
            Command::Set { key, .. } | Command::Get { key } | Command::Del { key } => key.as_str(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().as_str())?;
        for arg in self.args() {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
