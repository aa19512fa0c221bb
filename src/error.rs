//! Error kinds shared across the crate.
//!
//! Every error type in linekv carries a free-form message for humans and a
//! stable [`ErrorKind`] tag for callers that need to branch on the failure,
//! e.g. to tell a lookup miss apart from a malformed command.

use std::fmt;

/// Result type alias using [`CommandError`](crate::commands::CommandError).
pub type Result<T> = std::result::Result<T, crate::commands::CommandError>;

/// Stable classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    // -------------------------------------------------------------------------
    // Parse-time
    // -------------------------------------------------------------------------
    /// No tokens after trimming/splitting
    EmptyInput,

    /// First token is not one of SET, GET, DEL
    UnknownCommand,

    /// Argument count does not match the command's arity
    WrongArity,

    /// An argument contains a character outside `[A-Za-z0-9_/*]`
    InvalidArgument,

    // -------------------------------------------------------------------------
    // Storage
    // -------------------------------------------------------------------------
    /// Lookup miss
    KeyNotFound,

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------
    /// Writing to the output sink failed
    Io,
}

impl ErrorKind {
    /// Returns true for failures caused by malformed input.
    pub fn is_parse(self) -> bool {
        matches!(
            self,
            ErrorKind::EmptyInput
                | ErrorKind::UnknownCommand
                | ErrorKind::WrongArity
                | ErrorKind::InvalidArgument
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "EmptyInput",
            ErrorKind::UnknownCommand => "UnknownCommand",
            ErrorKind::WrongArity => "WrongArity",
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::KeyNotFound => "KeyNotFound",
            ErrorKind::Io => "Io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kinds() {
        assert!(ErrorKind::EmptyInput.is_parse());
        assert!(ErrorKind::UnknownCommand.is_parse());
        assert!(ErrorKind::WrongArity.is_parse());
        assert!(ErrorKind::InvalidArgument.is_parse());
        assert!(!ErrorKind::KeyNotFound.is_parse());
        assert!(!ErrorKind::Io.is_parse());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorKind::KeyNotFound.to_string(), "KeyNotFound");
    }
}
