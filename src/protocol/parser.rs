//! Line Command Parser
//!
//! Turns one line of text into a validated [`Command`].
//!
//! ## How the Parser Works
//!
//! 1. Split the line on runs of whitespace (leading/trailing whitespace is ignored).
//! 2. Match the first token against the supported command names (case-sensitive).
//! 3. Check the remaining token count against the command's arity.
//! 4. Check every argument against the allowed charset `[A-Za-z0-9_/*]`.
//!
//! The first failing step decides the error. Nothing here panics on any input.

use crate::error::ErrorKind;
use crate::protocol::types::{Command, CommandName};
use thiserror::Error;

/// Errors that can occur while parsing a command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line contains no tokens
    #[error("empty input string")]
    EmptyInput,

    /// The first token is not a supported command name
    #[error(
        "unknown command: {name:?}. Supported: \"SET\", \"GET\", \"DEL\". Usage: SET key value | GET key | DEL key"
    )]
    UnknownCommand { name: String },

    /// The argument count does not match the command's arity
    #[error("{name}: wrong number of arguments (want {want}, got {got}). Usage: {}", usage_of(.name))]
    WrongArity {
        name: CommandName,
        want: usize,
        got: usize,
    },

    /// An argument contains a character outside the allowed set.
    ///
    /// The message also lists `-` and `.`, which the validator does not accept.
    #[error(
        "invalid argument {index}: {arg:?}. Allowed characters: letters, digits, '_', '/', '*', '-', '.'"
    )]
    InvalidArgument { index: usize, arg: String },
}

impl ParseError {
    /// Returns the stable kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::EmptyInput => ErrorKind::EmptyInput,
            ParseError::UnknownCommand { .. } => ErrorKind::UnknownCommand,
            ParseError::WrongArity { .. } => ErrorKind::WrongArity,
            ParseError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
        }
    }
}

fn usage_of(name: &CommandName) -> &'static str {
    name.usage()
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one line of input into a [`Command`].
///
/// # Example
///
/// ```
/// use linekv::protocol::{parse_line, Command};
///
/// let cmd = parse_line("  SET   name  Ariz ").unwrap();
/// assert_eq!(
///     cmd,
///     Command::Set { key: "name".to_string(), value: "Ariz".to_string() }
/// );
/// ```
pub fn parse_line(input: &str) -> ParseResult<Command> {
    let mut tokens = input.split_whitespace();

    let first = tokens.next().ok_or(ParseError::EmptyInput)?;
    let name = CommandName::from_token(first).ok_or_else(|| ParseError::UnknownCommand {
        name: first.to_string(),
    })?;

    let args: Vec<&str> = tokens.collect();
    if args.len() != name.arity() {
        return Err(ParseError::WrongArity {
            name,
            want: name.arity(),
            got: args.len(),
        });
    }

    for (i, arg) in args.iter().enumerate() {
        if !is_valid_argument(arg) {
            return Err(ParseError::InvalidArgument {
                index: i + 1,
                arg: arg.to_string(),
            });
        }
    }

    let command = match name {
        CommandName::Set => Command::Set {
            key: args[0].to_string(),
            value: args[1].to_string(),
        },
        CommandName::Get => Command::Get {
            key: args[0].to_string(),
        },
        CommandName::Del => Command::Del {
            key: args[0].to_string(),
        },
    };

    Ok(command)
}

/// Returns true if `arg` is non-empty and made only of ASCII letters, digits,
/// `_`, `/` or `*`.
#[inline]
pub fn is_valid_argument(arg: &str) -> bool {
    !arg.is_empty()
        && arg
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'/' | b'*'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(key: &str, value: &str) -> Command {
        Command::Set {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    fn assert_err_contains(input: &str, needle: &str) {
        match parse_line(input) {
            Err(e) => assert!(
                e.to_string().contains(needle),
                "input {:?}: expected error containing {:?}, got {:?}",
                input,
                needle,
                e.to_string()
            ),
            Ok(cmd) => panic!("input {:?}: expected error, got {:?}", input, cmd),
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_line(""), Err(ParseError::EmptyInput));
        assert_eq!(parse_line("   \t  "), Err(ParseError::EmptyInput));
        assert_err_contains("", "empty input string");
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_line("FOO").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownCommand);

        let msg = err.to_string();
        assert!(msg.starts_with("unknown command: \"FOO\""));
        assert!(msg.contains("SET key value"));
        assert!(msg.contains("GET key"));
        assert!(msg.contains("DEL key"));
    }

    #[test]
    fn test_case_sensitive() {
        let err = parse_line("set a b").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownCommand);
        assert_err_contains("get a", "unknown command");
    }

    #[test]
    fn test_wrong_arity() {
        assert_err_contains("SET only", "wrong number of arguments (want 2, got 1)");
        assert_err_contains("SET a b c", "wrong number of arguments (want 2, got 3)");
        assert_err_contains("GET", "wrong number of arguments (want 1, got 0)");
        assert_err_contains("GET a b", "wrong number of arguments (want 1, got 2)");
        assert_err_contains("DEL", "wrong number of arguments (want 1, got 0)");
        assert_err_contains("DEL a b", "wrong number of arguments (want 1, got 2)");
    }

    #[test]
    fn test_wrong_arity_message() {
        let err = parse_line("SET only").unwrap_err();
        assert_eq!(
            err.to_string(),
            "SET: wrong number of arguments (want 2, got 1). Usage: SET key value"
        );
        assert_eq!(err.kind(), ErrorKind::WrongArity);
    }

    #[test]
    fn test_arity_checked_before_charset() {
        let err = parse_line("GET a@b c").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WrongArity);
    }

    #[test]
    fn test_invalid_argument() {
        assert_err_contains("SET inv@lid val", "invalid argument 1");
        assert_err_contains("SET key val@ue", "invalid argument 2");
        assert_err_contains("GET ключ", "invalid argument 1");
    }

    #[test]
    fn test_hyphen_and_dot_rejected() {
        // Advertised in the message, but not accepted.
        let err = parse_line("SET a-b c").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidArgument {
                index: 1,
                arg: "a-b".to_string()
            }
        );
        assert!(err.to_string().contains("'-', '.'"));

        let err = parse_line("SET key v.1").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidArgument {
                index: 2,
                arg: "v.1".to_string()
            }
        );
    }

    #[test]
    fn test_valid_commands() {
        assert_eq!(parse_line("SET KEY1 VALUE_2"), Ok(set("KEY1", "VALUE_2")));
        assert_eq!(
            parse_line("GET KEY1"),
            Ok(Command::Get {
                key: "KEY1".to_string()
            })
        );
        assert_eq!(
            parse_line("DEL KEY1"),
            Ok(Command::Del {
                key: "KEY1".to_string()
            })
        );
    }

    #[test]
    fn test_wildcard_and_slash() {
        assert_eq!(
            parse_line("SET path path/to/*"),
            Ok(set("path", "path/to/*"))
        );
    }

    #[test]
    fn test_whitespace_tolerance() {
        assert_eq!(parse_line("   SET   A   B   "), parse_line("SET A B"));
        assert_eq!(parse_line("   SET   A   B   "), Ok(set("A", "B")));
        assert_eq!(
            parse_line("GET\tKEY1"),
            Ok(Command::Get {
                key: "KEY1".to_string()
            })
        );
    }

    #[test]
    fn test_is_valid_argument() {
        assert!(is_valid_argument("abc_XYZ/019*"));
        assert!(!is_valid_argument(""));
        assert!(!is_valid_argument("a b"));
        assert!(!is_valid_argument("a:b"));
        assert!(!is_valid_argument("é"));
    }
}
