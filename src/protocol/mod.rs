//! Line Command Protocol
//!
//! The textual protocol clients speak to linekv: one command per line.
//!
//! ## Modules
//!
//! - `types`: `CommandName` and the validated `Command` value
//! - `parser`: turns a raw line into a `Command` or a `ParseError`
//!
//! ## Example
//!
//! ```
//! use linekv::protocol::{parse_line, CommandName};
//!
//! let cmd = parse_line("GET user/101").unwrap();
//! assert_eq!(cmd.name(), CommandName::Get);
//! assert_eq!(cmd.args(), vec!["user/101"]);
//! ```

pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use parser::{is_valid_argument, parse_line, ParseError, ParseResult};
pub use types::{Command, CommandName};
