//! Inline markup for styled text.
//!
//! Text such as `Hello {{color:red}}{{user}}{{newline}}` is turned into a
//! [`CommandList`]: plain runs become `DrawText`, the reserved tags `color`,
//! `font`, `size`, `image` and `newline` become style and layout commands, and
//! any other tag is a reference to a registered string.

pub mod command;
pub mod error;
mod parser;

// --- Public API ---
pub use command::{Command, CommandList};
pub use error::MarkupError;
pub use parser::{DEFAULT_LEFT_DELIMITER, DEFAULT_RIGHT_DELIMITER, ParseOptions, parse_markup};
