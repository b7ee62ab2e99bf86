//! Scanner for the `{{name:value}}` inline markup.
//!
//! Plain text between tags becomes `DrawText`; each tag becomes at most one
//! command. Tag extraction and the `name[:value]` split use `nom`; the outer
//! loop walks the input one character at a time because delimiters are only
//! known at runtime.
use crate::command::CommandList;
use crate::error::MarkupError;
use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_till, take_until},
    character::complete::char,
    combinator::{opt, rest},
    sequence::{delimited, pair, preceded},
};
use serde::Deserialize;

pub const DEFAULT_LEFT_DELIMITER: &str = "{{";
pub const DEFAULT_RIGHT_DELIMITER: &str = "}}";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    pub left_delimiter: String,
    pub right_delimiter: String,
    /// Turn every literal `\n` outside a tag into a `Newline` command.
    pub newline_as_command: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            left_delimiter: DEFAULT_LEFT_DELIMITER.to_string(),
            right_delimiter: DEFAULT_RIGHT_DELIMITER.to_string(),
            newline_as_command: false,
        }
    }
}

impl ParseOptions {
    pub fn with_delimiters(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left_delimiter: left.into(),
            right_delimiter: right.into(),
            ..Self::default()
        }
    }

    pub fn newline_as_command(mut self, enabled: bool) -> Self {
        self.newline_as_command = enabled;
        self
    }
}

// --- Main Public Parser ---

/// Parse `text` into a command list.
///
/// Fails on the first left delimiter with no matching right delimiter; no
/// partial list is returned in that case.
pub fn parse_markup(text: &str, options: &ParseOptions) -> Result<CommandList, MarkupError> {
    let left = options.left_delimiter.as_str();
    let right = options.right_delimiter.as_str();
    if left.is_empty() || right.is_empty() {
        return Err(MarkupError::EmptyDelimiter);
    }

    let mut list = CommandList::new();
    let mut cursor = 0;
    let mut pending = 0;

    while cursor < text.len() {
        let remaining = &text[cursor..];

        if remaining.starts_with(left) {
            let (after, body) = tag_block(left, right).parse(remaining).map_err(|_| {
                MarkupError::UnmatchedTag {
                    offset: cursor,
                    right: right.to_string(),
                }
            })?;

            flush_text(&mut list, &text[pending..cursor]);
            push_tag(&mut list, body);

            cursor = text.len() - after.len();
            pending = cursor;
        } else if options.newline_as_command && remaining.starts_with('\n') {
            flush_text(&mut list, &text[pending..cursor]);
            list.push_newline();

            cursor += 1;
            pending = cursor;
        } else {
            cursor += remaining.chars().next().map_or(1, |c| c.len_utf8());
        }
    }

    flush_text(&mut list, &text[pending..]);

    log::debug!("Parsed {} bytes of markup into {} commands", text.len(), list.len());
    Ok(list)
}

fn flush_text(list: &mut CommandList, text: &str) {
    if !text.is_empty() {
        list.push_draw_text(text);
    }
}

fn push_tag(list: &mut CommandList, body: &str) {
    let Ok((_, (name, value))) = tag_body(body) else {
        return;
    };

    match (name, value) {
        ("color", Some(v)) => list.push_set_color(v),
        ("font", Some(v)) => list.push_set_font(v),
        ("size", Some(v)) => list.push_set_size(v),
        ("image", Some(v)) => list.push_draw_image(v),
        ("newline", None) => list.push_newline(),
        ("color" | "font" | "size" | "image", None) => {
            log::trace!("Dropping '{}' tag without a value", name);
        }
        _ => list.push_use_string(name),
    }
}

// --- Combinators ---

fn tag_block<'a>(
    left: &'a str,
    right: &'a str,
) -> impl Parser<&'a str, Output = &'a str, Error = nom::error::Error<&'a str>> {
    delimited(tag(left), take_until(right), tag(right))
}

/// Splits a tag body at its first colon.
fn tag_body(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    pair(take_till(|c: char| c == ':'), opt(preceded(char(':'), rest))).parse(input)
}
