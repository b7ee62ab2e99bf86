use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    #[error("Unmatched left tag at byte {offset}: no closing '{right}' found")]
    UnmatchedTag { offset: usize, right: String },

    #[error("Delimiters must not be empty")]
    EmptyDelimiter,
}
