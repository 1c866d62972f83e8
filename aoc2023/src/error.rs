use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("no solution for day {0}")]
    UnknownDay(usize),

    #[error("part must be 1 or 2, got {0}")]
    UnknownPart(u8),

    #[error("malformed input {line:?}: {reason}")]
    Malformed { line: String, reason: &'static str },

    #[error("invalid number: {0}")]
    ParseInt(#[from] ParseIntError),

    #[error("input has no answer: {0}")]
    NoAnswer(&'static str),
}

pub type Result<T> = std::result::Result<T, PuzzleError>;

pub(crate) fn malformed(line: &str, reason: &'static str) -> PuzzleError {
    PuzzleError::Malformed { line: line.to_string(), reason }
}
