//! Integration errors.
//!
//! Malformed input never produces an error; it becomes tokens. These are
//! the caller mistakes [`Lexer::try_start`](crate::Lexer::try_start)
//! reports instead of panicking.

use crate::state::StateError;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StartError {
    #[error("lexer range start {from} exceeds end {to}")]
    InvertedRange { from: usize, to: usize },
    #[error("lexer range end {to} exceeds buffer length {len}")]
    RangeOutOfBounds { to: usize, len: usize },
    #[error("invalid initial lexer state: {0}")]
    InvalidState(#[from] StateError),
}
