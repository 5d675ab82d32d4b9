//! Resumable XQuery lexer.
//!
//! Turns UTF-16 source text into a flat stream of classified tokens for
//! XQuery 1.0 through 3.1, the Update Facility, the Scripting Extension,
//! and the MarkLogic/Saxon/BaseX vendor syntax, which all share one token
//! space.
//!
//! # Architecture
//!
//! - [`Lexer`]: the mode-stack state machine. One token per
//!   [`advance()`](Lexer::advance), malformed input degrades to diagnostic
//!   tokens, and [`Lexer::state()`] resumes lexing at any token boundary.
//! - [`State`] / [`LexState`]: the opaque packed state and its explicit
//!   `(mode, stack)` form.
//! - [`TokenKind`]: the closed, stably numbered token enumeration.
//! - [`keywords`]: spelling to keyword kind and [`KeywordCategory`],
//!   plus the [`keywords::is_accepted`] policy over a [`Dialect`].
//!
//! Scanning primitives (cursor, source buffer, character classes) live in
//! `xq_lexer_core`.

mod dialect;
mod error;
pub mod keywords;
mod lexer;
mod state;
mod token;

pub use dialect::{Dialect, Extensions, ParseDialectError, XQueryVersion};
pub use error::StartError;
pub use keywords::KeywordCategory;
pub use lexer::{tokenize, tokenize_with_states, Lexer};
pub use state::{LexState, Mode, State, StateError, RETURN_MODES, STACK_CAPACITY};
pub use token::{Token, TokenKind};
pub use xq_lexer_core::{EncodingIssue, EncodingIssueKind, SourceBuffer};
