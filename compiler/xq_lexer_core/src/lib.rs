//! Low-level scanning primitives for the XQuery lexer.
//!
//! This crate knows nothing about tokens or lexical modes. It provides:
//!
//! - [`SourceBuffer`]: an immutable UTF-16 code-unit buffer with encoding
//!   diagnostics recorded at construction.
//! - [`Cursor`]: a code-point cursor over a `[from, to)` slice of that
//!   buffer, with `start`/`end` token bounds and a single save slot for
//!   backtracking.
//! - [`char_class`]: XML 1.0 `S`, `NameStartChar` and `NameChar`
//!   classification of code points.
//!
//! Offsets everywhere are UTF-16 code-unit indices, which is what editor
//! hosts use for document positions.

pub mod char_class;
mod cursor;
mod source_buffer;

pub use cursor::{Cursor, END_OF_BUFFER};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
