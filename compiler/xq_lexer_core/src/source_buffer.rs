//! Immutable UTF-16 source buffer.
//!
//! Editor hosts address documents in UTF-16 code units, so the lexer works
//! on units rather than UTF-8 bytes. The buffer is built once, never
//! mutated, and lent to any number of cursors.
//!
//! # Encoding Detection
//!
//! During construction, the buffer scans for encoding issues:
//! - a byte-order mark (U+FEFF) at the start of the text
//! - unpaired surrogates, which can only arrive through
//!   [`SourceBuffer::from_utf16`]
//!
//! Issues are recorded as [`EncodingIssue`] values. They never stop the
//! lexer; an unpaired surrogate simply lexes as a bad character.

use crate::Cursor;

/// Immutable buffer of UTF-16 code units.
#[derive(Clone, Debug, Default)]
pub struct SourceBuffer {
    units: Vec<u16>,
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during source buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    /// What kind of encoding issue was detected.
    pub kind: EncodingIssueKind,
    /// Code-unit offset where the issue was found.
    pub pos: usize,
    /// Length of the problematic sequence in code units.
    pub len: usize,
}

/// Kind of encoding issue detected in a source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// U+FEFF at offset 0.
    ByteOrderMark,
    /// A high surrogate not followed by a low one, or a low surrogate not
    /// preceded by a high one.
    UnpairedSurrogate,
}

impl SourceBuffer {
    /// Encode `source` as UTF-16.
    pub fn new(source: &str) -> Self {
        Self::from_utf16(source.encode_utf16().collect())
    }

    /// Adopt raw UTF-16 units, which may contain unpaired surrogates.
    pub fn from_utf16(units: Vec<u16>) -> Self {
        let mut encoding_issues = Vec::new();
        detect_encoding_issues(&units, &mut encoding_issues);
        Self {
            units,
            encoding_issues,
        }
    }

    /// The code units of the whole buffer.
    pub fn units(&self) -> &[u16] {
        &self.units
    }

    /// Create a [`Cursor`] over the whole buffer.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.units, 0, self.units.len())
    }

    /// Create a [`Cursor`] over `from..to`.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or exceeds the buffer.
    pub fn cursor_range(&self, from: usize, to: usize) -> Cursor<'_> {
        Cursor::new(&self.units, from, to)
    }

    /// Length in code units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Decode `start..end` for display. Unpaired surrogates become U+FFFD.
    pub fn text(&self, start: usize, end: usize) -> String {
        String::from_utf16_lossy(&self.units[start..end])
    }

    /// Encoding issues detected during construction.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

fn detect_encoding_issues(units: &[u16], issues: &mut Vec<EncodingIssue>) {
    if units.first() == Some(&0xFEFF) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::ByteOrderMark,
            pos: 0,
            len: 1,
        });
    }
    detect_unpaired_surrogates(units, issues);
}

fn detect_unpaired_surrogates(units: &[u16], issues: &mut Vec<EncodingIssue>) {
    let mut pos = 0;
    while pos < units.len() {
        match units[pos] {
            0xD800..=0xDBFF => {
                if matches!(units.get(pos + 1), Some(0xDC00..=0xDFFF)) {
                    pos += 2;
                    continue;
                }
                issues.push(EncodingIssue {
                    kind: EncodingIssueKind::UnpairedSurrogate,
                    pos,
                    len: 1,
                });
            }
            0xDC00..=0xDFFF => issues.push(EncodingIssue {
                kind: EncodingIssueKind::UnpairedSurrogate,
                pos,
                len: 1,
            }),
            _ => {}
        }
        pos += 1;
    }
}

#[cfg(test)]
mod tests;
