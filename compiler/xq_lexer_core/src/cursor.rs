//! Code-point cursor over a UTF-16 buffer.
//!
//! The cursor tracks the token currently being assembled as a pair of
//! offsets: `start` is where the token began, `end` is the read position.
//! [`advance()`](Cursor::advance) moves `end` forward by one Unicode code
//! point, pairing a high surrogate with an immediately following low
//! surrogate. An unpaired surrogate is a code point of its own, one unit
//! wide. Reads never go past the range end: at the boundary the current
//! code point is [`END_OF_BUFFER`] and advancing is a no-op.
//!
//! # Invariant
//!
//! `from <= start <= end <= buffer_end <= units.len()` at all times.

/// Code point reported at the end of the scanned range.
///
/// Lies outside the Unicode code space, so it never collides with a real
/// (or surrogate) code point.
pub const END_OF_BUFFER: u32 = 0xFFFF_FFFF;

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Code-point cursor over a `[from, to)` range of UTF-16 code units.
///
/// The cursor is [`Copy`], so lookahead helpers can scan on a copy and
/// throw it away. The [`save()`](Self::save)/[`restore()`](Self::restore)
/// slot is the explicit single-level checkpoint the lexer uses when it
/// needs to give back code points it already matched.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    units: &'a [u16],
    start: usize,
    end: usize,
    buffer_end: usize,
    saved: (usize, usize),
}

impl<'a> Cursor<'a> {
    /// Create a cursor over `units[from..to]` with an empty token at `from`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to` or `to > units.len()`. Offsets come from the
    /// integration layer, so a bad range is a caller bug rather than
    /// malformed input.
    pub fn new(units: &'a [u16], from: usize, to: usize) -> Self {
        assert!(from <= to, "cursor range start {from} exceeds end {to}");
        assert!(
            to <= units.len(),
            "cursor range end {to} exceeds buffer length {}",
            units.len()
        );
        Self {
            units,
            start: from,
            end: from,
            buffer_end: to,
            saved: (from, from),
        }
    }

    /// Offset of the first unit of the token being assembled.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Read position: one past the last unit matched so far.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// End of the scanned range (exclusive).
    #[inline]
    pub fn buffer_end(&self) -> usize {
        self.buffer_end
    }

    /// Returns `true` once `end` has reached the end of the range.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.end >= self.buffer_end
    }

    /// Decode the code point beginning at `end` without consuming it.
    ///
    /// Returns [`END_OF_BUFFER`] at the end of the range.
    #[inline]
    pub fn code_point(&self) -> u32 {
        decode_at(self.units, self.end, self.buffer_end).0
    }

    /// The current code point as a `char`.
    ///
    /// `None` at the end of the range and for unpaired surrogates; use
    /// [`is_eof()`](Self::is_eof) to tell them apart.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        char::from_u32(self.code_point())
    }

    /// Consume one code point.
    ///
    /// A valid surrogate pair is consumed as a unit; anything else moves by
    /// a single code unit. Idempotent at the end of the range.
    #[inline]
    pub fn advance(&mut self) {
        let (_, width) = decode_at(self.units, self.end, self.buffer_end);
        self.end += width;
    }

    /// Consume `n` code points (stopping early at the end of the range).
    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Begin a new token at the current read position.
    #[inline]
    pub fn flush(&mut self) {
        self.start = self.end;
    }

    /// Remember the current `(start, end)` pair.
    ///
    /// There is one slot: a second `save()` overwrites the first.
    #[inline]
    pub fn save(&mut self) {
        self.saved = (self.start, self.end);
    }

    /// Roll back to the last [`save()`](Self::save), undoing every
    /// [`advance()`](Self::advance) made since.
    #[inline]
    pub fn restore(&mut self) {
        (self.start, self.end) = self.saved;
    }

    /// Code point `n` positions ahead of the read position (`0` is the
    /// current one).
    pub fn nth_code_point(&self, n: usize) -> u32 {
        let mut ahead = *self;
        ahead.advance_n(n);
        ahead.code_point()
    }

    /// Returns `true` if the upcoming code points spell `text`.
    pub fn at_str(&self, text: &str) -> bool {
        let mut ahead = *self;
        for c in text.chars() {
            if ahead.code_point() != u32::from(c) {
                return false;
            }
            ahead.advance();
        }
        true
    }

    /// Consume `text` if the upcoming code points spell it.
    ///
    /// Leaves the cursor untouched (including the save slot) when they
    /// don't.
    pub fn eat_str(&mut self, text: &str) -> bool {
        let mut ahead = *self;
        for c in text.chars() {
            if ahead.code_point() != u32::from(c) {
                return false;
            }
            ahead.advance();
        }
        self.end = ahead.end;
        true
    }

    /// Advance while `pred` holds for the current code point.
    ///
    /// `pred` never sees [`END_OF_BUFFER`]; the loop stops there first.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u32) -> bool) {
        while !self.is_eof() && pred(self.code_point()) {
            self.advance();
        }
    }

    /// The units of the token assembled so far (`start..end`).
    pub fn token_units(&self) -> &'a [u16] {
        &self.units[self.start..self.end]
    }
}

/// Decode the code point at `pos`, returning it with its width in units.
///
/// Width is 0 only for [`END_OF_BUFFER`].
#[inline]
fn decode_at(units: &[u16], pos: usize, limit: usize) -> (u32, usize) {
    if pos >= limit {
        return (END_OF_BUFFER, 0);
    }
    let unit = units[pos];
    if HIGH_SURROGATES.contains(&unit) && pos + 1 < limit {
        let next = units[pos + 1];
        if LOW_SURROGATES.contains(&next) {
            let high = u32::from(unit - 0xD800);
            let low = u32::from(next - 0xDC00);
            return (0x10000 + (high << 10) + low, 2);
        }
    }
    (u32::from(unit), 1)
}
