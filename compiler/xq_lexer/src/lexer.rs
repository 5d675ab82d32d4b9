//! Resumable, mode-stack XQuery lexer.
//!
//! The lexer is a pull-based state machine. Each [`advance()`](Lexer::advance)
//! call flushes the cursor, dispatches on the current [`Mode`], and returns
//! exactly one token. Nested constructs (strings inside enclosed
//! expressions inside attribute values inside elements...) push the mode
//! to return to onto the state stack; their closing delimiters pop it.
//!
//! Everything a step depends on lives in the cursor position and the
//! [`LexState`], so [`state()`](Lexer::state) taken after any token, fed back
//! through [`start()`](Lexer::start) at that token's end, reproduces the rest
//! of the token stream exactly.
//!
//! # Error handling
//!
//! Malformed input never fails. Bad characters, unterminated constructs,
//! and truncated references all become tokens, and the token texts always
//! concatenate back to the scanned range. The only failures are
//! integration errors: an out-of-range slice or an undecodable state.

mod comments;
mod default;
mod literals;
mod markup;
mod references;

use tracing::trace;
use xq_lexer_core::char_class::{is_name_char, is_whitespace};
use xq_lexer_core::Cursor;

use crate::error::StartError;
use crate::state::{LexState, Mode, State};
use crate::token::{Token, TokenKind};

/// The state-machine lexer over a UTF-16 buffer.
///
/// # Example
///
/// ```
/// use xq_lexer::{Lexer, TokenKind};
///
/// let units: Vec<u16> = "1e".encode_utf16().collect();
/// let mut lexer = Lexer::new(&units);
/// assert_eq!(lexer.advance(), Some(TokenKind::IntegerLiteral));
/// assert_eq!(lexer.advance(), Some(TokenKind::PartialDoubleLiteralExponent));
/// assert_eq!(lexer.advance(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    state: LexState,
    token: Option<TokenKind>,
}

impl<'a> Lexer<'a> {
    /// Lex all of `units` from [`State::INITIAL`].
    pub fn new(units: &'a [u16]) -> Self {
        Self {
            cursor: Cursor::new(units, 0, units.len()),
            state: LexState::default(),
            token: None,
        }
    }

    /// Lex `units[from..to]` starting in `state`.
    pub fn with_range(
        units: &'a [u16],
        from: usize,
        to: usize,
        state: State,
    ) -> Result<Self, StartError> {
        let mut lexer = Self::new(units);
        lexer.try_start(units, from, to, state)?;
        Ok(lexer)
    }

    /// Restart over `units[from..to]` in `state`.
    ///
    /// # Panics
    ///
    /// Panics if the range is invalid or `state` does not decode. Both are
    /// caller bugs; hosts that want to report them use
    /// [`try_start`](Self::try_start).
    pub fn start(&mut self, units: &'a [u16], from: usize, to: usize, state: State) {
        if let Err(err) = self.try_start(units, from, to, state) {
            panic!("{err}");
        }
    }

    /// Fallible form of [`start`](Self::start). On error the lexer is left
    /// unchanged.
    pub fn try_start(
        &mut self,
        units: &'a [u16],
        from: usize,
        to: usize,
        state: State,
    ) -> Result<(), StartError> {
        if from > to {
            return Err(StartError::InvertedRange { from, to });
        }
        if to > units.len() {
            return Err(StartError::RangeOutOfBounds {
                to,
                len: units.len(),
            });
        }
        self.state = state.unpack()?;
        self.cursor = Cursor::new(units, from, to);
        self.token = None;
        Ok(())
    }

    /// Scan the next token.
    ///
    /// Returns `None` at the end of the range, and keeps returning `None`
    /// without moving on later calls.
    pub fn advance(&mut self) -> Option<TokenKind> {
        self.cursor.flush();
        self.token = self.scan();
        if let Some(kind) = self.token {
            trace!(
                ?kind,
                start = self.cursor.start(),
                end = self.cursor.end(),
                mode = ?self.state.mode,
                "token"
            );
        }
        self.token
    }

    /// Kind of the last token, `None` before the first
    /// [`advance()`](Self::advance) and at the end.
    #[inline]
    pub fn token_kind(&self) -> Option<TokenKind> {
        self.token
    }

    #[inline]
    pub fn token_start(&self) -> usize {
        self.cursor.start()
    }

    #[inline]
    pub fn token_end(&self) -> usize {
        self.cursor.end()
    }

    #[inline]
    pub fn buffer_end(&self) -> usize {
        self.cursor.buffer_end()
    }

    /// State to resume from at [`token_end()`](Self::token_end).
    pub fn state(&self) -> State {
        self.state.pack()
    }

    // ─── Dispatch ──────────────────────────────────────────────────────

    fn scan(&mut self) -> Option<TokenKind> {
        if self.cursor.is_eof() {
            return self.end_of_buffer();
        }
        Some(self.scan_mode())
    }

    /// Scan one token in the current mode. Never called at the end of the
    /// range.
    fn scan_mode(&mut self) -> TokenKind {
        match self.state.mode {
            Mode::Default => self.default_mode(),
            Mode::DoubleExponent => self.double_exponent(),
            Mode::StringQuot => self.string_literal('"'),
            Mode::StringApos => self.string_literal('\''),
            Mode::BracedUriLiteral => self.braced_uri_literal(),
            Mode::StringConstructor => self.string_constructor(),
            Mode::Comment => self.comment(),
            Mode::DocCommentStart => self.doc_comment_start(),
            Mode::DocComment => self.doc_comment(),
            Mode::PragmaPreQName => self.pragma_name(),
            Mode::PragmaQName => self.pragma_qname(),
            Mode::PragmaContents => self.pragma_contents(),
            Mode::XmlComment => self.xml_comment(),
            Mode::CdataSection => self.cdata_section(),
            Mode::PiTarget => self.pi_target(),
            Mode::PiContents => self.pi_contents(),
            Mode::ElemTagName | Mode::ElemAttributes => self.start_tag(),
            Mode::ElemClosingTag => self.end_tag(),
            Mode::AttrValueQuot => self.attribute_value('"'),
            Mode::AttrValueApos => self.attribute_value('\''),
            Mode::ElemContent => self.element_content(),
        }
    }

    /// Constructs that must be closed report a zero-length
    /// [`TokenKind::UnexpectedEndOfBlock`] and are abandoned, including one
    /// the input ends inside of, such as a string constructor cut off in an
    /// interpolation. One marker per abandoned construct; everything else
    /// just ends.
    fn end_of_buffer(&mut self) -> Option<TokenKind> {
        let open = std::iter::once(self.state.mode)
            .chain(self.state.stack.iter().rev().copied())
            .position(must_close)?;
        for _ in 0..=open {
            self.state.pop();
        }
        Some(TokenKind::UnexpectedEndOfBlock)
    }

    // ─── Shared helpers ────────────────────────────────────────────────

    /// Returns `true` if the current code point is `c`.
    #[inline]
    fn at(&self, c: char) -> bool {
        self.cursor.code_point() == u32::from(c)
    }

    /// Returns `true` if the code point `n` ahead is `c`.
    #[inline]
    fn peek_is(&self, n: usize, c: char) -> bool {
        self.cursor.nth_code_point(n) == u32::from(c)
    }

    /// Consume `n` code points and report `kind`.
    #[inline]
    fn bump(&mut self, n: usize, kind: TokenKind) -> TokenKind {
        self.cursor.advance_n(n);
        kind
    }

    fn bad_character(&mut self) -> TokenKind {
        self.bump(1, TokenKind::BadCharacter)
    }

    fn whitespace(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.eat_while(is_whitespace);
        kind
    }

    /// Consume an NCName. The caller has checked the first code point.
    fn ncname(&mut self) {
        self.cursor.advance();
        self.cursor.eat_while(is_name_char);
    }

    /// Consume up to (not including) the first occurrence of `terminator`,
    /// or to the end of the range.
    fn eat_until_str(&mut self, terminator: &str) {
        while !self.cursor.is_eof() && !self.cursor.at_str(terminator) {
            self.cursor.advance();
        }
    }
}

/// Modes whose construct is an error when the input ends inside it.
const fn must_close(mode: Mode) -> bool {
    matches!(
        mode,
        Mode::Comment
            | Mode::DocCommentStart
            | Mode::DocComment
            | Mode::XmlComment
            | Mode::CdataSection
            | Mode::PiTarget
            | Mode::PiContents
            | Mode::PragmaPreQName
            | Mode::PragmaQName
            | Mode::PragmaContents
            | Mode::StringConstructor
    )
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let kind = self.advance()?;
        Some(Token {
            kind,
            start: self.token_start(),
            end: self.token_end(),
        })
    }
}

/// Lex a whole document from the initial state.
///
/// Offsets in the returned tokens are UTF-16 code units.
pub fn tokenize(source: &str) -> Vec<Token> {
    let units: Vec<u16> = source.encode_utf16().collect();
    Lexer::new(&units).collect()
}

/// Lex a range of `units` from `state`, pairing each token with the state
/// it was lexed from.
///
/// Hosts that cache states per token use this to seed incremental
/// re-lexing.
pub fn tokenize_with_states(
    units: &[u16],
    from: usize,
    to: usize,
    state: State,
) -> Result<Vec<(State, Token)>, StartError> {
    let mut lexer = Lexer::with_range(units, from, to, state)?;
    let mut tokens = Vec::new();
    loop {
        let before = lexer.state();
        let Some(token) = lexer.next() else {
            break;
        };
        tokens.push((before, token));
    }
    Ok(tokens)
}
