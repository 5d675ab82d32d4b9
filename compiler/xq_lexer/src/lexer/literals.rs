//! String literals, braced URI literals, and string constructors.

use super::references::RefContext;
use super::Lexer;
use crate::state::Mode;
use crate::token::TokenKind;

impl Lexer<'_> {
    /// Inside `"..."` or `'...'`. A doubled delimiter stands for itself.
    pub(super) fn string_literal(&mut self, quote: char) -> TokenKind {
        if self.at(quote) {
            if self.peek_is(1, quote) {
                return self.bump(2, TokenKind::EscapedCharacter);
            }
            self.state.pop();
            return self.bump(1, TokenKind::StringLiteralEnd);
        }
        if self.at('&') {
            return self.reference(RefContext::Text);
        }
        self.cursor
            .eat_while(|cp| !matches!(char::from_u32(cp), Some(c) if c == quote || c == '&'));
        TokenKind::StringLiteralContents
    }

    /// Inside `Q{...}`. Doubled braces are escapes, a lone `}` ends the
    /// literal and a lone `{` is an error.
    pub(super) fn braced_uri_literal(&mut self) -> TokenKind {
        match self.cursor.current_char() {
            Some('}') => {
                if self.peek_is(1, '}') {
                    self.bump(2, TokenKind::EscapedCharacter)
                } else {
                    self.state.pop();
                    self.bump(1, TokenKind::BracedUriLiteralEnd)
                }
            }
            Some('{') => {
                if self.peek_is(1, '{') {
                    self.bump(2, TokenKind::EscapedCharacter)
                } else {
                    self.bad_character()
                }
            }
            Some('&') => self.reference(RefContext::Text),
            _ => {
                self.cursor
                    .eat_while(|cp| !matches!(char::from_u32(cp), Some('{' | '}' | '&')));
                TokenKind::StringLiteralContents
            }
        }
    }

    /// Between ``` ``[ ``` and ``` ]`` ```. Text is verbatim: only the end
    /// delimiter and `` `{ `` interpolation openers are significant.
    pub(super) fn string_constructor(&mut self) -> TokenKind {
        if self.cursor.at_str("]``") {
            self.state.pop();
            return self.bump(3, TokenKind::StringConstructorEnd);
        }
        if self.cursor.at_str("`{") {
            self.state.push(Mode::Default);
            return self.bump(2, TokenKind::StringInterpolationOpen);
        }
        while !self.cursor.is_eof()
            && !self.cursor.at_str("]``")
            && !self.cursor.at_str("`{")
        {
            self.cursor.advance();
        }
        TokenKind::StringConstructorContents
    }
}
